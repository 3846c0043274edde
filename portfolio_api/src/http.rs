//! The one configured HTTP client every domain service goes through.
//!
//! It owns the API root, the per-call timeout and the JSON headers. Each call is a
//! single attempt: requests are logged before dispatch, failures are logged with the
//! backend's payload, and nothing is retried.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::config::ApiConfig;
use crate::error::{ApiError, detail_from_body};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_root: Option<Url>,
}

impl ApiClient {
    /// Builds the shared client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the TLS backend cannot be initialised.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_root: config.api_root(),
        })
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_root.is_some()
    }

    /// `GET` the resource at `segments` under the API root.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]; every failure mode of a single attempt is surfaced.
    pub async fn get<T>(&self, segments: &[&str], query: &[(&str, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments, query)?;
        let request = self.http.get(url.clone());
        self.execute(Method::GET, &url, request).await
    }

    /// `POST` a JSON body to the resource at `segments` under the API root.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]; every failure mode of a single attempt is surfaced.
    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments, &[])?;
        let payload = serde_json::to_vec(body)?;
        let request = self.http.post(url.clone()).body(payload);
        self.execute(Method::POST, &url, request).await
    }

    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, ApiError> {
        let Some(root) = &self.api_root else {
            warn!(
                path = segments.join("/"),
                "Backend URL is not configured; failing request"
            );
            return Err(ApiError::NotConfigured);
        };

        let mut url = root.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ApiError::Endpoint(root.to_string()))?;
            path.pop_if_empty();
            if segments.is_empty() {
                path.push("");
            } else {
                path.extend(segments);
            }
        }
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url)
    }

    async fn execute<T>(&self, method: Method, url: &Url, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let target = display_target(url);
        debug!(%method, path = %target, "API request");

        let response = request.send().await.map_err(|err| {
            error!(%method, path = %target, error = %err, timeout = err.is_timeout(), "API request failed");
            ApiError::Transport(err)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            error!(%method, path = %target, error = %err, "Failed to read API response");
            ApiError::Transport(err)
        })?;

        if !status.is_success() {
            error!(
                %method,
                path = %target,
                status = status.as_u16(),
                payload = %body,
                "API error response"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail: detail_from_body(&body),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|err| {
            error!(%method, path = %target, error = %err, payload = %body, "Malformed API response");
            ApiError::Decode(err)
        })
    }
}

/// Path plus query, which is what gets logged for each call.
fn display_target(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TIMEOUT;
    use assert_matches::assert_matches;

    fn client(base: &str) -> ApiClient {
        let config = ApiConfig::from_values(Some(base), None);
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments_under_api_root() {
        let client = client("http://localhost:8001");
        let url = client.endpoint(&["blog", "abc-123"], &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8001/api/blog/abc-123");
    }

    #[test]
    fn test_endpoint_for_root_keeps_trailing_slash() {
        let client = client("http://localhost:8001/");
        let url = client.endpoint(&[], &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8001/api/");
    }

    #[test]
    fn test_endpoint_escapes_segments_and_query() {
        let client = client("http://localhost:8001");
        let url = client
            .endpoint(
                &["blog", "a/b c"],
                &[("category", "Business Analysis".to_owned())],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8001/api/blog/a%2Fb%20c?category=Business+Analysis"
        );
        assert_eq!(
            display_target(&url),
            "/api/blog/a%2Fb%20c?category=Business+Analysis"
        );
    }

    #[test]
    fn test_unconfigured_client_fails_fast() {
        let client = ApiClient::new(&ApiConfig::new(None, DEFAULT_TIMEOUT)).unwrap();
        assert!(!client.is_configured());

        let result: Result<serde_json::Value, _> =
            tokio_test::block_on(client.get(&["projects"], &[]));
        assert_matches!(result, Err(ApiError::NotConfigured));
    }
}
