use serde_json::Value;
use thiserror::Error;

/// Failures of a single backend call, before any domain wording is applied.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("backend URL is not configured")]
    NotConfigured,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid endpoint URL: {0}")]
    Endpoint(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend responded with status {status}")]
    Status {
        status: u16,
        detail: Option<String>,
        body: String,
    },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// A message worth showing a visitor verbatim, when the failure carries one.
    ///
    /// Only a string `detail`/`message` from the backend or our own input
    /// validation qualify; transport and decode failures never do.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            Self::InvalidRequest(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}

/// Pulls a human readable message out of an error body.
///
/// FastAPI style bodies carry `{"detail": "..."}`; validation failures carry a list
/// under `detail` instead, which is not something to show a visitor.
pub(crate) fn detail_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["detail", "message"]
        .into_iter()
        .filter_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}

/// A failed domain operation, worded for the visitor.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
    #[source]
    source: ApiError,
}

impl ServiceError {
    /// Prefers the backend's own message and otherwise uses `default_message`.
    pub(crate) fn from_api(source: ApiError, default_message: &str) -> Self {
        let message = source
            .server_message()
            .map_or_else(|| default_message.to_owned(), ToOwned::to_owned);
        Self { message, source }
    }

    /// Ignores whatever the backend said and always reports `message`.
    pub(crate) fn fixed(source: ApiError, message: &str) -> Self {
        Self {
            message: message.to_owned(),
            source,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn api_error(&self) -> &ApiError {
        &self.source
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.source.status()
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.source.status(), Some(404))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_detail_from_body_prefers_detail() {
        let body = r#"{"detail": "Blog post not found", "message": "ignored"}"#;
        assert_eq!(
            detail_from_body(body).as_deref(),
            Some("Blog post not found")
        );
    }

    #[test]
    fn test_detail_from_body_falls_back_to_message() {
        let body = r#"{"message": "Rate limited"}"#;
        assert_eq!(detail_from_body(body).as_deref(), Some("Rate limited"));
    }

    #[test]
    fn test_detail_from_body_ignores_unusable_payloads() {
        assert_eq!(detail_from_body("<html>Bad Gateway</html>"), None);
        assert_eq!(detail_from_body(""), None);
        assert_eq!(detail_from_body(r#"{"detail": "   "}"#), None);
        // Validation failures arrive as a list of problems.
        assert_eq!(
            detail_from_body(r#"{"detail": [{"loc": ["body", "email"], "msg": "bad"}]}"#),
            None
        );
    }

    #[test]
    fn test_service_error_prefers_server_detail() {
        let source = ApiError::Status {
            status: 404,
            detail: Some("Blog post not found".to_owned()),
            body: String::new(),
        };
        let error = ServiceError::from_api(source, "Failed to fetch blog post");

        assert_eq!(error.message(), "Blog post not found");
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Blog post not found");
    }

    #[test]
    fn test_service_error_uses_default_without_detail() {
        let source = ApiError::Status {
            status: 502,
            detail: None,
            body: "upstream down".to_owned(),
        };
        let error = ServiceError::from_api(source, "Failed to fetch projects");

        assert_eq!(error.message(), "Failed to fetch projects");
        assert_eq!(error.status(), Some(502));
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_not_configured_uses_default() {
        let error = ServiceError::from_api(ApiError::NotConfigured, "Failed to fetch testimonials");
        assert_eq!(error.message(), "Failed to fetch testimonials");
        assert_matches!(error.api_error(), ApiError::NotConfigured);
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_fixed_message_ignores_detail() {
        let source = ApiError::Status {
            status: 500,
            detail: Some("database exploded".to_owned()),
            body: String::new(),
        };
        let error = ServiceError::fixed(source, "Backend service unavailable");
        assert_eq!(error.message(), "Backend service unavailable");
    }

    #[test]
    fn test_invalid_request_message_is_shown() {
        let error = ServiceError::from_api(
            ApiError::InvalidRequest("Page must be at least 1".to_owned()),
            "Failed to fetch blog posts",
        );
        assert_eq!(error.message(), "Page must be at least 1");
    }
}
