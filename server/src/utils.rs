use std::env;
use std::fmt::Write as _;

use app::api::backend;
use axum::http::StatusCode;
use axum::response::Response;
use portfolio_api::{ApiClient, ApiError};
use shared_utils::{Backoff, probe};
use tracing::{error, info, warn};

use app::catalog::NAV_LINKS;

pub const SITE_URL_VAR: &str = "SITE_URL";

const CHANGE_FREQUENCY: &str = "weekly";
const PRIORITY: &str = "0.8";

fn build_response(body: String, content_type: &str, status: StatusCode) -> Response<String> {
    match Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(body)
    {
        Ok(response) => response,
        Err(build_error) => {
            error!(?build_error, "Failed to build HTTP response");
            let mut fallback = Response::new(String::new());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        }
    }
}

/// Public origin for absolute links: `SITE_URL` when set, otherwise `fallback`.
pub fn site_url(fallback: &str) -> String {
    let raw = env::var(SITE_URL_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| {
            warn!("{SITE_URL_VAR} is not set; sitemap links use {fallback}");
            fallback.to_owned()
        });
    raw.trim().trim_end_matches('/').to_owned()
}

/// One `<url>` per page anchor, all weekly at priority 0.8.
pub fn render_sitemap(site_url: &str) -> Result<String, std::fmt::Error> {
    let mut sitemap = String::new();
    sitemap.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    sitemap.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for (anchor, _) in NAV_LINKS {
        sitemap.push_str("<url>\n");
        if anchor.is_empty() {
            writeln!(sitemap, "<loc>{site_url}/</loc>")?;
        } else {
            writeln!(sitemap, "<loc>{site_url}/#{anchor}</loc>")?;
        }
        writeln!(sitemap, "<changefreq>{CHANGE_FREQUENCY}</changefreq>")?;
        writeln!(sitemap, "<priority>{PRIORITY}</priority>")?;
        sitemap.push_str("</url>\n");
    }
    sitemap.push_str("</urlset>");
    Ok(sitemap)
}

pub async fn sitemap_handler(site_url: String) -> Response<String> {
    match render_sitemap(&site_url) {
        Ok(sitemap) => build_response(sitemap, "application/xml", StatusCode::OK),
        Err(err) => {
            error!(?err, "Failed to build sitemap");
            build_response(
                "Failed to build sitemap".to_string(),
                "text/plain; charset=utf-8",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

/// Checks backend health at startup. Only logs: the site serves catalog content when the
/// backend is down, so nothing here may stop the server.
pub async fn probe_backend(api: &ApiClient, backoff: Backoff) -> bool {
    if !api.is_configured() {
        warn!("Skipping backend probe; no backend URL configured");
        return false;
    }

    let probe = probe(
        "backend",
        backoff,
        || backend::health(api),
        |err| !matches!(err.api_error(), ApiError::NotConfigured | ApiError::Endpoint(_)),
    )
    .await;

    match &probe.outcome {
        Ok(status) if status.is_active() => {
            info!(attempts = probe.attempts, status = %status.status, "Backend is up");
            true
        }
        Ok(status) => {
            warn!(status = %status.status, "Backend answered but reports it is not active");
            false
        }
        Err(err) => {
            warn!(attempts = probe.attempts, %err, "Backend unreachable; serving static content");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_api::ApiConfig;

    #[test]
    fn test_sitemap_lists_every_anchor() {
        let sitemap = render_sitemap("https://averyquinn.example").unwrap();

        assert!(sitemap.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(sitemap.contains("<loc>https://averyquinn.example/</loc>"));
        for anchor in [
            "about",
            "skills",
            "projects",
            "education",
            "blog",
            "testimonials",
            "contact",
        ] {
            assert!(
                sitemap.contains(&format!("<loc>https://averyquinn.example/#{anchor}</loc>")),
                "missing {anchor}"
            );
        }
        assert_eq!(sitemap.matches("<changefreq>weekly</changefreq>").count(), NAV_LINKS.len());
        assert_eq!(sitemap.matches("<priority>0.8</priority>").count(), NAV_LINKS.len());
        assert!(sitemap.ends_with("</urlset>"));
    }

    #[test]
    fn test_sitemap_handler_responds_with_xml() {
        let response = tokio_test::block_on(sitemap_handler("http://localhost:3007".to_owned()));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Content-Type"], "application/xml");
        assert!(response.body().contains("<loc>http://localhost:3007/#blog</loc>"));
    }

    #[test]
    fn test_probe_skips_unconfigured_backend() {
        let api = ApiClient::new(&ApiConfig::default()).unwrap();
        assert!(!tokio_test::block_on(probe_backend(&api, Backoff::new(1, 1, 3))));
    }
}
