use std::env;
use std::time::Duration;

use reqwest::Url;
use tracing::warn;

/// Environment variable holding the backend origin, e.g. `https://api.example.com`.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Optional override for [`DEFAULT_TIMEOUT`], in whole seconds.
pub const BACKEND_TIMEOUT_VAR: &str = "BACKEND_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the backend lives and how long a single call may take.
///
/// A missing or unusable base URL is not fatal: the client built from it fails
/// every call immediately, and the site keeps rendering its static content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Option<Url>,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub const fn new(base_url: Option<Url>, timeout: Duration) -> Self {
        Self { base_url, timeout }
    }

    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var(BACKEND_URL_VAR).ok();
        let timeout = env::var(BACKEND_TIMEOUT_VAR).ok();
        Self::from_values(base_url.as_deref(), timeout.as_deref())
    }

    /// Builds a config from raw strings, logging and discarding unusable values.
    #[must_use]
    pub fn from_values(base_url: Option<&str>, timeout_secs: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| match parse_base_url(raw) {
                Ok(url) => Some(url),
                Err(reason) => {
                    warn!(
                        base_url = raw,
                        reason, "Ignoring unusable {BACKEND_URL_VAR}; backend calls will fail"
                    );
                    None
                }
            });

        if base_url.is_none() {
            warn!("{BACKEND_URL_VAR} is not set; serving static content only");
        }

        let timeout = timeout_secs
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| match raw.parse::<u64>() {
                Ok(0) | Err(_) => {
                    warn!(value = raw, "Ignoring invalid {BACKEND_TIMEOUT_VAR}");
                    None
                }
                Ok(secs) => Some(Duration::from_secs(secs)),
            })
            .unwrap_or(DEFAULT_TIMEOUT);

        Self { base_url, timeout }
    }

    /// The `/api/` root every endpoint hangs off.
    #[must_use]
    pub fn api_root(&self) -> Option<Url> {
        let mut root = self.base_url.clone()?;
        let path = format!("{}/api/", root.path().trim_end_matches('/'));
        root.set_path(&path);
        root.set_query(None);
        root.set_fragment(None);
        Some(root)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, &'static str> {
    let url = Url::parse(raw).map_err(|_| "not a valid URL")?;
    match url.scheme() {
        "http" | "https" if !url.cannot_be_a_base() => Ok(url),
        _ => Err("only http and https origins are supported"),
    }
}
