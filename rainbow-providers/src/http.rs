use std::time::Duration;

use rainbow_core::RainbowError;
use serde::de::DeserializeOwned;

/// Default `User-Agent` sent by every connector.
pub const DEFAULT_USER_AGENT: &str = concat!("rainbow/", env!("CARGO_PKG_VERSION"));

/// HTTP client settings shared by the connectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Replace each connector's API root, e.g. to point at a proxy or a mock server.
    pub base_url: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            base_url: None,
        }
    }
}

impl HttpConfig {
    /// Set a whole-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Override the API root used by every connector built from this config.
    #[must_use]
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = Some(base.into());
        self
    }

    pub(crate) fn client(&self) -> Result<reqwest::Client, RainbowError> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.clone());
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        builder
            .build()
            .map_err(|e| RainbowError::InvalidArg(format!("http client: {e}")))
    }

    pub(crate) fn base_or(&self, default: &str) -> Result<String, RainbowError> {
        validate_base(self.base_url.as_deref().unwrap_or(default))
    }
}

/// Parse and normalize an API root, dropping any trailing slash.
pub(crate) fn validate_base(base: &str) -> Result<String, RainbowError> {
    let parsed = url::Url::parse(base)
        .map_err(|e| RainbowError::InvalidArg(format!("invalid base url '{base}': {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(RainbowError::InvalidArg(format!(
            "invalid base url '{base}': unsupported scheme"
        )));
    }
    Ok(base.trim_end_matches('/').to_string())
}

/// Per-connector wording of the three failure kinds.
pub(crate) struct Diagnostics {
    /// Connector name used to tag errors.
    pub provider: &'static str,
    /// Prefix for status and transport messages (`"{label} {status}"`).
    pub label: &'static str,
    /// Message for a body that lacks the expected structure.
    pub bad_payload: &'static str,
}

impl Diagnostics {
    fn transport(&self, e: &reqwest::Error) -> RainbowError {
        RainbowError::provider(self.provider, format!("{} request failed: {e}", self.label))
    }
}

/// GET `url` and decode a JSON body into `T`.
///
/// Transport failures, non-success statuses, and bodies that do not decode
/// into `T` all become `Provider` errors tagged with `diag.provider`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    diag: &Diagnostics,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, RainbowError> {
    let resp = client
        .get(url)
        .query(query)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| diag.transport(&e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(RainbowError::provider(
            diag.provider,
            format!("{} {}", diag.label, status.as_u16()),
        ));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| diag.transport(&e))?;

    serde_json::from_str(&body).map_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::debug!(provider = diag.provider, error = %_e, "payload did not decode");
        RainbowError::provider(diag.provider, diag.bad_payload)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_trimmed() {
        assert_eq!(
            validate_base("http://localhost:8080/").unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn rejects_garbage_and_non_http() {
        assert!(matches!(
            validate_base("not a url"),
            Err(RainbowError::InvalidArg(_))
        ));
        assert!(matches!(
            validate_base("ftp://example.com"),
            Err(RainbowError::InvalidArg(_))
        ));
    }

    #[test]
    fn config_builders() {
        let cfg = HttpConfig::default()
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("ua/1")
            .with_base_url("http://127.0.0.1:1");
        assert_eq!(cfg.timeout, Some(Duration::from_secs(5)));
        assert_eq!(cfg.user_agent, "ua/1");
        assert_eq!(cfg.base_or("https://x").unwrap(), "http://127.0.0.1:1");
        assert!(cfg.client().is_ok());
    }
}
