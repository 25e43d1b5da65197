// ── Runtime connection configuration ──
//
// Describes *where* the admin service lives and how long to wait for it.
// Never touches disk: the CLI builds an `AdminConfig` and hands it in.

use std::time::Duration;

use url::Url;

use squeakdash_api::DEFAULT_ADMIN_PORT;

use crate::error::CoreError;

/// Configuration for the session's single admin-service handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Service base URL (e.g., `http://127.0.0.1:8080`).
    pub url: Url,
    /// Request timeout applied by the HTTP client.
    pub timeout: Duration,
}

impl AdminConfig {
    /// Target the admin service on `host` at `port`.
    pub fn for_host(host: &str, port: u16) -> Result<Self, CoreError> {
        let url = Url::parse(&format!("http://{host}:{port}")).map_err(|e| CoreError::Config {
            message: format!("invalid admin host '{host}': {e}"),
        })?;
        Ok(Self {
            url,
            ..Self::default()
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        let url = Url::parse(&format!("http://127.0.0.1:{DEFAULT_ADMIN_PORT}"))
            .unwrap_or_else(|_| unreachable!("static URL is well-formed"));
        Self {
            url,
            timeout: Duration::from_secs(30),
        }
    }
}
