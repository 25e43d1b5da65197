// ── Core error types ──
//
// User-facing errors from squeakdash-core. Consumers never see raw HTTP
// plumbing; the `From<squeakdash_api::Error>` impl translates transport-layer
// errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to admin service at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Admin service request timed out")]
    Timeout,

    // ── Remote errors ────────────────────────────────────────────────
    #[error("{message}")]
    NotFound { message: String },

    /// The service processed the request and refused it.
    #[error("{message}")]
    Rejected {
        message: String,
        /// RPC status code, when the service supplied one.
        code: Option<i32>,
        /// HTTP status of the reply.
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Returns `true` for failures that never reached the service.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. } | Self::Timeout)
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<squeakdash_api::Error> for CoreError {
    fn from(err: squeakdash_api::Error) -> Self {
        use squeakdash_api::Error as ApiError;

        if err.is_not_found() {
            return CoreError::NotFound {
                message: err.to_string(),
            };
        }

        match err {
            ApiError::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), |u| u.origin().ascii_serialization()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Rejected {
                        message: e.to_string(),
                        code: None,
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            ApiError::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            ApiError::ClientBuild(msg) => CoreError::Config { message: msg },
            ApiError::Rpc {
                message,
                code,
                status,
            } => CoreError::Rejected {
                message,
                code,
                status: Some(status),
            },
            ApiError::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
