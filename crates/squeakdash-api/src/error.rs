use thiserror::Error;

/// Top-level error type for the `squeakdash-api` crate.
///
/// Covers every failure mode of a single admin RPC exchange: building the
/// request, moving it over HTTP, and decoding what came back.
/// `squeakdash-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Failed to build the underlying HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    // ── Remote ──────────────────────────────────────────────────────
    /// The admin service answered with a non-success status.
    ///
    /// `code` carries the RPC status code from the error body when the
    /// server supplied one (e.g. 5 for NOT_FOUND).
    #[error("{message}")]
    Rpc {
        message: String,
        code: Option<i32>,
        status: u16,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error is a connection-level failure.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect())
    }

    /// Returns `true` if the request timed out in transit.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Rpc { status: 404, .. } | Self::Rpc { code: Some(5), .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// The RPC status code, if the server supplied one.
    pub fn rpc_code(&self) -> Option<i32> {
        match self {
            Self::Rpc { code, .. } => *code,
            _ => None,
        }
    }
}
