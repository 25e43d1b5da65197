//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use squeakdash_config::ConfigError;
use squeakdash_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to the admin service at {url}")]
    #[diagnostic(
        code(squeakdash::connection_failed),
        help(
            "Check that squeaknode is running with its admin RPC enabled.\n\
             URL: {url}\n\
             Try: squeakdash hello --host <node-host>"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Admin service request timed out")]
    #[diagnostic(
        code(squeakdash::timeout),
        help("Increase timeout with --timeout or check the node's responsiveness.")
    )]
    Timeout,

    #[error("No {screen} data could be loaded")]
    #[diagnostic(
        code(squeakdash::unavailable),
        help("Every request for this view failed. Run with -v to see each failure.")
    )]
    Unavailable { screen: String },

    // ── Remote ───────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(squeakdash::not_found))]
    NotFound { message: String },

    #[error("Admin service error ({code}): {message}")]
    #[diagnostic(code(squeakdash::rejected))]
    Rejected { code: String, message: String },

    /// A write failed; `message` is the alert text.
    #[error("{message}")]
    #[diagnostic(code(squeakdash::action_failed))]
    ActionFailed { message: String },

    // ── Rows ─────────────────────────────────────────────────────────
    #[error("Row {row} does not exist ({count} rows listed)")]
    #[diagnostic(
        code(squeakdash::no_such_row),
        help("Run: squeakdash {list_command} to see the rows")
    )]
    NoSuchRow {
        row: usize,
        count: usize,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(squeakdash::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(squeakdash::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: squeakdash config init --name {name}"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(squeakdash::config))]
    Config(ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(squeakdash::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(squeakdash::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render TOML: {0}")]
    #[diagnostic(code(squeakdash::toml))]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::Unavailable { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::NotFound { .. } | Self::NoSuchRow { .. } | Self::ProfileNotFound { .. } => {
                exit_code::NOT_FOUND
            }
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },
            CoreError::Timeout => CliError::Timeout,
            CoreError::NotFound { message } => CliError::NotFound { message },
            CoreError::Rejected { message, code, .. } => CliError::Rejected {
                code: code.map_or_else(|| "unknown".into(), |c| c.to_string()),
                message,
            },
            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
            CoreError::Internal(message) => CliError::Rejected {
                code: "internal".into(),
                message,
            },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config(other),
        }
    }
}
