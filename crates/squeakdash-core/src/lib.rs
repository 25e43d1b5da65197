//! Projection and orchestration layer between `squeakdash-api` and the CLI.
//!
//! - **[`AdminService`] / [`AdminClient`]**: the facade over the admin RPC
//!   service. One async call per operation, each resolving to a single
//!   `Result<_, CoreError>`.
//!
//! - **[`projection`]**: pure functions turning reply messages into
//!   fixed-arity [`Table`] rows, with [`UNKNOWN`] for missing fields.
//!
//! - **[`address`]**: `host[:port]` splitting used to build navigation
//!   targets, and **[`nav`]**: the `/app/...` paths themselves.
//!
//! - **[`view`]**: per-screen [`ViewController`]s. They fetch on mount,
//!   keep the last good rows on read failure, alert on write failure, and
//!   reload the whole screen after a successful write.

pub mod address;
pub mod config;
pub mod error;
pub mod nav;
pub mod projection;
pub mod service;
pub mod view;

/// Wire messages exchanged with the admin service.
pub use squeakdash_api::models as messages;
pub use squeakdash_api::DEFAULT_ADMIN_PORT;

// ── Primary re-exports ──────────────────────────────────────────────
pub use address::{ParsedAddress, parse_address};
pub use config::AdminConfig;
pub use error::CoreError;
pub use projection::{DisplayRow, LOCKED, PeerTarget, Table, UNKNOWN, peer_target};
pub use service::{AdminClient, AdminService, LocalAdminService};
pub use view::{Effect, LoadState, Reaction, Screen, ScreenId, ViewController};
