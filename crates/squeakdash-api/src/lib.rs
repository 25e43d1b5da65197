// squeakdash-api: Async Rust client for the squeaknode administrative RPC service

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

mod lightning;
mod peers;
mod profiles;
mod squeaks;

pub use client::{AdminRpcClient, DEFAULT_ADMIN_PORT, SERVICE_NAME};
pub use error::Error;
pub use transport::TransportConfig;
