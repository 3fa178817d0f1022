// vtm-api: Async Rust client for the Traffic Manager REST management API
//
// Read-only access to the `status/` tree: node discovery, statistics
// categories, and per-resource metric snapshots.

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod transport;

mod glb_services;
mod network_interfaces;
mod nodes;
mod pools;
mod status;
mod virtual_servers;

pub use auth::Credentials;
pub use client::{ClientConfig, DEFAULT_API_VERSION, DEFAULT_PORT, VtmClient};
pub use error::Error;
pub use models::StatisticsMap;
pub use transport::{DEFAULT_TIMEOUT, TlsMode, TransportConfig};
