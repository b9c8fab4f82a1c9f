//! Fake Store API Client
//!
//! Typed access to the public Fake Store demo API: login, product lookup,
//! product listing and authenticated product creation.
//!
//! Every call performs exactly one HTTP round-trip and hands back the raw
//! [`ApiResponse`]; deciding whether a status is acceptable is the caller's job.

pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod types;

// Re-export commonly used types
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use response::ApiResponse;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Public base URL of the Fake Store API
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";
