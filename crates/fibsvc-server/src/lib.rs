//! # fibsvc-server
//!
//! HTTP transport for `fibsvc-core`: single lookups, paginated listings and
//! blacklist management over JSON.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use router::create_router;
pub use state::{AppState, Limits};
