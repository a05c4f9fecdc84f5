//! # fibsvc-cli
//!
//! Command-line transport over `fibsvc-core` and the file-backed blacklist.

pub mod app;
pub mod config;
pub mod errors;
