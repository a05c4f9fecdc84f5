//! # fibsvc-core
//!
//! Core library for the fibsvc Fibonacci API: an iterative generator, a
//! paginator over the blacklist-filtered index sequence, and the resolution
//! layer that ties the blacklist and the value cache together.
//!
//! Transports build a [`FibService`] from an [`ExclusionStore`] and a
//! [`ValueCache`] and call into it; nothing here is process-global.

pub mod cache;
pub mod constants;
pub mod error;
pub mod generator;
pub mod paginator;
pub mod resolve;
pub mod service;
pub mod stats;
pub mod store;
pub mod store_file;

// Re-exports
pub use cache::{cache_from_capacity, LruValueCache, NoCache, ValueCache};
pub use constants::{
    exit_codes, DEFAULT_CACHE_CAPACITY, DEFAULT_MAX_INDEX, DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE,
};
pub use error::FibError;
pub use generator::{compute, SequenceCursor};
pub use paginator::{paginate, Page};
pub use resolve::{ensure_allowed, resolve_many, resolve_one};
pub use service::{FibService, ResolvedPage};
pub use stats::CacheStats;
pub use store::{ExclusionStore, MemoryExclusionStore};
pub use store_file::FileExclusionStore;
