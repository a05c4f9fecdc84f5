//! Defaults shared by the transports.

/// Page returned when the caller does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Default number of values kept in the LRU value cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Largest index (and listing total) the transports accept by default.
pub const DEFAULT_MAX_INDEX: u64 = 100_000;

/// Largest page size the transports accept by default.
pub const DEFAULT_MAX_PAGE_SIZE: u64 = 1_000;

/// On-disk format version of the blacklist file.
pub const BLACKLIST_FILE_VERSION: u32 = 1;

/// Process exit codes for the CLI.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Validation or lookup error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Blacklist storage failure.
    pub const ERROR_STORE: i32 = 4;
}
