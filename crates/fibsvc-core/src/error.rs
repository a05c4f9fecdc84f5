//! Error taxonomy shared by the generator, paginator, resolver and stores.

/// Error type for Fibonacci resolution, pagination and blacklist storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// A non-positive index was requested.
    #[error("fibonacci index {0} must be a positive integer")]
    InvalidIndex(i64),

    /// The index is on the blacklist.
    #[error("number {0} is blacklisted")]
    Blacklisted(u64),

    /// Page size was zero or negative.
    #[error("page size must be a positive integer, received {0}")]
    InvalidPageSize(i64),

    /// Page number was zero or negative.
    #[error("page number must be a positive integer, received {0}")]
    InvalidPageNumber(i64),

    /// Total item count was zero or negative.
    #[error("the total number of items must be a positive integer, received {0}")]
    InvalidTotalCount(i64),

    /// Requested page lies past the end of the filtered sequence.
    #[error("page {page} exceeds the total number of pages ({total_pages})")]
    PageExceedsTotalPages {
        /// Requested page.
        page: u64,
        /// Pages available after filtering.
        total_pages: u64,
    },

    /// The backing exclusion store failed.
    #[error("exclusion store error: {0}")]
    Store(String),
}

impl FibError {
    /// Stable machine-readable code for transports.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidIndex(_) => "INVALID_INDEX",
            Self::Blacklisted(_) => "BLACKLISTED",
            Self::InvalidPageSize(_) => "INVALID_PAGE_SIZE",
            Self::InvalidPageNumber(_) => "INVALID_PAGE_NUMBER",
            Self::InvalidTotalCount(_) => "INVALID_TOTAL_COUNT",
            Self::PageExceedsTotalPages { .. } => "PAGE_EXCEEDS_TOTAL_PAGES",
            Self::Store(_) => "STORE_ERROR",
        }
    }
}

impl From<std::io::Error> for FibError {
    fn from(err: std::io::Error) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<serde_json::Error> for FibError {
    fn from(err: serde_json::Error) -> Self {
        Self::Store(format!("invalid blacklist file: {err}"))
    }
}
