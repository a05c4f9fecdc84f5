//! Pagination over the filtered index sequence `1..=total`.
//!
//! The filtered sequence is never materialized. Its length is `total` minus
//! the exclusions that fall inside `1..=total`, and the first index of a page
//! is found by walking the sorted exclusions, so a page costs
//! O(exclusions + page size) no matter how large `total` is.

use std::collections::BTreeSet;

use crate::error::FibError;

/// One page of indices from the filtered sequence. Values are resolved later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number that was requested.
    pub page: u64,
    /// Requested page size.
    pub page_size: u64,
    /// Indices on this page, ascending.
    pub indices: Vec<u64>,
    /// Page count of the filtered sequence.
    pub total_pages: u64,
}

impl Page {
    fn empty(page: u64, page_size: u64) -> Self {
        Self {
            page,
            page_size,
            indices: Vec::new(),
            total_pages: 0,
        }
    }
}

/// Select page `page` of `1..=total` with `exclusions` removed.
///
/// Validation runs in a fixed order: page size, then page, then total.
/// An empty filtered sequence yields an empty page with zero total pages for
/// any requested page.
pub fn paginate(
    total: i64,
    page: i64,
    page_size: i64,
    exclusions: &BTreeSet<u64>,
) -> Result<Page, FibError> {
    let page_size = positive(page_size).ok_or(FibError::InvalidPageSize(page_size))?;
    let page = positive(page).ok_or(FibError::InvalidPageNumber(page))?;
    let total = positive(total).ok_or(FibError::InvalidTotalCount(total))?;

    let excluded = exclusions.range(1..=total).count() as u64;
    let filtered_len = total - excluded;
    if filtered_len == 0 {
        return Ok(Page::empty(page, page_size));
    }

    let total_pages = filtered_len.div_ceil(page_size);
    if page > total_pages {
        return Err(FibError::PageExceedsTotalPages { page, total_pages });
    }

    // page <= total_pages keeps start below filtered_len.
    let start = (page - 1) * page_size;
    let end = start.saturating_add(page_size).min(filtered_len);
    let take = usize::try_from(end - start).unwrap_or(usize::MAX);

    let first = nth_included(start, total, exclusions);
    let indices = (first..=total)
        .filter(|i| !exclusions.contains(i))
        .take(take)
        .collect();

    Ok(Page {
        page,
        page_size,
        indices,
        total_pages,
    })
}

/// Index holding 0-based position `rank` in the filtered sequence.
fn nth_included(rank: u64, total: u64, exclusions: &BTreeSet<u64>) -> u64 {
    let mut candidate = rank + 1;
    for &excluded in exclusions.range(1..=total) {
        if excluded > candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}

fn positive(value: i64) -> Option<u64> {
    u64::try_from(value).ok().filter(|&v| v > 0)
}
