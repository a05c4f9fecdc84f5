//! `FibService`: the injected context transports call into.

use std::sync::Arc;

use num_bigint::BigUint;

use crate::cache::{cache_from_capacity, ValueCache};
use crate::error::FibError;
use crate::generator::validate_index;
use crate::paginator::paginate;
use crate::resolve::{ensure_allowed, resolve_many, resolve_one};
use crate::stats::CacheStats;
use crate::store::{ExclusionStore, MemoryExclusionStore};

/// A page with every index resolved to its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPage {
    pub page: u64,
    pub page_size: u64,
    /// `(index, F(index))` pairs in ascending index order.
    pub numbers: Vec<(u64, BigUint)>,
    pub total_pages: u64,
}

/// Exclusion store plus value cache, shared by all requests.
#[derive(Clone)]
pub struct FibService {
    exclusions: Arc<dyn ExclusionStore>,
    cache: Arc<dyn ValueCache>,
}

impl FibService {
    #[must_use]
    pub fn new(exclusions: Arc<dyn ExclusionStore>, cache: Arc<dyn ValueCache>) -> Self {
        Self { exclusions, cache }
    }

    /// Service with an in-memory blacklist and an LRU cache of `cache_capacity`.
    #[must_use]
    pub fn in_memory(cache_capacity: usize) -> Self {
        Self::new(
            Arc::new(MemoryExclusionStore::new()),
            cache_from_capacity(cache_capacity),
        )
    }

    /// F(index), unless the index is invalid or blacklisted.
    pub fn fibonacci(&self, index: i64) -> Result<BigUint, FibError> {
        resolve_one(index, self.exclusions.as_ref(), self.cache.as_ref())
    }

    /// Validate `index` and check it against the blacklist without
    /// computing its value.
    pub fn ensure_allowed(&self, index: i64) -> Result<u64, FibError> {
        ensure_allowed(index, self.exclusions.as_ref())
    }

    /// Page `page` of F(1..=total) with blacklisted indices left out.
    pub fn list(&self, total: i64, page: i64, page_size: i64) -> Result<ResolvedPage, FibError> {
        let exclusions = self.exclusions.snapshot()?;
        let page = paginate(total, page, page_size, &exclusions)?;
        let numbers = resolve_many(&page.indices, self.cache.as_ref());
        Ok(ResolvedPage {
            page: page.page,
            page_size: page.page_size,
            numbers,
            total_pages: page.total_pages,
        })
    }

    /// Blacklist `number`. Non-positive numbers are rejected.
    pub fn blacklist_add(&self, number: i64) -> Result<u64, FibError> {
        let index = validate_index(number)?;
        self.exclusions.add(index)?;
        tracing::info!(number = index, store = self.exclusions.name(), "Number blacklisted");
        Ok(index)
    }

    /// Remove `number` from the blacklist. Non-positive numbers are rejected.
    pub fn blacklist_remove(&self, number: i64) -> Result<u64, FibError> {
        let index = validate_index(number)?;
        self.exclusions.remove(index)?;
        tracing::info!(number = index, store = self.exclusions.name(), "Number removed from blacklist");
        Ok(index)
    }

    /// Every blacklisted index, ascending.
    pub fn blacklist(&self) -> Result<Vec<u64>, FibError> {
        Ok(self.exclusions.snapshot()?.into_iter().collect())
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    #[must_use]
    pub fn store_name(&self) -> &str {
        self.exclusions.name()
    }
}

impl std::fmt::Debug for FibService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FibService")
            .field("store", &self.exclusions.name())
            .field("cache", &self.cache.stats())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> FibService {
        FibService::in_memory(128)
    }

    #[test]
    fn single_lookup() {
        let svc = service();
        assert_eq!(svc.fibonacci(10).unwrap(), BigUint::from(55u32));
    }

    #[test]
    fn list_skips_blacklisted() {
        let svc = service();
        svc.blacklist_add(5).unwrap();
        let page = svc.list(10, 1, 5).unwrap();
        let indices: Vec<_> = page.numbers.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 6]);
        assert_eq!(page.numbers[4].1, BigUint::from(8u32));
    }

    #[test]
    fn list_all_blacklisted() {
        let svc = service();
        for n in 1..=3 {
            svc.blacklist_add(n).unwrap();
        }
        let page = svc.list(3, 1, 5).unwrap();
        assert!(page.numbers.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn list_propagates_pagination_errors() {
        let svc = service();
        assert_eq!(svc.list(10, 0, 5), Err(FibError::InvalidPageNumber(0)));
        assert_eq!(svc.list(10, 1, 0), Err(FibError::InvalidPageSize(0)));
    }

    #[test]
    fn blacklist_round_trip() {
        let svc = service();
        svc.blacklist_add(10).unwrap();
        assert_eq!(svc.fibonacci(10), Err(FibError::Blacklisted(10)));
        svc.blacklist_remove(10).unwrap();
        assert_eq!(svc.fibonacci(10).unwrap(), BigUint::from(55u32));
    }

    #[test]
    fn blacklist_rejects_non_positive() {
        let svc = service();
        assert_eq!(svc.blacklist_add(-5), Err(FibError::InvalidIndex(-5)));
        assert_eq!(svc.blacklist_remove(0), Err(FibError::InvalidIndex(0)));
        assert!(svc.blacklist().unwrap().is_empty());
    }

    #[test]
    fn ensure_allowed_leaves_cache_alone() {
        let svc = service();
        svc.blacklist_add(200_000).unwrap();
        assert_eq!(svc.ensure_allowed(200_000), Err(FibError::Blacklisted(200_000)));
        assert_eq!(svc.ensure_allowed(i64::MAX), Ok(i64::MAX.unsigned_abs()));
        assert_eq!(svc.cache_stats().misses, 0);
    }

    #[test]
    fn list_fills_cache() {
        let svc = service();
        svc.list(20, 1, 10).unwrap();
        assert_eq!(svc.cache_stats().entries, 10);
        svc.fibonacci(3).unwrap();
        assert_eq!(svc.cache_stats().hits, 1);
    }
}
