//! Resolution of indices into values: blacklist check, cache, then generator.

use num_bigint::BigUint;

use crate::cache::ValueCache;
use crate::error::FibError;
use crate::generator::{compute_unchecked, validate_index, SequenceCursor};
use crate::store::ExclusionStore;

/// Resolve a single requested index.
///
/// The blacklist is consulted before the cache, so an index that was cached
/// and later blacklisted is still rejected.
pub fn resolve_one(
    index: i64,
    exclusions: &dyn ExclusionStore,
    cache: &dyn ValueCache,
) -> Result<BigUint, FibError> {
    let index = ensure_allowed(index, exclusions)?;
    Ok(cached_or_compute(index, cache))
}

/// Validate `index` and reject it if blacklisted, without resolving it.
pub fn ensure_allowed(index: i64, exclusions: &dyn ExclusionStore) -> Result<u64, FibError> {
    let index = validate_index(index)?;
    if exclusions.contains(index)? {
        return Err(FibError::Blacklisted(index));
    }
    Ok(index)
}

/// Resolve already-filtered indices, preserving their order.
///
/// Cache misses are filled from one forward walk of the sequence, so an
/// ascending page costs O(last index) additions in total rather than
/// O(index) per entry. No blacklist check happens here; the paginator has
/// already removed excluded indices.
pub fn resolve_many(indices: &[u64], cache: &dyn ValueCache) -> Vec<(u64, BigUint)> {
    let mut cursor = SequenceCursor::new();
    indices
        .iter()
        .map(|&index| {
            if let Some(value) = cache.get(index) {
                tracing::debug!(index, "Value cache hit");
                return (index, value);
            }
            tracing::debug!(index, "Value cache miss");
            let value = cursor.seek(index).clone();
            cache.put(index, value.clone());
            (index, value)
        })
        .collect()
}

fn cached_or_compute(index: u64, cache: &dyn ValueCache) -> BigUint {
    if let Some(value) = cache.get(index) {
        tracing::debug!(index, "Value cache hit");
        return value;
    }
    tracing::debug!(index, "Value cache miss");
    let value = compute_unchecked(index);
    cache.put(index, value.clone());
    value
}
