//! Property-based tests for the generator and paginator.

use std::collections::BTreeSet;

use proptest::prelude::*;

use fibsvc_core::generator::compute;
use fibsvc_core::paginator::paginate;
use fibsvc_core::FibError;

/// Materialize, filter and slice: the reference the paginator must match.
fn naive(
    total: u64,
    page: u64,
    page_size: u64,
    exclusions: &BTreeSet<u64>,
) -> Result<(Vec<u64>, u64), FibError> {
    let filtered: Vec<u64> = (1..=total).filter(|i| !exclusions.contains(i)).collect();
    if filtered.is_empty() {
        return Ok((Vec::new(), 0));
    }
    let total_pages = (filtered.len() as u64).div_ceil(page_size);
    if page > total_pages {
        return Err(FibError::PageExceedsTotalPages { page, total_pages });
    }
    let start = ((page - 1) * page_size) as usize;
    let end = (start + page_size as usize).min(filtered.len());
    Ok((filtered[start..end].to_vec(), total_pages))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The paginator agrees with the naive filter for any exclusion set.
    #[test]
    fn paginator_matches_naive(
        total in 1u64..300,
        page in 1u64..40,
        page_size in 1u64..50,
        exclusions in proptest::collection::btree_set(1u64..320, 0..120),
    ) {
        let got = paginate(total as i64, page as i64, page_size as i64, &exclusions)
            .map(|p| (p.indices, p.total_pages));
        prop_assert_eq!(got, naive(total, page, page_size, &exclusions));
    }

    /// Without exclusions, total pages is ceil(total / page_size).
    #[test]
    fn total_pages_law(total in 1i64..100_000, page_size in 1i64..1_000) {
        let page = paginate(total, 1, page_size, &BTreeSet::new()).unwrap();
        prop_assert_eq!(page.total_pages, (total as u64).div_ceil(page_size as u64));
    }

    /// Excluding the whole range always yields an empty page.
    #[test]
    fn fully_excluded_is_empty(total in 1u64..200, page in 1i64..1_000, page_size in 1i64..50) {
        let exclusions: BTreeSet<u64> = (1..=total).collect();
        let result = paginate(total as i64, page, page_size, &exclusions).unwrap();
        prop_assert!(result.indices.is_empty());
        prop_assert_eq!(result.total_pages, 0);
    }

    /// F(n) + F(n+1) == F(n+2).
    #[test]
    fn fibonacci_recurrence(n in 1i64..1_500) {
        let sum = compute(n).unwrap() + compute(n + 1).unwrap();
        prop_assert_eq!(sum, compute(n + 2).unwrap());
    }

    /// Every non-positive index is rejected with the offending value.
    #[test]
    fn non_positive_index_rejected(n in i64::MIN..=0) {
        prop_assert_eq!(compute(n), Err(FibError::InvalidIndex(n)));
    }
}
