//! Golden file integration tests.
//!
//! Reads tests/testdata/fibonacci_golden.json and checks that every route to
//! a value (direct computation, single lookup, page resolution) agrees with it.

use std::num::NonZeroUsize;

use num_bigint::BigUint;
use serde::Deserialize;

use fibsvc_core::{compute, resolve_many, FibService, LruValueCache, NoCache, ValueCache};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    n: u64,
    #[serde(default)]
    fib: Option<String>,
    #[serde(default)]
    fib_prefix: Option<String>,
    #[serde(default)]
    fib_digits: Option<usize>,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/fibonacci_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn signed(n: u64) -> i64 {
    i64::try_from(n).unwrap()
}

// ---------------------------------------------------------------------------
// Golden: exact values
// ---------------------------------------------------------------------------

#[test]
fn golden_exact_compute() {
    let data = load_golden_data();
    for entry in &data.values {
        if let Some(expected) = &entry.fib {
            let result = compute(signed(entry.n)).unwrap();
            assert_eq!(result.to_string(), *expected, "compute mismatch at n={}", entry.n);
        }
    }
}

#[test]
fn golden_exact_service_lookup() {
    let service = FibService::in_memory(64);
    let data = load_golden_data();
    // Twice: the second pass is served from the cache.
    for _ in 0..2 {
        for entry in &data.values {
            if let Some(expected) = &entry.fib {
                let result = service.fibonacci(signed(entry.n)).unwrap();
                assert_eq!(result.to_string(), *expected, "lookup mismatch at n={}", entry.n);
            }
        }
    }
    assert!(service.cache_stats().hits > 0);
}

#[test]
fn golden_exact_batch_resolution() {
    let data = load_golden_data();
    let indices: Vec<u64> = data.values.iter().map(|e| e.n).collect();

    let caches: Vec<(&str, Box<dyn ValueCache>)> = vec![
        ("lru", Box::new(LruValueCache::new(NonZeroUsize::new(4).unwrap()))),
        ("none", Box::new(NoCache::new())),
    ];
    for (name, cache) in &caches {
        let resolved = resolve_many(&indices, cache.as_ref());
        assert_eq!(resolved.len(), indices.len());
        for ((index, value), entry) in resolved.iter().zip(&data.values) {
            assert_eq!(*index, entry.n, "{name} reordered results");
            if let Some(expected) = &entry.fib {
                assert_eq!(value.to_string(), *expected, "{name} mismatch at n={index}");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Golden: prefix & digit count
// ---------------------------------------------------------------------------

#[test]
fn golden_prefix_and_digits() {
    let data = load_golden_data();
    for entry in &data.values {
        let s = compute(signed(entry.n)).unwrap().to_string();

        if let Some(prefix) = &entry.fib_prefix {
            assert!(
                s.starts_with(prefix.as_str()),
                "prefix mismatch at n={}: expected starts_with '{}', got '{}'",
                entry.n,
                prefix,
                &s[..prefix.len().min(s.len())],
            );
        }

        if let Some(expected_digits) = entry.fib_digits {
            assert_eq!(
                s.len(),
                expected_digits,
                "digit count mismatch at n={}",
                entry.n,
            );
        }
    }
}

#[test]
fn golden_listing_matches_lookups() {
    let service = FibService::in_memory(256);
    let page = service.list(100, 1, 100).unwrap();
    let data = load_golden_data();
    for entry in data.values.iter().filter(|e| e.n <= 100) {
        let (_, value) = &page.numbers[usize::try_from(entry.n - 1).unwrap()];
        let expected: BigUint = entry.fib.as_deref().unwrap().parse().unwrap();
        assert_eq!(*value, expected, "listing mismatch at n={}", entry.n);
    }
}
