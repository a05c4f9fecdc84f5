//! Exclusion store capability and the in-memory backend.

use std::collections::BTreeSet;

use parking_lot::RwLock;

use crate::error::FibError;

/// Mutable set of blacklisted indices.
///
/// Each call is atomic on its own. Nothing orders a concurrent `add` against
/// a concurrent `contains` for the same index.
pub trait ExclusionStore: Send + Sync {
    /// Whether `index` is blacklisted.
    fn contains(&self, index: u64) -> Result<bool, FibError>;

    /// Blacklist `index`. Adding a present index is a no-op.
    fn add(&self, index: u64) -> Result<(), FibError>;

    /// Un-blacklist `index`. Removing an absent index is a no-op.
    fn remove(&self, index: u64) -> Result<(), FibError>;

    /// Ordered copy of every blacklisted index.
    fn snapshot(&self) -> Result<BTreeSet<u64>, FibError>;

    /// Backend name for logs.
    fn name(&self) -> &str;
}

/// Process-local exclusion set.
#[derive(Debug, Default)]
pub struct MemoryExclusionStore {
    numbers: RwLock<BTreeSet<u64>>,
}

impl MemoryExclusionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of indices.
    #[must_use]
    pub fn with_numbers(numbers: impl IntoIterator<Item = u64>) -> Self {
        Self {
            numbers: RwLock::new(numbers.into_iter().collect()),
        }
    }
}

impl ExclusionStore for MemoryExclusionStore {
    fn contains(&self, index: u64) -> Result<bool, FibError> {
        Ok(self.numbers.read().contains(&index))
    }

    fn add(&self, index: u64) -> Result<(), FibError> {
        self.numbers.write().insert(index);
        Ok(())
    }

    fn remove(&self, index: u64) -> Result<(), FibError> {
        self.numbers.write().remove(&index);
        Ok(())
    }

    fn snapshot(&self) -> Result<BTreeSet<u64>, FibError> {
        Ok(self.numbers.read().clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_contains() {
        let store = MemoryExclusionStore::new();
        assert!(!store.contains(10).unwrap());
        store.add(10).unwrap();
        assert!(store.contains(10).unwrap());
    }

    #[test]
    fn add_is_idempotent() {
        let store = MemoryExclusionStore::new();
        store.add(15).unwrap();
        let once = store.snapshot().unwrap();
        store.add(15).unwrap();
        assert_eq!(store.snapshot().unwrap(), once);
    }

    #[test]
    fn remove_absent_is_noop() {
        let store = MemoryExclusionStore::with_numbers([1, 2]);
        store.remove(999).unwrap();
        assert_eq!(store.snapshot().unwrap(), [1, 2].into_iter().collect());
    }

    #[test]
    fn remove_present() {
        let store = MemoryExclusionStore::with_numbers([3]);
        store.remove(3).unwrap();
        assert!(!store.contains(3).unwrap());
    }

    #[test]
    fn snapshot_is_ordered() {
        let store = MemoryExclusionStore::with_numbers([9, 1, 5]);
        let snap: Vec<_> = store.snapshot().unwrap().into_iter().collect();
        assert_eq!(snap, vec![1, 5, 9]);
    }

    #[test]
    fn concurrent_adds() {
        let store = std::sync::Arc::new(MemoryExclusionStore::new());
        let handles: Vec<_> = (0..8u64)
            .map(|t| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..100 {
                        store.add(t * 100 + i + 1).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.snapshot().unwrap().len(), 800);
    }
}
