//! Iterative Fibonacci generator.
//!
//! F(1) = F(2) = 1. Runs in O(index) additions with two live big integers.

use num_bigint::BigUint;
use num_traits::One;

use crate::error::FibError;

/// Compute F(index) for a 1-based index.
///
/// # Example
/// ```
/// assert_eq!(fibsvc_core::generator::compute(10).unwrap().to_string(), "55");
/// assert!(fibsvc_core::generator::compute(0).is_err());
/// ```
pub fn compute(index: i64) -> Result<BigUint, FibError> {
    let index = validate_index(index)?;
    Ok(compute_unchecked(index))
}

/// Compute F(index) for an index already known to be positive.
///
/// Index 0 is treated like 1.
#[must_use]
pub fn compute_unchecked(index: u64) -> BigUint {
    let mut cursor = SequenceCursor::new();
    cursor.seek(index);
    cursor.current
}

/// Forward-only position in the sequence holding F(index) and F(index + 1).
///
/// Seeking forward costs one addition per step; seeking backwards restarts
/// from F(1).
#[derive(Debug, Clone)]
pub struct SequenceCursor {
    index: u64,
    current: BigUint,
    next: BigUint,
}

impl SequenceCursor {
    /// Cursor at F(1).
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: 1,
            current: BigUint::one(),
            next: BigUint::one(),
        }
    }

    /// Index the cursor currently sits on.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Move to `index` (0 is treated like 1) and return F(index).
    pub fn seek(&mut self, index: u64) -> &BigUint {
        let index = index.max(1);
        if index < self.index {
            *self = Self::new();
        }
        while self.index < index {
            let after = &self.current + &self.next;
            self.current = std::mem::replace(&mut self.next, after);
            self.index += 1;
        }
        &self.current
    }
}

impl Default for SequenceCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a caller-supplied index into a validated 1-based index.
pub fn validate_index(index: i64) -> Result<u64, FibError> {
    u64::try_from(index)
        .ok()
        .filter(|&i| i >= 1)
        .ok_or(FibError::InvalidIndex(index))
}
