use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SignalError};

/// Inclusive logical index range `[n_min, n_max]` of a discrete-time signal.
///
/// Owns the logical-to-physical mapping: logical index `n` lives in storage
/// slot `n - n_min`. The canonical empty domain is `(0, -1)` and is only
/// reachable through [`Domain::empty`]; [`Domain::new`] rejects inverted
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("[{n_min}, {n_max}]")]
pub struct Domain {
    n_min: i64,
    n_max: i64,
}

impl Domain {
    pub fn new(n_min: i64, n_max: i64) -> Result<Self> {
        if n_min > n_max {
            return Err(SignalError::InvalidDomain { n_min, n_max });
        }
        Ok(Self { n_min, n_max })
    }

    /// The canonical empty domain, spanning no samples.
    #[must_use]
    pub const fn empty() -> Self {
        Self { n_min: 0, n_max: -1 }
    }

    #[must_use]
    pub fn n_min(&self) -> i64 {
        self.n_min
    }

    #[must_use]
    pub fn n_max(&self) -> i64 {
        self.n_max
    }

    /// The `(n_min, n_max)` pair.
    #[must_use]
    pub fn bounds(&self) -> (i64, i64) {
        (self.n_min, self.n_max)
    }

    /// Number of storage slots spanned by this domain.
    #[must_use]
    pub fn len(&self) -> usize {
        (self.n_max - self.n_min + 1) as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n_max < self.n_min
    }

    #[must_use]
    pub fn contains(&self, n: i64) -> bool {
        n >= self.n_min && n <= self.n_max
    }

    /// Translate logical index `n` to its physical storage slot.
    /// `None` for indices outside the domain.
    #[must_use]
    pub fn slot(&self, n: i64) -> Option<usize> {
        self.contains(n).then(|| (n - self.n_min) as usize)
    }

    /// Translate a physical storage slot back to its logical index.
    /// Inverse of [`Domain::slot`] for slots below [`Domain::len`]; slots at
    /// or beyond the length map past `n_max`.
    #[must_use]
    pub fn index_at(&self, slot: usize) -> i64 {
        self.n_min + slot as i64
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::empty()
    }
}
