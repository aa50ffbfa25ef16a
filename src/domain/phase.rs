//! Lifecycle phase of a pair.

use core::fmt;

/// Where a pair sits in its lifecycle.
///
/// ```text
/// Uninitialized --mint--> ActiveUnlocked --buy (graduation)--> ActiveLocked
///        ^                      |                                   |
///        +--------burn----------+-----------------burn--------------+
/// Uninitialized (drained) --deletePool--> Deleted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolPhase {
    /// No LP unit outstanding.
    Uninitialized,
    /// Bootstrapped and trading on the curve.
    ActiveUnlocked,
    /// Graduated; awaiting migration.
    ActiveLocked,
    /// Storage cleared by `deletePool`.
    Deleted,
}

impl fmt::Display for PoolPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Uninitialized => "uninitialized",
            Self::ActiveUnlocked => "active",
            Self::ActiveLocked => "locked",
            Self::Deleted => "deleted",
        };
        f.write_str(s)
    }
}
