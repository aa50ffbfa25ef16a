//! Single-slot reentrancy guard.

use core::fmt;

use crate::error::PairError;

/// State of the reentrancy slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuardStatus {
    /// No guarded call in progress.
    #[default]
    Free,
    /// A guarded call is in progress.
    Busy,
}

impl fmt::Display for GuardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => f.write_str("free"),
            Self::Busy => f.write_str("busy"),
        }
    }
}

/// Two-state mutex guarding every mutating entry point of a pair.
///
/// [`enter`](Self::enter) flips `Free → Busy` or fails; [`exit`](Self::exit)
/// flips back. The pair pairs them through a scoped wrapper that releases
/// the slot on every exit path, so callers never touch them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReentrancyGuard {
    status: GuardStatus,
}

impl ReentrancyGuard {
    /// A free guard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: GuardStatus::Free,
        }
    }

    /// Current slot state.
    #[must_use]
    pub const fn status(&self) -> GuardStatus {
        self.status
    }

    /// Acquires the slot.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::ReentrantCall`] if the slot is already busy.
    pub fn enter(&mut self) -> Result<(), PairError> {
        if self.status == GuardStatus::Busy {
            tracing::warn!("rejected reentrant call");
            return Err(PairError::ReentrantCall);
        }
        self.status = GuardStatus::Busy;
        Ok(())
    }

    /// Releases the slot.
    pub fn exit(&mut self) {
        self.status = GuardStatus::Free;
    }
}
