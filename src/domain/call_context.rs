//! Per-call execution context supplied by the host.

use super::{Address, Amount};

/// What the host tells the pair about the call being executed.
///
/// The pair never reads ambient globals; every entry point receives the
/// context of its own call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallContext {
    /// Immediate caller of the entry point.
    pub caller: Address,
    /// Account that originated the whole transaction.
    pub transaction_creator: Address,
    /// Host timestamp, compared against deadlines.
    pub timestamp: u64,
    /// Native coins attached to the call, already credited to the pair.
    pub transferred: Amount,
}

impl CallContext {
    /// Context for a direct call by `caller` with no attached coins.
    #[must_use]
    pub const fn new(caller: Address, timestamp: u64) -> Self {
        Self {
            caller,
            transaction_creator: caller,
            timestamp,
            transferred: Amount::ZERO,
        }
    }

    /// Returns a copy with `value` attached coins.
    #[must_use]
    pub fn with_transferred(mut self, value: Amount) -> Self {
        self.transferred = value;
        self
    }

    /// Returns a copy originating from `creator`.
    #[must_use]
    pub fn with_transaction_creator(mut self, creator: Address) -> Self {
        self.transaction_creator = creator;
        self
    }
}
