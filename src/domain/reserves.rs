//! Snapshot of the pair's cached virtual reserves.

use core::fmt;

use super::Amount;

/// The last-synced reserves of a pair: real balance plus the
/// virtual-liquidity offset of each side.
///
/// `reserve0` is the base asset, `reserve1` the quote asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reserves {
    /// Base-asset reserve.
    pub reserve0: Amount,
    /// Quote-asset reserve.
    pub reserve1: Amount,
}

impl Reserves {
    /// Creates a new reserve snapshot.
    pub const fn new(reserve0: Amount, reserve1: Amount) -> Self {
        Self { reserve0, reserve1 }
    }

    /// Both reserves zero: the pair has been drained by `burn`.
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.reserve0.is_zero() && self.reserve1.is_zero()
    }

    /// `reserve0 × reserve1`, or `None` if the product does not fit.
    #[must_use]
    pub fn product(&self) -> Option<Amount> {
        self.reserve0.checked_mul(&self.reserve1)
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.reserve0, self.reserve1)
    }
}
