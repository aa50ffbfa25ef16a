//! Reserve bookkeeping.
//!
//! Reserves are a cached value: real balance plus the virtual-liquidity
//! constant of each side, written only through [`Pair::update`] at the
//! end of every mutating call.

use super::Pair;
use crate::config::MAX_RESERVE;
use crate::domain::{Amount, Event, Reserves};
use crate::error::{PairError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::{AssetLedger, EventSink};

impl Pair {
    /// Last synced reserves.
    ///
    /// # Errors
    ///
    /// [`PairError::Deleted`] if the pair has been deleted.
    pub fn get_reserves(&self) -> Result<Reserves> {
        Ok(self.storage()?.reserves)
    }

    /// Persists `(balance0, balance1)` as the new reserves and emits `Sync`.
    ///
    /// Callers pass real balance plus virtual liquidity (or zero on burn);
    /// nothing is recomputed here.
    pub(crate) fn update<E: EventSink>(
        &mut self,
        events: &mut E,
        balance0: Amount,
        balance1: Amount,
    ) -> Result<()> {
        if balance0 > MAX_RESERVE || balance1 > MAX_RESERVE {
            return Err(PairError::Overflow);
        }
        self.storage_mut()?.reserves = Reserves::new(balance0, balance1);
        tracing::debug!(reserve0 = %balance0, reserve1 = %balance1, "sync");
        events.emit(Event::Sync {
            reserve0: balance0,
            reserve1: balance1,
        });
        Ok(())
    }

    /// Real balances of the pair plus virtual liquidity, as `(base, quote)`.
    pub(crate) fn virtual_balances<L: AssetLedger>(&self, ledger: &L) -> Result<(Amount, Amount)> {
        let config = self.config()?;
        let me = config.address();
        let balance0 = ledger
            .balance_of(config.token0(), me)
            .safe_add(&config.virtual_liquidity_base())?;
        let balance1 = ledger
            .balance_of(config.token1(), me)
            .safe_add(&config.virtual_liquidity_quote())?;
        Ok((balance0, balance1))
    }
}
