//! Optimistic-transfer swap shared by `buy` and `sell`.
//!
//! Order matters and is fixed: validate outputs, pay them out, collect the
//! protocol fee, re-read balances, derive the inputs actually supplied, then
//! persist. Reordering changes which failures are reachable.

use super::Pair;
use crate::domain::{Address, Amount, CallContext, Event};
use crate::error::{PairError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::Host;

/// Input implied by a new balance: its excess over `reserve − out`.
fn implied_input(balance: Amount, reserve: Amount, out: Amount) -> Result<Amount> {
    let floor = reserve.safe_sub(&out)?;
    Ok(balance.checked_sub(&floor).unwrap_or_default())
}

impl Pair {
    /// Pays `amount0_out` base and/or `amount1_out` quote to `to`, sends
    /// `quote_fee` to the factory and re-syncs reserves.
    ///
    /// The quote side leaves the pair unwrapped, as native coins.
    pub(crate) fn swap_out<H: Host>(
        &mut self,
        host: &mut H,
        ctx: &CallContext,
        amount0_out: Amount,
        amount1_out: Amount,
        quote_fee: Amount,
        to: Address,
    ) -> Result<()> {
        if amount0_out.is_zero() && amount1_out.is_zero() {
            return Err(PairError::InsufficientOutputAmount);
        }

        let reserves = self.get_reserves()?;
        let (vl0, vl1) = self.virtual_liquidity()?;
        let drains = |reserve: Amount, out: Amount, floor: Amount| {
            reserve.checked_sub(&out).map_or(true, |left| left < floor)
        };
        if drains(reserves.reserve0, amount0_out, vl0) || drains(reserves.reserve1, amount1_out, vl1) {
            return Err(PairError::InsufficientLiquidity);
        }

        let token0 = self.token0()?;
        let token1 = self.token1()?;
        if to == token0 || to == token1 {
            return Err(PairError::InvalidTo);
        }

        let me = self.address()?;
        if !amount0_out.is_zero() {
            host.transfer(self, token0, me, to, amount0_out)?;
        }
        if !amount1_out.is_zero() {
            host.withdraw(self, token1, me, amount1_out, to)?;
        }

        let factory = self.factory()?;
        host.transfer(self, token1, me, factory, quote_fee)?;

        let (balance0, balance1) = self.virtual_balances(&*host)?;
        let amount0_in = implied_input(balance0, reserves.reserve0, amount0_out)?;
        let amount1_in = implied_input(balance1, reserves.reserve1, amount1_out)?;
        if amount0_in.is_zero() && amount1_in.is_zero() {
            return Err(PairError::InsufficientInputAmount);
        }

        self.update(host, balance0, balance1)?;

        tracing::debug!(
            caller = %ctx.caller,
            %amount0_in,
            %amount1_in,
            %amount0_out,
            %amount1_out,
            fee = %quote_fee,
            "swap"
        );
        host.emit(Event::Swap {
            caller: ctx.caller,
            amount0_in,
            amount1_in,
            amount0_out,
            amount1_out,
            to,
        });
        Ok(())
    }
}
