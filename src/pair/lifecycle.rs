//! Guarded entry points: bootstrap, trading, withdrawal and deletion.

use super::{accounting, Pair};
use crate::domain::{Address, Amount, CallContext, Event, Rounding};
use crate::error::{PairError, Result};
use crate::math::{curve, CheckedArithmetic};
use crate::traits::Host;

impl Pair {
    /// Bootstraps the pair: issues the single LP unit to `to` and syncs
    /// reserves with whatever the creator deposited.
    ///
    /// Coins attached to the call are refunded to the caller, less anything
    /// the call consumed. Returns the LP units issued.
    ///
    /// # Errors
    ///
    /// - [`PairError::AlreadyMinted`] if the LP unit already exists.
    /// - [`PairError::NotEnoughCoinsSent`] if the call consumed more coins
    ///   than were attached.
    /// - [`PairError::ReentrantCall`] while another guarded call runs.
    pub fn mint<H: Host>(&mut self, host: &mut H, ctx: &CallContext, to: Address) -> Result<Amount> {
        self.non_reentrant(host, |pair, host| pair.mint_guarded(host, ctx, to))
    }

    fn mint_guarded<H: Host>(&mut self, host: &mut H, ctx: &CallContext, to: Address) -> Result<Amount> {
        if !self.total_supply()?.is_zero() {
            return Err(PairError::AlreadyMinted);
        }
        let coins_before = host.native_balance(self.address()?);

        let reserves = self.get_reserves()?;
        let (balance0, balance1) = self.virtual_balances(&*host)?;
        let amount0 = balance0.safe_sub(&reserves.reserve0)?;
        let amount1 = balance1.safe_sub(&reserves.reserve1)?;

        self.storage_mut()?.lp.mint(to, Amount::ONE)?;
        self.update(host, balance0, balance1)?;

        tracing::info!(to = %to, %amount0, %amount1, "pair bootstrapped");
        host.emit(Event::Mint {
            to,
            amount0,
            amount1,
        });

        self.refund_remaining(host, coins_before, ctx.transferred, ctx.caller)?;
        Ok(Amount::ONE)
    }

    /// Withdraws every real balance of the pair to `to` and destroys the LP
    /// unit, which must have been sent to the pair beforehand.
    ///
    /// Returns the drained `(base, quote)` amounts. The quote side leaves
    /// in wrapped form.
    ///
    /// # Errors
    ///
    /// - [`PairError::InsufficientLiquiditySent`] unless the pair holds
    ///   exactly the one LP unit.
    /// - [`PairError::ReentrantCall`] while another guarded call runs.
    pub fn burn<H: Host>(
        &mut self,
        host: &mut H,
        ctx: &CallContext,
        to: Address,
    ) -> Result<(Amount, Amount)> {
        self.non_reentrant(host, |pair, host| pair.burn_guarded(host, ctx, to))
    }

    fn burn_guarded<H: Host>(
        &mut self,
        host: &mut H,
        ctx: &CallContext,
        to: Address,
    ) -> Result<(Amount, Amount)> {
        let me = self.address()?;
        let token0 = self.token0()?;
        let token1 = self.token1()?;

        let amount0 = host.balance_of(token0, me);
        let amount1 = host.balance_of(token1, me);

        if self.lp_balance_of(me)? != Amount::ONE {
            return Err(PairError::InsufficientLiquiditySent);
        }
        self.storage_mut()?.lp.burn(me, Amount::ONE)?;

        host.transfer(self, token0, me, to, amount0)?;
        host.transfer(self, token1, me, to, amount1)?;

        self.update(host, Amount::ZERO, Amount::ZERO)?;

        tracing::info!(caller = %ctx.caller, to = %to, %amount0, %amount1, "liquidity burned");
        host.emit(Event::Burn {
            caller: ctx.caller,
            amount0,
            amount1,
            to,
        });
        Ok((amount0, amount1))
    }

    /// Buys base with the coins attached to the call.
    ///
    /// When the purchase would leave the pair holding less base than the
    /// graduation threshold, it is clamped to exactly `balance − threshold`:
    /// only the input that output needs is consumed, `amount_out_min` is
    /// scaled down by the same ratio, the rest of the coins go back to the
    /// caller, and the pair locks.
    ///
    /// Returns the base amount paid to `to`.
    ///
    /// # Errors
    ///
    /// - [`PairError::Expired`] / [`PairError::Locked`] from the entry checks.
    /// - [`PairError::InsufficientInputAmount`] if no coins were attached.
    /// - [`PairError::ExcessiveInputAmount`] if a clamped fill needs more
    ///   than was attached.
    /// - [`PairError::InsufficientOutputAmount`] below `amount_out_min`.
    /// - Any [`swap`](super::swap) failure.
    pub fn buy<H: Host>(
        &mut self,
        host: &mut H,
        ctx: &CallContext,
        amount_out_min: Amount,
        to: Address,
        deadline: u64,
    ) -> Result<Amount> {
        self.non_reentrant(host, |pair, host| {
            pair.buy_guarded(host, ctx, amount_out_min, to, deadline)
        })
    }

    fn buy_guarded<H: Host>(
        &mut self,
        host: &mut H,
        ctx: &CallContext,
        mut amount_out_min: Amount,
        to: Address,
        deadline: u64,
    ) -> Result<Amount> {
        self.ensure(ctx, deadline)?;

        let me = self.address()?;
        let token0 = self.token0()?;
        let token1 = self.token1()?;
        let threshold = self.config()?.graduation_threshold();
        let reserves = self.get_reserves()?;

        let sent = ctx.transferred;
        tracing::debug!(caller = %ctx.caller, amount_in = %sent, %amount_out_min, "buy");
        let mut amount_in = sent;
        let mut amount_out = curve::get_amount_out(sent, reserves.reserve1, reserves.reserve0)?;

        let base_balance = host.balance_of(token0, me);
        let graduates = base_balance
            .checked_sub(&amount_out)
            .map_or(true, |left| left < threshold);
        if graduates {
            amount_out = base_balance.safe_sub(&threshold)?;
            amount_in = curve::get_amount_in(amount_out, reserves.reserve1, reserves.reserve0)?;
            amount_out_min = amount_out_min
                .safe_mul(&amount_in)?
                .safe_div(&sent, Rounding::Down)?;
            if amount_in > sent {
                return Err(PairError::ExcessiveInputAmount);
            }

            let refund = sent.safe_sub(&amount_in)?;
            if !refund.is_zero() {
                host.transfer_coins(self, me, ctx.caller, refund)?;
            }
            self.storage_mut()?.locked = true;
            tracing::info!(%amount_out, %amount_in, %refund, "pair graduated");
        }

        if amount_out < amount_out_min {
            return Err(PairError::InsufficientOutputAmount);
        }

        host.deposit(self, token1, me, amount_in)?;
        let fee = accounting::buy_fee(amount_in)?;
        self.swap_out(host, ctx, amount_out, Amount::ZERO, fee, to)?;
        Ok(amount_out)
    }

    /// Sells `amount_in` base, pulled from the caller's allowance, for
    /// native coins paid to `to`.
    ///
    /// Returns the coin amount paid.
    ///
    /// # Errors
    ///
    /// - [`PairError::Expired`] / [`PairError::Locked`] from the entry checks.
    /// - [`PairError::InsufficientOutputAmount`] below `amount_out_min`.
    /// - [`PairError::AssetCall`] if the base transfer is refused.
    /// - Any [`swap`](super::swap) failure.
    pub fn sell<H: Host>(
        &mut self,
        host: &mut H,
        ctx: &CallContext,
        amount_in: Amount,
        amount_out_min: Amount,
        to: Address,
        deadline: u64,
    ) -> Result<Amount> {
        self.non_reentrant(host, |pair, host| {
            pair.sell_guarded(host, ctx, amount_in, amount_out_min, to, deadline)
        })
    }

    fn sell_guarded<H: Host>(
        &mut self,
        host: &mut H,
        ctx: &CallContext,
        amount_in: Amount,
        amount_out_min: Amount,
        to: Address,
        deadline: u64,
    ) -> Result<Amount> {
        self.ensure(ctx, deadline)?;

        tracing::debug!(caller = %ctx.caller, %amount_in, %amount_out_min, "sell");
        let reserves = self.get_reserves()?;
        let amount_out = curve::get_amount_out(amount_in, reserves.reserve0, reserves.reserve1)?;
        if amount_out < amount_out_min {
            return Err(PairError::InsufficientOutputAmount);
        }

        let me = self.address()?;
        let token0 = self.token0()?;
        host.transfer_from(self, token0, me, ctx.caller, me, amount_in)?;

        let fee = curve::fee_of(amount_in, reserves.reserve0, reserves.reserve1)?;
        self.swap_out(host, ctx, Amount::ZERO, amount_out, fee, to)?;
        Ok(amount_out)
    }

    /// Destroys a drained pair and forwards its remaining coins to the
    /// transaction creator. Returns the amount forwarded.
    ///
    /// # Errors
    ///
    /// - [`PairError::NotDeployer`] unless the caller is the deployer
    ///   registered for the pair's factory.
    /// - [`PairError::NotMigrated`] unless both reserves are zero.
    /// - [`PairError::Deleted`] if already deleted.
    pub fn delete_pool<H: Host>(&mut self, host: &mut H, ctx: &CallContext) -> Result<Amount> {
        self.non_reentrant(host, |pair, host| pair.delete_guarded(host, ctx))
    }

    fn delete_guarded<H: Host>(&mut self, host: &mut H, ctx: &CallContext) -> Result<Amount> {
        if host.deployer_of(self.factory()?) != Some(ctx.caller) {
            return Err(PairError::NotDeployer);
        }
        if !self.get_reserves()?.is_drained() {
            return Err(PairError::NotMigrated);
        }

        let me = self.address()?;
        let residual = host.native_balance(me);
        if !residual.is_zero() {
            host.transfer_coins(self, me, ctx.transaction_creator, residual)?;
        }

        // a receiver re-entering during the transfer must still find the busy slot
        self.storage = None;
        tracing::info!(pair = %me, %residual, "pair deleted");
        Ok(residual)
    }

    /// Moves LP units from the caller to `to`.
    ///
    /// # Errors
    ///
    /// - [`PairError::InsufficientLpBalance`] if the caller holds less than
    ///   `amount`.
    /// - [`PairError::Deleted`] if the pair has been deleted.
    pub fn transfer_lp(&mut self, ctx: &CallContext, to: Address, amount: Amount) -> Result<()> {
        self.storage_mut()?.lp.transfer(ctx.caller, to, amount)
    }
}
