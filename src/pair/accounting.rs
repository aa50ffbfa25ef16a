//! Protocol fees and refunds of attached value.

use super::Pair;
use crate::config::PROTOCOL_FEE_DIVISOR;
use crate::domain::{Address, Amount, Rounding};
use crate::error::{PairError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::AssetLedger;

/// Protocol fee of a buy: 1% of the quote amount deposited, floored.
pub fn buy_fee(quote_in: Amount) -> Result<Amount> {
    quote_in.safe_div(&Amount::new(PROTOCOL_FEE_DIVISOR), Rounding::Down)
}

/// Amount owed back to the caller after a call that may have consumed or
/// released some of the pair's native coins.
///
/// `before` and `after` are the pair's native balance around the call and
/// `sent` the value the caller attached.
///
/// # Errors
///
/// [`PairError::NotEnoughCoinsSent`] if the call consumed more than `sent`.
pub fn remaining(before: Amount, after: Amount, sent: Amount) -> Result<Amount> {
    match before.checked_sub(&after) {
        Some(spent) if spent > sent => Err(PairError::NotEnoughCoinsSent { spent, sent }),
        Some(spent) => sent.safe_sub(&spent),
        None => {
            let received = after.safe_sub(&before)?;
            sent.safe_add(&received)
        }
    }
}

impl Pair {
    /// Sends the coins owed by [`remaining`] from the pair to `to`.
    pub(crate) fn refund_remaining<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        before: Amount,
        sent: Amount,
        to: Address,
    ) -> Result<Amount> {
        let me = self.address()?;
        let owed = remaining(before, ledger.native_balance(me), sent)?;
        if !owed.is_zero() {
            tracing::debug!(to = %to, amount = %owed, "refunding attached coins");
            ledger.transfer_coins(self, me, to, owed)?;
        }
        Ok(owed)
    }
}
