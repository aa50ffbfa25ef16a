//! Persisted state of a pair.

use std::collections::BTreeMap;

use super::guard::ReentrancyGuard;
use crate::config::{PairConfig, LP_DECIMALS, LP_NAME, LP_SYMBOL};
use crate::domain::{Address, Amount, Reserves};
use crate::error::PairError;
use crate::math::CheckedArithmetic;

/// Metadata of the pair's LP token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LpMetadata {
    /// Token name.
    pub name: &'static str,
    /// Token symbol.
    pub symbol: &'static str,
    /// Token decimals.
    pub decimals: u8,
}

impl LpMetadata {
    pub(crate) const DEFAULT: Self = Self {
        name: LP_NAME,
        symbol: LP_SYMBOL,
        decimals: LP_DECIMALS,
    };
}

/// Fungible-token fields of the single LP unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct LpLedger {
    total_supply: Amount,
    balances: BTreeMap<Address, Amount>,
}

impl LpLedger {
    pub(crate) fn total_supply(&self) -> Amount {
        self.total_supply
    }

    pub(crate) fn balance_of(&self, holder: &Address) -> Amount {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    pub(crate) fn mint(&mut self, to: Address, amount: Amount) -> Result<(), PairError> {
        self.total_supply = self.total_supply.safe_add(&amount)?;
        let balance = self.balance_of(&to).safe_add(&amount)?;
        self.balances.insert(to, balance);
        Ok(())
    }

    pub(crate) fn burn(&mut self, from: Address, amount: Amount) -> Result<(), PairError> {
        let balance = self
            .balance_of(&from)
            .checked_sub(&amount)
            .ok_or(PairError::InsufficientLpBalance)?;
        self.total_supply = self.total_supply.safe_sub(&amount)?;
        self.set_balance(from, balance);
        Ok(())
    }

    pub(crate) fn transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), PairError> {
        let from_balance = self
            .balance_of(&from)
            .checked_sub(&amount)
            .ok_or(PairError::InsufficientLpBalance)?;
        self.set_balance(from, from_balance);
        let to_balance = self.balance_of(&to).safe_add(&amount)?;
        self.set_balance(to, to_balance);
        Ok(())
    }

    fn set_balance(&mut self, holder: Address, balance: Amount) {
        if balance.is_zero() {
            self.balances.remove(&holder);
        } else {
            self.balances.insert(holder, balance);
        }
    }
}

/// Every persisted field of a live pair.
///
/// Cloned on entry to each guarded call and restored on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PairStorage {
    pub(crate) config: PairConfig,
    pub(crate) reserves: Reserves,
    pub(crate) locked: bool,
    pub(crate) guard: ReentrancyGuard,
    pub(crate) lp: LpLedger,
}

impl PairStorage {
    /// Fresh storage: reserves seeded with the virtual constants since
    /// real balances start at zero.
    pub(crate) fn new(config: PairConfig) -> Self {
        let reserves = Reserves::new(
            config.virtual_liquidity_base(),
            config.virtual_liquidity_quote(),
        );
        Self {
            config,
            reserves,
            locked: false,
            guard: ReentrancyGuard::new(),
            lp: LpLedger::default(),
        }
    }
}
