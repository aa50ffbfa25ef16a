//! The pair engine.
//!
//! A [`Pair`] owns its persisted state and nothing else. Assets, events and
//! the registry live behind the [`Host`] it is handed on every call, which
//! keeps the engine free of ambient globals and lets a collaborator re-enter
//! it through the `&mut Pair` it receives during asset calls.
//!
//! # Entry points
//!
//! | Call | Guarded | Phase change |
//! |------|---------|--------------|
//! | [`mint`](Pair::mint) | yes | uninitialized → active |
//! | [`buy`](Pair::buy) | yes | active → active / locked |
//! | [`sell`](Pair::sell) | yes | active → active |
//! | [`burn`](Pair::burn) | yes | active / locked → uninitialized |
//! | [`delete_pool`](Pair::delete_pool) | yes | drained → deleted |
//! | [`transfer_lp`](Pair::transfer_lp) | no | none |
//!
//! Every guarded call is all-or-nothing: on error both pair storage and the
//! host are restored to their state on entry.

mod accounting;
mod guard;
mod lifecycle;
mod reserves;
mod storage;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub use guard::{GuardStatus, ReentrancyGuard};
pub use storage::LpMetadata;

use storage::PairStorage;

use crate::config::PairConfig;
use crate::domain::{Address, Amount, CallContext, PoolPhase};
use crate::error::{PairError, Result};
use crate::traits::{FromConfig, Host};

/// A hybrid bonding-curve / constant-product pool between a base asset
/// (`token0`) and a wrapped-native quote asset (`token1`).
///
/// # Example
///
/// ```rust
/// use pump_amm::config::PairConfig;
/// use pump_amm::domain::{Address, PoolPhase};
/// use pump_amm::pair::Pair;
/// use pump_amm::traits::FromConfig;
///
/// let Ok(cfg) = PairConfig::with_defaults(
///     Address::from_bytes([9u8; 32]),
///     Address::from_bytes([1u8; 32]),
///     Address::from_bytes([2u8; 32]),
///     Address::from_bytes([3u8; 32]),
/// ) else { panic!("valid config") };
/// let Ok(pair) = Pair::from_config(&cfg) else { panic!("valid config") };
/// assert_eq!(pair.phase(), PoolPhase::Uninitialized);
/// assert_eq!(pair.is_locked(), Ok(false));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    storage: Option<PairStorage>,
}

impl FromConfig<PairConfig> for Pair {
    fn from_config(config: &PairConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(pair = %config.address(), "pair created");
        Ok(Self {
            storage: Some(PairStorage::new(*config)),
        })
    }
}

impl Pair {
    fn storage(&self) -> Result<&PairStorage> {
        self.storage.as_ref().ok_or(PairError::Deleted)
    }

    fn storage_mut(&mut self) -> Result<&mut PairStorage> {
        self.storage.as_mut().ok_or(PairError::Deleted)
    }

    fn config(&self) -> Result<&PairConfig> {
        Ok(&self.storage()?.config)
    }

    /// The pair's own identity.
    ///
    /// # Errors
    ///
    /// [`PairError::Deleted`] once the pair has been deleted; the same
    /// applies to every other view.
    pub fn address(&self) -> Result<Address> {
        Ok(self.config()?.address())
    }

    /// The base asset.
    pub fn token0(&self) -> Result<Address> {
        Ok(self.config()?.token0())
    }

    /// The wrapped-native quote asset.
    pub fn token1(&self) -> Result<Address> {
        Ok(self.config()?.token1())
    }

    /// The registry that created the pair and collects protocol fees.
    pub fn factory(&self) -> Result<Address> {
        Ok(self.config()?.factory())
    }

    /// Whether the pair has graduated.
    pub fn is_locked(&self) -> Result<bool> {
        Ok(self.storage()?.locked)
    }

    /// Virtual-liquidity constants as `(base, quote)`.
    pub fn virtual_liquidity(&self) -> Result<(Amount, Amount)> {
        let config = self.config()?;
        Ok((
            config.virtual_liquidity_base(),
            config.virtual_liquidity_quote(),
        ))
    }

    /// Outstanding LP units, `0` or `1`.
    pub fn total_supply(&self) -> Result<Amount> {
        Ok(self.storage()?.lp.total_supply())
    }

    /// LP balance of `holder`.
    pub fn lp_balance_of(&self, holder: Address) -> Result<Amount> {
        Ok(self.storage()?.lp.balance_of(&holder))
    }

    /// Name, symbol and decimals of the LP token.
    pub fn lp_metadata(&self) -> Result<LpMetadata> {
        self.storage()?;
        Ok(LpMetadata::DEFAULT)
    }

    /// State of the reentrancy slot.
    pub fn guard_status(&self) -> Result<GuardStatus> {
        Ok(self.storage()?.guard.status())
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> PoolPhase {
        match &self.storage {
            None => PoolPhase::Deleted,
            Some(s) if s.lp.total_supply().is_zero() => PoolPhase::Uninitialized,
            Some(s) if s.locked => PoolPhase::ActiveLocked,
            Some(_) => PoolPhase::ActiveUnlocked,
        }
    }

    /// Runs `op` holding the reentrancy slot.
    ///
    /// The slot is released on success. On error, storage (slot included)
    /// and host are rolled back to their state on entry, so a failed call
    /// leaves no trace.
    fn non_reentrant<H, T, F>(&mut self, host: &mut H, op: F) -> Result<T>
    where
        H: Host,
        F: FnOnce(&mut Self, &mut H) -> Result<T>,
    {
        let snapshot = self.storage()?.clone();
        self.storage_mut()?.guard.enter()?;
        let checkpoint = host.checkpoint();

        match op(self, host) {
            Ok(value) => {
                // deletion drops storage together with the slot
                if let Some(storage) = self.storage.as_mut() {
                    storage.guard.exit();
                }
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(error = %err, "guarded call failed, rolling back");
                self.storage = Some(snapshot);
                host.rollback(checkpoint);
                Err(err)
            }
        }
    }

    /// Deadline and lock checks shared by `buy` and `sell`.
    fn ensure(&self, ctx: &CallContext, deadline: u64) -> Result<()> {
        if ctx.timestamp > deadline {
            return Err(PairError::Expired);
        }
        if self.storage()?.locked {
            return Err(PairError::Locked);
        }
        Ok(())
    }
}
