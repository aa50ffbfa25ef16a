//! External collaborators of the pair, interface only.
//!
//! The pair never touches balances directly. It reads and moves assets
//! through an [`AssetLedger`], publishes [`Event`]s to an [`EventSink`],
//! looks up the registry's deployer through a [`Registry`], and relies on
//! the [`Host`] to make each entry point all-or-nothing.
//!
//! # Re-entry
//!
//! Every ledger call that can run foreign code (a token hook, a coin
//! receiver) takes the pair itself as `reentry`. The collaborator may call
//! straight back into any pair entry point with it; guarded entry points
//! then fail with [`PairError::ReentrantCall`](crate::error::PairError).

use crate::domain::{Address, Amount, Event};
use crate::error::PairError;
use crate::pair::Pair;

/// Fungible assets, the wrapped-native quote asset, and native coins.
pub trait AssetLedger {
    /// Balance of `owner` in `token`.
    fn balance_of(&self, token: Address, owner: Address) -> Amount;

    /// Moves `amount` of `token` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::AssetCall`] if the asset refuses the transfer.
    fn transfer(
        &mut self,
        reentry: &mut Pair,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), PairError>;

    /// Moves `amount` of `token` from `owner` to `to` on behalf of
    /// `spender`, consuming allowance.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::AssetCall`] on missing balance or allowance.
    fn transfer_from(
        &mut self,
        reentry: &mut Pair,
        token: Address,
        spender: Address,
        owner: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), PairError>;

    /// Wraps `amount` native coins of `from` into `wrapped`.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::AssetCall`] if `from` lacks the coins or
    /// `wrapped` is not a wrapped-native asset.
    fn deposit(
        &mut self,
        reentry: &mut Pair,
        wrapped: Address,
        from: Address,
        amount: Amount,
    ) -> Result<(), PairError>;

    /// Unwraps `amount` of `wrapped` held by `from`, paying native coins
    /// to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::AssetCall`] if `from` lacks the wrapped balance.
    fn withdraw(
        &mut self,
        reentry: &mut Pair,
        wrapped: Address,
        from: Address,
        amount: Amount,
        to: Address,
    ) -> Result<(), PairError>;

    /// Native coin balance of `owner`.
    fn native_balance(&self, owner: Address) -> Amount;

    /// Sends native coins.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::AssetCall`] if `from` lacks the coins.
    fn transfer_coins(
        &mut self,
        reentry: &mut Pair,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), PairError>;
}

/// Destination of emitted events.
pub trait EventSink {
    /// Publishes `event`.
    fn emit(&mut self, event: Event);
}

/// The registry (factory) that created the pair.
pub trait Registry {
    /// The identity authorized to delete pairs of `factory`, if set.
    fn deployer_of(&self, factory: Address) -> Option<Address>;
}

/// Everything a pair needs from its execution environment.
///
/// `checkpoint` / `rollback` provide all-or-nothing calls: a guarded
/// entry point takes a checkpoint on entry and rolls back to it on any
/// error, undoing asset movements and events together with pair storage.
pub trait Host: AssetLedger + EventSink + Registry {
    /// Opaque saved state.
    type Checkpoint;

    /// Captures the current host state.
    fn checkpoint(&self) -> Self::Checkpoint;

    /// Restores a state captured by [`Host::checkpoint`].
    fn rollback(&mut self, checkpoint: Self::Checkpoint);
}
