//! In-memory host: asset ledger, coin balances, registry and event log.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::domain::{Address, Amount, Event};
use crate::error::PairError;
use crate::pair::Pair;
use crate::traits::{AssetLedger, EventSink, Host, Registry};

/// Callback run after every asset call that hands out the pair, standing
/// in for a token hook or coin receiver that calls back into it.
///
/// The hook is taken out while it runs, so asset calls it makes itself do
/// not fire it again.
pub type ReentryHook = Box<dyn FnMut(&mut Pair, &mut MemoryHost)>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Ledger {
    tokens: BTreeMap<(Address, Address), Amount>,
    allowances: BTreeMap<(Address, Address, Address), Amount>,
    coins: BTreeMap<Address, Amount>,
    wrapped: BTreeSet<Address>,
    deployers: BTreeMap<Address, Address>,
}

/// Saved [`MemoryHost`] state, restored by [`Host::rollback`].
///
/// The event log is append-only, so only its length is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSnapshot {
    ledger: Ledger,
    events_len: usize,
}

fn credit<K: Ord>(map: &mut BTreeMap<K, Amount>, key: K, amount: Amount) -> Result<(), PairError> {
    let entry = map.entry(key).or_default();
    *entry = entry
        .checked_add(&amount)
        .ok_or(PairError::AssetCall("balance overflow"))?;
    Ok(())
}

fn debit<K: Ord>(
    map: &mut BTreeMap<K, Amount>,
    key: K,
    amount: Amount,
    shortfall: &'static str,
) -> Result<(), PairError> {
    let current = map.get(&key).copied().unwrap_or_default();
    let left = current
        .checked_sub(&amount)
        .ok_or(PairError::AssetCall(shortfall))?;
    map.insert(key, left);
    Ok(())
}

/// A [`Host`] held entirely in memory.
///
/// Token balances are keyed by `(token, owner)`. Wrapped-native assets
/// registered with [`register_wrapped`](Self::register_wrapped) hold the
/// coins backing their supply under their own address.
///
/// # Example
///
/// ```rust
/// use pump_amm::domain::{Address, Amount};
/// use pump_amm::host::MemoryHost;
/// use pump_amm::traits::AssetLedger;
///
/// let token = Address::from_bytes([1u8; 32]);
/// let alice = Address::from_bytes([5u8; 32]);
/// let mut host = MemoryHost::new();
/// host.mint_tokens(token, alice, Amount::new(10));
/// assert_eq!(host.balance_of(token, alice), Amount::new(10));
/// ```
#[derive(Default)]
pub struct MemoryHost {
    ledger: Ledger,
    events: Vec<Event>,
    hook: Option<ReentryHook>,
}

impl fmt::Debug for MemoryHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryHost")
            .field("ledger", &self.ledger)
            .field("events", &self.events.len())
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

impl MemoryHost {
    /// An empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `amount` of `token` for `owner`, saturating at
    /// [`Amount::MAX`].
    pub fn mint_tokens(&mut self, token: Address, owner: Address, amount: Amount) {
        let entry = self.ledger.tokens.entry((token, owner)).or_default();
        *entry = entry.checked_add(&amount).unwrap_or(Amount::MAX);
    }

    /// Creates `amount` native coins for `owner`, saturating at
    /// [`Amount::MAX`].
    pub fn credit_coins(&mut self, owner: Address, amount: Amount) {
        let entry = self.ledger.coins.entry(owner).or_default();
        *entry = entry.checked_add(&amount).unwrap_or(Amount::MAX);
    }

    /// Moves native coins without running the re-entry hook; used to attach
    /// value to a call before invoking the pair.
    ///
    /// # Errors
    ///
    /// [`PairError::AssetCall`] if `from` lacks the coins.
    pub fn send_coins(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), PairError> {
        self.move_coins(from, to, amount)
    }

    /// Sets the allowance of `spender` over `owner`'s `token`.
    pub fn approve(&mut self, token: Address, owner: Address, spender: Address, amount: Amount) {
        self.ledger
            .allowances
            .insert((token, owner, spender), amount);
    }

    /// Remaining allowance of `spender` over `owner`'s `token`.
    #[must_use]
    pub fn allowance(&self, token: Address, owner: Address, spender: Address) -> Amount {
        self.ledger
            .allowances
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or_default()
    }

    /// Marks `token` as a wrapped-native asset accepting deposits.
    pub fn register_wrapped(&mut self, token: Address) {
        self.ledger.wrapped.insert(token);
    }

    /// Records `deployer` as the identity authorized by `factory`.
    pub fn set_deployer(&mut self, factory: Address, deployer: Address) {
        self.ledger.deployers.insert(factory, deployer);
    }

    /// Installs the re-entry hook, replacing any previous one.
    pub fn set_reentry_hook(&mut self, hook: ReentryHook) {
        self.hook = Some(hook);
    }

    /// Removes the re-entry hook.
    pub fn clear_reentry_hook(&mut self) {
        self.hook = None;
    }

    /// Events emitted so far.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Drains the event log.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    fn move_tokens(&mut self, token: Address, from: Address, to: Address, amount: Amount) -> Result<(), PairError> {
        debit(&mut self.ledger.tokens, (token, from), amount, "insufficient token balance")?;
        credit(&mut self.ledger.tokens, (token, to), amount)
    }

    fn move_coins(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), PairError> {
        debit(&mut self.ledger.coins, from, amount, "insufficient coins")?;
        credit(&mut self.ledger.coins, to, amount)
    }

    fn ensure_wrapped(&self, token: Address) -> Result<(), PairError> {
        if self.ledger.wrapped.contains(&token) {
            Ok(())
        } else {
            Err(PairError::AssetCall("not a wrapped-native asset"))
        }
    }

    fn fire_hook(&mut self, pair: &mut Pair) {
        if let Some(mut hook) = self.hook.take() {
            hook(pair, self);
            if self.hook.is_none() {
                self.hook = Some(hook);
            }
        }
    }
}

impl AssetLedger for MemoryHost {
    fn balance_of(&self, token: Address, owner: Address) -> Amount {
        self.ledger
            .tokens
            .get(&(token, owner))
            .copied()
            .unwrap_or_default()
    }

    fn transfer(
        &mut self,
        reentry: &mut Pair,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), PairError> {
        self.move_tokens(token, from, to, amount)?;
        self.fire_hook(reentry);
        Ok(())
    }

    fn transfer_from(
        &mut self,
        reentry: &mut Pair,
        token: Address,
        spender: Address,
        owner: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), PairError> {
        debit(
            &mut self.ledger.allowances,
            (token, owner, spender),
            amount,
            "insufficient allowance",
        )?;
        self.move_tokens(token, owner, to, amount)?;
        self.fire_hook(reentry);
        Ok(())
    }

    fn deposit(
        &mut self,
        reentry: &mut Pair,
        wrapped: Address,
        from: Address,
        amount: Amount,
    ) -> Result<(), PairError> {
        self.ensure_wrapped(wrapped)?;
        self.move_coins(from, wrapped, amount)?;
        credit(&mut self.ledger.tokens, (wrapped, from), amount)?;
        self.fire_hook(reentry);
        Ok(())
    }

    fn withdraw(
        &mut self,
        reentry: &mut Pair,
        wrapped: Address,
        from: Address,
        amount: Amount,
        to: Address,
    ) -> Result<(), PairError> {
        self.ensure_wrapped(wrapped)?;
        debit(&mut self.ledger.tokens, (wrapped, from), amount, "insufficient wrapped balance")?;
        self.move_coins(wrapped, to, amount)?;
        self.fire_hook(reentry);
        Ok(())
    }

    fn native_balance(&self, owner: Address) -> Amount {
        self.ledger.coins.get(&owner).copied().unwrap_or_default()
    }

    fn transfer_coins(
        &mut self,
        reentry: &mut Pair,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), PairError> {
        self.move_coins(from, to, amount)?;
        self.fire_hook(reentry);
        Ok(())
    }
}

impl EventSink for MemoryHost {
    fn emit(&mut self, event: Event) {
        tracing::trace!(%event, "event");
        self.events.push(event);
    }
}

impl Registry for MemoryHost {
    fn deployer_of(&self, factory: Address) -> Option<Address> {
        self.ledger.deployers.get(&factory).copied()
    }
}

impl Host for MemoryHost {
    type Checkpoint = LedgerSnapshot;

    fn checkpoint(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            ledger: self.ledger.clone(),
            events_len: self.events.len(),
        }
    }

    fn rollback(&mut self, checkpoint: LedgerSnapshot) {
        self.ledger = checkpoint.ledger;
        self.events.truncate(checkpoint.events_len);
    }
}
