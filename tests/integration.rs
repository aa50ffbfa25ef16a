//! Integration tests driving pairs end to end through [`MemoryHost`]:
//! bootstrap, trading, graduation, migration and reentrancy.

#![allow(clippy::panic)]

use std::cell::RefCell;
use std::rc::Rc;

use pump_amm::config::{
    PairConfig, DEFAULT_VIRTUAL_LIQUIDITY_BASE, DEFAULT_VIRTUAL_LIQUIDITY_QUOTE,
    GRADUATION_THRESHOLD, ONE_COIN, TOKEN_TOTAL_SUPPLY,
};
use pump_amm::domain::{Address, Amount, CallContext, Event, PoolPhase, Reserves};
use pump_amm::error::PairError;
use pump_amm::host::MemoryHost;
use pump_amm::pair::{GuardStatus, Pair};
use pump_amm::traits::{AssetLedger, FromConfig};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const NOW: u64 = 1_700_000_000;

fn pair_addr() -> Address {
    Address::from_bytes([9u8; 32])
}
fn token() -> Address {
    Address::from_bytes([1u8; 32])
}
fn wrapped() -> Address {
    Address::from_bytes([2u8; 32])
}
fn factory() -> Address {
    Address::from_bytes([3u8; 32])
}
fn deployer() -> Address {
    Address::from_bytes([4u8; 32])
}
fn alice() -> Address {
    Address::from_bytes([5u8; 32])
}
fn bob() -> Address {
    Address::from_bytes([6u8; 32])
}

fn amt(v: u128) -> Amount {
    Amount::new(v)
}

/// A bootstrapped pair holding the whole token supply, LP unit with the
/// deployer.
fn launched() -> (Pair, MemoryHost) {
    let Ok(cfg) = PairConfig::with_defaults(pair_addr(), token(), wrapped(), factory()) else {
        panic!("valid config");
    };
    let Ok(mut pair) = Pair::from_config(&cfg) else {
        panic!("valid pair");
    };
    let mut host = MemoryHost::new();
    host.register_wrapped(wrapped());
    host.set_deployer(factory(), deployer());
    host.mint_tokens(token(), pair_addr(), TOKEN_TOTAL_SUPPLY);

    let ctx = CallContext::new(deployer(), NOW);
    assert_eq!(pair.mint(&mut host, &ctx, deployer()), Ok(Amount::ONE));
    (pair, host)
}

/// Credits `who` with `coins` and attaches them to a call on the pair.
fn attach(host: &mut MemoryHost, who: Address, coins: u128) -> CallContext {
    host.credit_coins(who, amt(coins));
    let Ok(()) = host.send_coins(who, pair_addr(), amt(coins)) else {
        panic!("attach coins");
    };
    CallContext::new(who, NOW).with_transferred(amt(coins))
}

fn reserves(pair: &Pair) -> Reserves {
    let Ok(r) = pair.get_reserves() else {
        panic!("live pair");
    };
    r
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[test]
fn mint_bootstraps_once() {
    let (mut pair, mut host) = launched();
    assert_eq!(
        reserves(&pair),
        Reserves::new(
            TOKEN_TOTAL_SUPPLY.checked_add(&DEFAULT_VIRTUAL_LIQUIDITY_BASE).unwrap_or_default(),
            DEFAULT_VIRTUAL_LIQUIDITY_QUOTE,
        )
    );
    assert_eq!(pair.phase(), PoolPhase::ActiveUnlocked);

    let events = host.take_events();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[1],
        Event::Mint {
            to: deployer(),
            amount0: TOKEN_TOTAL_SUPPLY,
            amount1: Amount::ZERO,
        }
    );

    let ctx = CallContext::new(deployer(), NOW);
    assert_eq!(
        pair.mint(&mut host, &ctx, deployer()),
        Err(PairError::AlreadyMinted)
    );
    assert!(host.events().is_empty());
}

// ---------------------------------------------------------------------------
// Trading
// ---------------------------------------------------------------------------

#[test]
fn buy_then_sell_round_trip_loses_value() {
    let (mut pair, mut host) = launched();
    host.take_events();

    let ctx = attach(&mut host, alice(), ONE_COIN);
    let Ok(bought) = pair.buy(&mut host, &ctx, Amount::ZERO, alice(), NOW) else {
        panic!("buy");
    };
    assert_eq!(bought, amt(7_919_947_728_344_992_923_046));
    assert_eq!(host.balance_of(token(), alice()), bought);
    assert_eq!(host.balance_of(wrapped(), factory()), amt(ONE_COIN / 100));

    let events = host.take_events();
    let Some(Event::Swap {
        amount1_in,
        amount0_out,
        ..
    }) = events.last()
    else {
        panic!("expected Swap event");
    };
    assert_eq!(*amount1_in, amt(ONE_COIN - ONE_COIN / 100));
    assert_eq!(*amount0_out, bought);

    host.approve(token(), alice(), pair_addr(), bought);
    let ctx = CallContext::new(alice(), NOW);
    let Ok(received) = pair.sell(&mut host, &ctx, bought, Amount::ZERO, alice(), NOW) else {
        panic!("sell");
    };
    assert!(received < amt(ONE_COIN));
    assert_eq!(host.native_balance(alice()), received);
    assert_eq!(host.balance_of(token(), alice()), Amount::ZERO);
    assert_eq!(pair.guard_status(), Ok(GuardStatus::Free));
}

#[test]
fn sell_reference_value() {
    // reserves of exactly (1000, 1000): 1 real + 999 virtual base,
    // 999 real + 1 virtual quote
    let Ok(cfg) = PairConfig::new(pair_addr(), token(), wrapped(), factory(), amt(999), amt(1)) else {
        panic!("valid config");
    };
    let cfg = cfg.with_graduation_threshold(Amount::ZERO);
    let Ok(mut pair) = Pair::from_config(&cfg) else {
        panic!("valid pair");
    };
    let mut host = MemoryHost::new();
    host.register_wrapped(wrapped());
    host.mint_tokens(token(), pair_addr(), amt(1));
    host.credit_coins(pair_addr(), amt(999));
    let Ok(()) = host.deposit(&mut pair.clone(), wrapped(), pair_addr(), amt(999)) else {
        panic!("seed quote");
    };
    let ctx = CallContext::new(deployer(), NOW);
    let Ok(_) = pair.mint(&mut host, &ctx, deployer()) else {
        panic!("mint");
    };
    assert_eq!(reserves(&pair), Reserves::new(amt(1_000), amt(1_000)));

    host.mint_tokens(token(), alice(), amt(100));
    host.approve(token(), alice(), pair_addr(), amt(100));
    let ctx = CallContext::new(alice(), NOW);
    // the quote floor is 1 virtual, so 90 out leaves 910 ≥ 1
    assert_eq!(
        pair.sell(&mut host, &ctx, amt(100), amt(90), alice(), NOW),
        Ok(amt(90))
    );
}

#[test]
fn expired_and_slippage_leave_no_trace() {
    let (mut pair, mut host) = launched();
    host.take_events();
    let before = pair.clone();

    let ctx = attach(&mut host, alice(), ONE_COIN);
    assert_eq!(
        pair.buy(&mut host, &ctx, Amount::ZERO, alice(), NOW - 1),
        Err(PairError::Expired)
    );
    assert_eq!(
        pair.buy(&mut host, &ctx, Amount::MAX, alice(), NOW),
        Err(PairError::InsufficientOutputAmount)
    );
    assert_eq!(pair, before);
    assert!(host.events().is_empty());
    assert_eq!(host.native_balance(pair_addr()), amt(ONE_COIN));
}

#[test]
fn buy_to_asset_address_is_rejected() {
    let (mut pair, mut host) = launched();
    let ctx = attach(&mut host, alice(), ONE_COIN);
    assert_eq!(
        pair.buy(&mut host, &ctx, Amount::ZERO, token(), NOW),
        Err(PairError::InvalidTo)
    );
    assert_eq!(host.balance_of(wrapped(), pair_addr()), Amount::ZERO);
}

// ---------------------------------------------------------------------------
// Graduation and migration
// ---------------------------------------------------------------------------

#[test]
fn graduation_clamps_refunds_and_locks() {
    let (mut pair, mut host) = launched();
    let sent: u128 = 1_000_000_000_000_000;
    let ctx = attach(&mut host, alice(), sent);

    let expected_out = TOKEN_TOTAL_SUPPLY
        .checked_sub(&GRADUATION_THRESHOLD)
        .unwrap_or_default();
    assert_eq!(
        pair.buy(&mut host, &ctx, Amount::ZERO, alice(), NOW),
        Ok(expected_out)
    );
    assert_eq!(host.balance_of(token(), pair_addr()), GRADUATION_THRESHOLD);
    assert_eq!(host.native_balance(alice()), amt(696_969_696_969_696));
    assert_eq!(host.balance_of(wrapped(), factory()), amt(3_030_303_030_303));
    assert_eq!(host.balance_of(wrapped(), pair_addr()), amt(300_000_000_000_001));
    assert_eq!(pair.is_locked(), Ok(true));
    assert_eq!(pair.phase(), PoolPhase::ActiveLocked);

    // trading is over on the curve
    let ctx = attach(&mut host, bob(), ONE_COIN);
    assert_eq!(
        pair.buy(&mut host, &ctx, Amount::ZERO, bob(), NOW),
        Err(PairError::Locked)
    );
    host.approve(token(), alice(), pair_addr(), amt(1));
    let ctx = CallContext::new(alice(), NOW);
    assert_eq!(
        pair.sell(&mut host, &ctx, amt(1), Amount::ZERO, alice(), NOW),
        Err(PairError::Locked)
    );
}

#[test]
fn failed_graduation_rolls_back_refund() {
    let (mut pair, mut host) = launched();
    let ctx = attach(&mut host, alice(), 1_000_000_000_000_000);
    let before = pair.clone();
    assert_eq!(
        pair.buy(&mut host, &ctx, Amount::MAX, alice(), NOW),
        Err(PairError::ArithmeticOverflow("amount multiplication overflow"))
    );
    let huge = TOKEN_TOTAL_SUPPLY.checked_mul(&amt(10)).unwrap_or_default();
    assert_eq!(
        pair.buy(&mut host, &ctx, huge, alice(), NOW),
        Err(PairError::InsufficientOutputAmount)
    );
    assert_eq!(pair, before);
    assert_eq!(host.native_balance(alice()), Amount::ZERO);
}

#[test]
fn migration_burn_then_delete() {
    let (mut pair, mut host) = launched();
    let ctx = attach(&mut host, alice(), 1_000_000_000_000_000);
    let Ok(_) = pair.buy(&mut host, &ctx, Amount::ZERO, alice(), NOW) else {
        panic!("graduating buy");
    };

    let migrator = CallContext::new(deployer(), NOW).with_transaction_creator(bob());
    assert_eq!(
        pair.delete_pool(&mut host, &migrator),
        Err(PairError::NotMigrated)
    );

    // burn only works once the LP unit sits in the pair
    assert_eq!(
        pair.burn(&mut host, &migrator, deployer()),
        Err(PairError::InsufficientLiquiditySent)
    );
    assert_eq!(
        pair.transfer_lp(&CallContext::new(alice(), NOW), pair_addr(), Amount::ONE),
        Err(PairError::InsufficientLpBalance)
    );
    assert_eq!(pair.transfer_lp(&migrator, pair_addr(), Amount::ONE), Ok(()));
    assert_eq!(
        pair.burn(&mut host, &migrator, deployer()),
        Ok((GRADUATION_THRESHOLD, amt(300_000_000_000_001)))
    );
    assert_eq!(reserves(&pair), Reserves::default());
    assert_eq!(pair.total_supply(), Ok(Amount::ZERO));
    assert_eq!(host.balance_of(token(), deployer()), GRADUATION_THRESHOLD);
    let Some(Event::Burn { caller, to, .. }) = host.events().last() else {
        panic!("expected Burn event");
    };
    assert_eq!((*caller, *to), (deployer(), deployer()));

    let outsider = CallContext::new(alice(), NOW);
    assert_eq!(
        pair.delete_pool(&mut host, &outsider),
        Err(PairError::NotDeployer)
    );

    host.credit_coins(pair_addr(), amt(10_000_000));
    assert_eq!(pair.delete_pool(&mut host, &migrator), Ok(amt(10_000_000)));
    assert_eq!(host.native_balance(bob()), amt(10_000_000));
    assert_eq!(pair.phase(), PoolPhase::Deleted);
    assert_eq!(pair.token0(), Err(PairError::Deleted));
}

// ---------------------------------------------------------------------------
// Reentrancy
// ---------------------------------------------------------------------------

#[test]
fn reentrant_calls_fail_without_disturbing_outer_call() {
    let (mut pair, mut host) = launched();
    let (mut reference, mut reference_host) = (pair.clone(), MemoryHost::new());
    reference_host.register_wrapped(wrapped());
    reference_host.set_deployer(factory(), deployer());
    reference_host.mint_tokens(token(), pair_addr(), TOKEN_TOTAL_SUPPLY);

    let inner: Rc<RefCell<Vec<Result<Amount, PairError>>>> = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&inner);
    host.set_reentry_hook(Box::new(move |pair: &mut Pair, host: &mut MemoryHost| {
        let ctx = CallContext::new(bob(), NOW).with_transferred(amt(1));
        seen.borrow_mut()
            .push(pair.buy(host, &ctx, Amount::ZERO, bob(), NOW));
        seen.borrow_mut()
            .push(pair.mint(host, &ctx, bob()));
        seen.borrow_mut().push(
            pair.burn(host, &ctx, bob()).map(|(a, _)| a),
        );
    }));

    let ctx = attach(&mut host, alice(), ONE_COIN);
    let Ok(out) = pair.buy(&mut host, &ctx, Amount::ZERO, alice(), NOW) else {
        panic!("outer buy");
    };

    let attempts = inner.borrow();
    assert!(!attempts.is_empty());
    assert!(attempts.iter().all(|r| *r == Err(PairError::ReentrantCall)));

    let ctx = attach(&mut reference_host, alice(), ONE_COIN);
    assert_eq!(
        reference.buy(&mut reference_host, &ctx, Amount::ZERO, alice(), NOW),
        Ok(out)
    );
    assert_eq!(pair, reference);
    assert_eq!(pair.guard_status(), Ok(GuardStatus::Free));
}

/// Hook that tries `sell` and `delete_pool` from inside an outer call and
/// records what they returned.
fn sell_and_delete_hook(
    seen: Rc<RefCell<Vec<Result<Amount, PairError>>>>,
) -> pump_amm::host::ReentryHook {
    Box::new(move |pair: &mut Pair, host: &mut MemoryHost| {
        let ctx = CallContext::new(deployer(), NOW).with_transaction_creator(deployer());
        seen.borrow_mut()
            .push(pair.sell(host, &ctx, Amount::ONE, Amount::ZERO, deployer(), NOW));
        seen.borrow_mut().push(pair.delete_pool(host, &ctx));
    })
}

#[test]
fn reentrant_sell_and_delete_fail_during_sell() {
    let (mut pair, mut host) = launched();
    let (mut reference, mut reference_host) = launched();
    for (p, h) in [(&mut pair, &mut host), (&mut reference, &mut reference_host)] {
        let ctx = attach(&mut *h, alice(), ONE_COIN);
        let Ok(_) = p.buy(&mut *h, &ctx, Amount::ZERO, alice(), NOW) else {
            panic!("buy");
        };
        let sold = h.balance_of(token(), alice());
        h.approve(token(), alice(), pair_addr(), sold);
    }
    let sold = host.balance_of(token(), alice());

    let inner: Rc<RefCell<Vec<Result<Amount, PairError>>>> = Rc::new(RefCell::new(Vec::new()));
    host.set_reentry_hook(sell_and_delete_hook(Rc::clone(&inner)));

    let ctx = CallContext::new(alice(), NOW);
    let Ok(out) = pair.sell(&mut host, &ctx, sold, Amount::ZERO, alice(), NOW) else {
        panic!("outer sell");
    };

    let attempts = inner.borrow();
    assert!(!attempts.is_empty());
    assert!(attempts.iter().all(|r| *r == Err(PairError::ReentrantCall)));

    assert_eq!(
        reference.sell(&mut reference_host, &ctx, sold, Amount::ZERO, alice(), NOW),
        Ok(out)
    );
    assert_eq!(pair, reference);
    assert_eq!(host.native_balance(alice()), reference_host.native_balance(alice()));
    assert_eq!(host.native_balance(factory()), reference_host.native_balance(factory()));
    assert_eq!(host.events(), reference_host.events());
    assert_eq!(pair.guard_status(), Ok(GuardStatus::Free));
}

#[test]
fn reentrant_sell_and_delete_fail_during_delete() {
    let (mut pair, mut host) = launched();
    let ctx = attach(&mut host, alice(), 1_000_000_000_000_000);
    let Ok(_) = pair.buy(&mut host, &ctx, Amount::ZERO, alice(), NOW) else {
        panic!("graduating buy");
    };
    let migrator = CallContext::new(deployer(), NOW).with_transaction_creator(bob());
    assert_eq!(pair.transfer_lp(&migrator, pair_addr(), Amount::ONE), Ok(()));
    let Ok(_) = pair.burn(&mut host, &migrator, deployer()) else {
        panic!("burn");
    };
    host.credit_coins(pair_addr(), amt(10_000_000));

    let inner: Rc<RefCell<Vec<Result<Amount, PairError>>>> = Rc::new(RefCell::new(Vec::new()));
    host.set_reentry_hook(sell_and_delete_hook(Rc::clone(&inner)));

    assert_eq!(pair.delete_pool(&mut host, &migrator), Ok(amt(10_000_000)));

    let attempts = inner.borrow();
    assert_eq!(attempts.len(), 2);
    assert!(attempts.iter().all(|r| *r == Err(PairError::ReentrantCall)));
    assert_eq!(host.native_balance(bob()), amt(10_000_000));
    assert_eq!(host.native_balance(pair_addr()), Amount::ZERO);
    assert_eq!(pair.phase(), PoolPhase::Deleted);
}

#[test]
fn reentrant_lp_transfer_is_undone_when_outer_call_fails() {
    let (mut pair, mut host) = launched();
    host.set_reentry_hook(Box::new(|pair: &mut Pair, _host: &mut MemoryHost| {
        let ctx = CallContext::new(deployer(), NOW);
        let _ = pair.transfer_lp(&ctx, bob(), Amount::ONE);
    }));

    // deposit runs the hook, then the swap fails on the recipient check
    let ctx = attach(&mut host, alice(), ONE_COIN);
    assert_eq!(
        pair.buy(&mut host, &ctx, Amount::ZERO, wrapped(), NOW),
        Err(PairError::InvalidTo)
    );
    assert_eq!(pair.lp_balance_of(deployer()), Ok(Amount::ONE));
    assert_eq!(pair.lp_balance_of(bob()), Ok(Amount::ZERO));
    assert_eq!(pair.guard_status(), Ok(GuardStatus::Free));
}
