//! Property-based tests for pricing and pair invariants.
//!
//! 1. **Fee reduces output**: `get_amount_out` is monotonic in its input and
//!    never above `quote`.
//! 2. **Ceiling never under-charges**: `get_amount_in(get_amount_out(x)) ≥ x`.
//! 3. **Product non-decreasing**: `reserve0 × reserve1` never drops across a
//!    successful buy or sell.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::config::PairConfig;
use crate::domain::{Address, Amount, CallContext};
use crate::error::PairError;
use crate::host::MemoryHost;
use crate::math::curve;
use crate::pair::Pair;
use crate::traits::FromConfig;

const PAIR: u8 = 9;
const TOKEN: u8 = 1;
const WRAPPED: u8 = 2;
const FACTORY: u8 = 3;
const USER: u8 = 5;

fn addr(b: u8) -> Address {
    Address::from_bytes([b; 32])
}

fn amt(v: u128) -> Amount {
    Amount::new(v)
}

fn make_pair(virtual_base: u128, virtual_quote: u128, real_base: u128) -> (Pair, MemoryHost) {
    let Ok(cfg) = PairConfig::new(
        addr(PAIR),
        addr(TOKEN),
        addr(WRAPPED),
        addr(FACTORY),
        amt(virtual_base),
        amt(virtual_quote),
    ) else {
        panic!("valid config");
    };
    let cfg = cfg.with_graduation_threshold(amt(real_base / 10));
    let Ok(mut pair) = Pair::from_config(&cfg) else {
        panic!("valid pair");
    };
    let mut host = MemoryHost::new();
    host.register_wrapped(addr(WRAPPED));
    host.mint_tokens(addr(TOKEN), addr(PAIR), amt(real_base));
    let Ok(_) = pair.mint(&mut host, &CallContext::new(addr(FACTORY), 0), addr(FACTORY)) else {
        panic!("mint");
    };
    (pair, host)
}

fn product(pair: &Pair) -> Amount {
    let Some(k) = pair.get_reserves().ok().and_then(|r| r.product()) else {
        panic!("product fits");
    };
    k
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserves in [10_000, 10^15].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=1_000_000_000_000_000u128
}

/// Trade sizes in [1, 10^12].
fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000u128
}

// ---------------------------------------------------------------------------
// Curve properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_amount_out_monotonic_and_below_quote(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        x in amount_strategy(),
        extra in 1u128..=1_000_000u128,
    ) {
        let Ok(small) = curve::get_amount_out(amt(x), amt(r_in), amt(r_out)) else {
            return Err(TestCaseError::fail("pricing failed"));
        };
        let Ok(large) = curve::get_amount_out(amt(x + extra), amt(r_in), amt(r_out)) else {
            return Err(TestCaseError::fail("pricing failed"));
        };
        prop_assert!(large >= small);

        let Ok(q) = curve::quote(amt(x), amt(r_in), amt(r_out)) else {
            return Err(TestCaseError::fail("quote failed"));
        };
        prop_assert!(small <= q);
        if q >= amt(100) {
            prop_assert!(small < q, "fee must bite: out={} quote={}", small, q);
        }
    }

    #[test]
    fn prop_amount_in_covers_amount_out(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        x in amount_strategy(),
    ) {
        let Ok(out) = curve::get_amount_out(amt(x), amt(r_in), amt(r_out)) else {
            return Err(TestCaseError::fail("pricing failed"));
        };
        if out.is_zero() {
            return Ok(());
        }
        let Ok(back) = curve::get_amount_in(out, amt(r_in), amt(r_out)) else {
            return Err(TestCaseError::fail("inverse pricing failed"));
        };
        prop_assert!(back >= amt(x), "under-charged: {} < {}", back, x);
    }
}

// ---------------------------------------------------------------------------
// Pair invariant
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_product_non_decreasing(
        virtual_base in 1_000_000u128..=1_000_000_000u128,
        virtual_quote in 1_000_000u128..=1_000_000_000u128,
        real_base in 1_000_000u128..=1_000_000_000u128,
        coins in 1u128..=10_000_000u128,
        sell_share in 1u128..=100u128,
    ) {
        let (mut pair, mut host) = make_pair(virtual_base, virtual_quote, real_base);
        let k0 = product(&pair);

        host.credit_coins(addr(USER), amt(coins));
        let Ok(()) = host.send_coins(addr(USER), addr(PAIR), amt(coins)) else {
            return Err(TestCaseError::fail("attach coins"));
        };
        let ctx = CallContext::new(addr(USER), 0).with_transferred(amt(coins));
        let result = pair.buy(&mut host, &ctx, Amount::ZERO, addr(USER), 0);
        // dust buys round to zero output
        prop_assume!(result != Err(PairError::InsufficientOutputAmount));
        let bought = match result {
            Ok(out) => out,
            Err(err) => return Err(TestCaseError::fail(format!("buy failed: {err}"))),
        };
        let k1 = product(&pair);
        prop_assert!(k1 >= k0, "buy lowered k: {} < {}", k1, k0);

        if pair.is_locked() == Ok(true) {
            return Ok(());
        }
        let Some(to_sell) = bought.to_u128().map(|b| b * sell_share / 100) else {
            return Err(TestCaseError::fail("bought fits u128"));
        };
        if to_sell == 0 {
            return Ok(());
        }
        host.approve(addr(TOKEN), addr(USER), addr(PAIR), amt(to_sell));
        let ctx = CallContext::new(addr(USER), 0);
        let result = pair.sell(&mut host, &ctx, amt(to_sell), Amount::ZERO, addr(USER), 0);
        prop_assume!(result != Err(PairError::InsufficientOutputAmount));
        if let Err(err) = result {
            return Err(TestCaseError::fail(format!("sell failed: {err}")));
        }
        let k2 = product(&pair);
        prop_assert!(k2 >= k1, "sell lowered k: {} < {}", k2, k1);
    }
}
