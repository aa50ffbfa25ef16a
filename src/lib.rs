//! # Pump AMM
//!
//! Pair engine for a hybrid bonding-curve / constant-product market maker.
//!
//! A pair trades a base token against a wrapped-native quote asset. Its
//! reserves are the real balances plus fixed virtual-liquidity offsets, so
//! the price starts steep and flattens as real quote flows in. Once a buy
//! would leave the pair with less base than the graduation threshold, the
//! buy is partially filled, the unused coins are refunded and the pair
//! locks, waiting for an external migration (burn, then delete).
//!
//! ## Bootstrap and trade
//!
//! ```rust
//! use pump_amm::prelude::*;
//!
//! let pair_addr = Address::from_bytes([9u8; 32]);
//! let token = Address::from_bytes([1u8; 32]);
//! let wrapped = Address::from_bytes([2u8; 32]);
//! let factory = Address::from_bytes([3u8; 32]);
//! let alice = Address::from_bytes([5u8; 32]);
//!
//! // 1. Configure and create the pair
//! let Ok(config) = PairConfig::with_defaults(pair_addr, token, wrapped, factory) else {
//!     panic!("valid config");
//! };
//! let Ok(mut pair) = Pair::from_config(&config) else { panic!("valid pair") };
//!
//! // 2. Fund it with the base supply and mint the LP unit
//! let mut host = MemoryHost::new();
//! host.register_wrapped(wrapped);
//! host.mint_tokens(token, pair_addr, TOKEN_TOTAL_SUPPLY);
//! let creator = CallContext::new(factory, 0);
//! assert_eq!(pair.mint(&mut host, &creator, factory), Ok(Amount::ONE));
//!
//! // 3. Buy with attached coins
//! let coins = Amount::new(1_000_000_000);
//! host.credit_coins(alice, coins);
//! let Ok(()) = host.send_coins(alice, pair_addr, coins) else { panic!("attach") };
//! let ctx = CallContext::new(alice, 0).with_transferred(coins);
//! let Ok(out) = pair.buy(&mut host, &ctx, Amount::ZERO, alice, 0) else { panic!("buy") };
//! assert_eq!(host.balance_of(token, alice), out);
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Address`](domain::Address), [`Event`](domain::Event), … |
//! | [`math`] | Checked 256-bit arithmetic and the [`curve`](math::curve) pricing functions |
//! | [`config`] | [`PairConfig`](config::PairConfig) and protocol constants |
//! | [`traits`] | [`FromConfig`](traits::FromConfig) and the [`Host`](traits::Host) collaborator interfaces |
//! | [`pair`] | The [`Pair`](pair::Pair) engine and its reentrancy guard |
//! | [`host`] | [`MemoryHost`](host::MemoryHost), an in-memory host |
//! | [`error`] | [`PairError`](error::PairError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod math;
pub mod pair;
pub mod prelude;
pub mod traits;
