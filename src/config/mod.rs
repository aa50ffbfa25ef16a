//! Pair configuration and protocol constants.
//!
//! [`PairConfig`] is the declarative blueprint a pair is constructed from;
//! the constants fix the fee schedule, the reserve cap and the graduation
//! threshold.

mod constants;
mod pair_config;

pub use constants::{
    DEFAULT_VIRTUAL_LIQUIDITY_BASE, DEFAULT_VIRTUAL_LIQUIDITY_QUOTE, FEE_DENOMINATOR,
    FEE_NUMERATOR, GRADUATION_THRESHOLD, LP_DECIMALS, LP_NAME, LP_SYMBOL, MAX_RESERVE, ONE_COIN,
    PRECISION, PROTOCOL_FEE_DIVISOR, TOKEN_TOTAL_SUPPLY,
};
pub use pair_config::PairConfig;
