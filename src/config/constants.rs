//! Protocol constants.

use crate::domain::Amount;

/// 10¹⁸: one whole base token in raw units.
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// 10⁹: one whole native coin in raw units.
pub const ONE_COIN: u128 = 1_000_000_000;

/// Numerator of the input scaling applied by the curve (1% fee).
pub const FEE_NUMERATOR: u128 = 990;

/// Denominator of the input scaling applied by the curve.
pub const FEE_DENOMINATOR: u128 = 1_000;

/// Protocol fee on a buy is `quote_in / PROTOCOL_FEE_DIVISOR`.
pub const PROTOCOL_FEE_DIVISOR: u128 = 100;

/// Upper bound of a persisted reserve (2¹²⁸ − 1).
pub const MAX_RESERVE: Amount = Amount::new(u128::MAX);

/// Real base balance below which a buy is clamped and the pair locks.
pub const GRADUATION_THRESHOLD: Amount = Amount::new(200_000_000 * PRECISION);

/// Default quote-side virtual liquidity (150 000 coins).
pub const DEFAULT_VIRTUAL_LIQUIDITY_QUOTE: Amount = Amount::new(150_000 * ONE_COIN);

/// Default base-side virtual liquidity (200 000 000 tokens).
pub const DEFAULT_VIRTUAL_LIQUIDITY_BASE: Amount = Amount::new(200_000_000 * PRECISION);

/// Supply of a freshly deployed base token (1 000 000 000 tokens).
pub const TOKEN_TOTAL_SUPPLY: Amount = Amount::new(1_000_000_000 * PRECISION);

/// Name of the pair's LP token.
pub const LP_NAME: &str = "Duser Pump LP";

/// Symbol of the pair's LP token.
pub const LP_SYMBOL: &str = "DUSER_PUMP";

/// Decimals of the pair's LP token.
pub const LP_DECIMALS: u8 = 18;
