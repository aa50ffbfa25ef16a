//! Pricing functions over reserves.
//!
//! Pure and stateless. All divisions floor except [`get_amount_in`],
//! which rounds up so the pair never under-charges.
//!
//! # Fee
//!
//! Trades pay 1%: the input is scaled by `990 / 1000` before the
//! constant-product formula.
//!
//! ```text
//! amount_out = in·990·R_out / (R_in·1000 + in·990)
//! amount_in  = floor(R_in·out·1000 / ((R_out − out)·990)) + 1
//! ```
//!
//! # Examples
//!
//! ```
//! use pump_amm::domain::Amount;
//! use pump_amm::math::curve;
//!
//! let out = curve::get_amount_out(Amount::new(100), Amount::new(1_000), Amount::new(1_000));
//! assert_eq!(out, Ok(Amount::new(90)));
//! ```

use super::CheckedArithmetic;
use crate::config::{FEE_DENOMINATOR, FEE_NUMERATOR};
use crate::domain::{Amount, Rounding};
use crate::error::PairError;

/// Equivalent amount of the other asset at the current reserve ratio:
/// `floor(amount_a × reserve_b / reserve_a)`.
///
/// # Errors
///
/// - [`PairError::InsufficientAmount`] if `amount_a` is zero.
/// - [`PairError::InsufficientLiquidity`] if either reserve is zero.
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount, PairError> {
    if amount_a.is_zero() {
        return Err(PairError::InsufficientAmount);
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(PairError::InsufficientLiquidity);
    }
    amount_a
        .safe_mul(&reserve_b)?
        .safe_div(&reserve_a, Rounding::Down)
}

/// Maximum output for `amount_in`, after the 1% fee.
///
/// # Errors
///
/// - [`PairError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`PairError::InsufficientLiquidity`] if either reserve is zero.
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, PairError> {
    if amount_in.is_zero() {
        return Err(PairError::InsufficientInputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(PairError::InsufficientLiquidity);
    }
    let amount_in_with_fee = amount_in.safe_mul_u128(FEE_NUMERATOR)?;
    let numerator = amount_in_with_fee.safe_mul(&reserve_out)?;
    let denominator = reserve_in
        .safe_mul_u128(FEE_DENOMINATOR)?
        .safe_add(&amount_in_with_fee)?;
    numerator.safe_div(&denominator, Rounding::Down)
}

/// Minimum input that buys `amount_out`, after the 1% fee.
///
/// Computed as floor-division plus one, so the result is strictly
/// greater than the exact quotient even when it divides evenly.
///
/// # Errors
///
/// - [`PairError::InsufficientOutputAmount`] if `amount_out` is zero.
/// - [`PairError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out ≥ reserve_out`.
pub fn get_amount_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, PairError> {
    if amount_out.is_zero() {
        return Err(PairError::InsufficientOutputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(PairError::InsufficientLiquidity);
    }
    let numerator = reserve_in
        .safe_mul(&amount_out)?
        .safe_mul_u128(FEE_DENOMINATOR)?;
    let denominator = reserve_out
        .safe_sub(&amount_out)?
        .safe_mul_u128(FEE_NUMERATOR)?;
    numerator
        .safe_div(&denominator, Rounding::Down)?
        .safe_add(&Amount::ONE)
}

/// Output for `amount_in` with no fee applied:
/// `floor(amount_in × reserve_out / (reserve_in + amount_in))`.
///
/// Only used to measure the fee of a sell as
/// `get_amount_without_fee(..) − get_amount_out(..)`.
///
/// # Errors
///
/// - [`PairError::DivisionByZero`] if `reserve_in + amount_in` is zero.
/// - [`PairError::ArithmeticOverflow`] on overflow.
pub fn get_amount_without_fee(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, PairError> {
    let numerator = amount_in.safe_mul(&reserve_out)?;
    let denominator = reserve_in.safe_add(&amount_in)?;
    numerator.safe_div(&denominator, Rounding::Down)
}

/// Fee portion of a trade, in output units: what the trader would have
/// received without the fee minus what they do receive.
///
/// # Errors
///
/// Propagates the errors of [`get_amount_out`] and
/// [`get_amount_without_fee`].
pub fn fee_of(amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount, PairError> {
    let gross = get_amount_without_fee(amount_in, reserve_in, reserve_out)?;
    let net = get_amount_out(amount_in, reserve_in, reserve_out)?;
    gross.safe_sub(&net)
}
