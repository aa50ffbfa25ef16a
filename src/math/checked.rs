//! Checked arithmetic for [`Amount`].
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic that
//! returns [`Result<Amount, PairError>`](crate::error::PairError) instead
//! of panicking, so a failed step aborts the whole entry point through `?`.
//!
//! # Examples
//!
//! ```
//! use pump_amm::domain::{Amount, Rounding};
//! use pump_amm::math::CheckedArithmetic;
//!
//! let r = Amount::new(100)
//!     .safe_mul(&Amount::new(990))
//!     .and_then(|v| v.safe_div(&Amount::new(1_000), Rounding::Down));
//! assert_eq!(r, Ok(Amount::new(99)));
//! ```

use crate::domain::{Amount, Rounding};
use crate::error::PairError;

/// Fallible arithmetic over 256-bit amounts.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::ArithmeticOverflow`] past 2²⁵⁶ − 1.
    fn safe_add(&self, other: &Self) -> Result<Self, PairError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::ArithmeticUnderflow`] if the result would be
    /// negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, PairError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::ArithmeticOverflow`] past 2²⁵⁶ − 1.
    fn safe_mul(&self, other: &Self) -> Result<Self, PairError>;

    /// Checked division with explicit [`Rounding`].
    ///
    /// # Errors
    ///
    /// Returns [`PairError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, PairError>;

    /// Multiplies by a small constant.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::ArithmeticOverflow`] past 2²⁵⁶ − 1.
    fn safe_mul_u128(&self, factor: u128) -> Result<Self, PairError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, PairError> {
        self.checked_add(other)
            .ok_or(PairError::ArithmeticOverflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, PairError> {
        self.checked_sub(other)
            .ok_or(PairError::ArithmeticUnderflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, PairError> {
        self.checked_mul(other)
            .ok_or(PairError::ArithmeticOverflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, PairError> {
        self.checked_div(other, rounding)
            .ok_or(PairError::DivisionByZero)
    }

    #[inline]
    fn safe_mul_u128(&self, factor: u128) -> Result<Self, PairError> {
        self.checked_mul(&Amount::new(factor))
            .ok_or(PairError::ArithmeticOverflow("amount scaling overflow"))
    }
}
