//! Rounding direction for integer division.

/// Direction applied when an integer division leaves a remainder.
///
/// Curve math floors everything except the required-input computation,
/// which rounds up so the pair never under-charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Towards positive infinity (ceiling).
    Up,
    /// Towards zero (floor).
    Down,
}
