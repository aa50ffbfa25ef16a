//! 256-bit unsigned integer backing every on-pair quantity.

#![allow(clippy::assign_op_pattern, clippy::manual_div_ceil, clippy::ptr_offset_with_cast)]

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer (four little-endian `u64` limbs).
    pub struct U256(4);
}

impl U256 {
    /// Builds a `U256` from a `u128` in a const context.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self([value as u64, (value >> 64) as u64, 0, 0])
    }
}
