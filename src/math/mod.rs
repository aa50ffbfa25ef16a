//! Arithmetic for the pair engine.
//!
//! - [`U256`]: the wide unsigned integer behind [`Amount`](crate::domain::Amount).
//! - [`CheckedArithmetic`]: overflow-safe operations that abort the call.
//! - [`curve`]: pricing functions (quote, amount out / in, fee).

mod checked;
pub mod curve;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::U256;
