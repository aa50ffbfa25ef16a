//! Construction of a pair from its configuration.
//!
//! [`FromConfig`] is the single construction path: implementations
//! validate the configuration and return a pair in a valid initial state
//! (reserves seeded with the virtual constants, guard free, unlocked).

use crate::error::PairError;

/// Builds a value from a validated configuration.
///
/// # Errors
///
/// Returns [`PairError::InvalidConfiguration`] if the configuration is
/// invalid.
pub trait FromConfig<C>: Sized {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InvalidConfiguration`] if `config` fails
    /// validation.
    fn from_config(config: &C) -> Result<Self, PairError>;
}
