//! Configuration for a bonding-curve pair.

use core::fmt;

use super::constants::{
    DEFAULT_VIRTUAL_LIQUIDITY_BASE, DEFAULT_VIRTUAL_LIQUIDITY_QUOTE, GRADUATION_THRESHOLD,
    MAX_RESERVE,
};
use crate::domain::{Address, Amount};
use crate::error::PairError;

/// Immutable parameters of a pair, fixed at construction.
///
/// # Validation
///
/// - `token0`, `token1` and the pair's own `address` are pairwise distinct.
/// - Both virtual-liquidity constants are non-zero and `≤ MAX_RESERVE`.
///
/// # Examples
///
/// ```
/// use pump_amm::config::PairConfig;
/// use pump_amm::domain::{Address, Amount};
///
/// let Ok(cfg) = PairConfig::new(
///     Address::from_bytes([9u8; 32]),
///     Address::from_bytes([1u8; 32]),
///     Address::from_bytes([2u8; 32]),
///     Address::from_bytes([3u8; 32]),
///     Amount::new(1_000),
///     Amount::new(1_000),
/// ) else {
///     panic!("valid config");
/// };
/// assert_eq!(cfg.virtual_liquidity_base(), Amount::new(1_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairConfig {
    address: Address,
    token0: Address,
    token1: Address,
    factory: Address,
    virtual_liquidity_base: Amount,
    virtual_liquidity_quote: Amount,
    graduation_threshold: Amount,
}

impl PairConfig {
    /// Creates a validated configuration with the default graduation
    /// threshold.
    ///
    /// `token0` is the base asset, `token1` the wrapped quote asset.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InvalidConfiguration`] if validation fails.
    pub fn new(
        address: Address,
        token0: Address,
        token1: Address,
        factory: Address,
        virtual_liquidity_base: Amount,
        virtual_liquidity_quote: Amount,
    ) -> Result<Self, PairError> {
        let config = Self {
            address,
            token0,
            token1,
            factory,
            virtual_liquidity_base,
            virtual_liquidity_quote,
            graduation_threshold: GRADUATION_THRESHOLD,
        };
        config.validate()?;
        Ok(config)
    }

    /// Configuration with the protocol's default virtual liquidity.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InvalidConfiguration`] if validation fails.
    pub fn with_defaults(
        address: Address,
        token0: Address,
        token1: Address,
        factory: Address,
    ) -> Result<Self, PairError> {
        Self::new(
            address,
            token0,
            token1,
            factory,
            DEFAULT_VIRTUAL_LIQUIDITY_BASE,
            DEFAULT_VIRTUAL_LIQUIDITY_QUOTE,
        )
    }

    /// Overrides the graduation threshold.
    #[must_use]
    pub fn with_graduation_threshold(mut self, threshold: Amount) -> Self {
        self.graduation_threshold = threshold;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::InvalidConfiguration`] naming the broken rule.
    pub fn validate(&self) -> Result<(), PairError> {
        if self.token0 == self.token1 {
            return Err(PairError::InvalidConfiguration("identical token addresses"));
        }
        if self.address == self.token0 || self.address == self.token1 {
            return Err(PairError::InvalidConfiguration(
                "pair address collides with a token",
            ));
        }
        if self.token0.is_zero() || self.token1.is_zero() {
            return Err(PairError::InvalidConfiguration("zero token address"));
        }
        if self.virtual_liquidity_base.is_zero() || self.virtual_liquidity_quote.is_zero() {
            return Err(PairError::InvalidConfiguration("virtual liquidity must be positive"));
        }
        if self.virtual_liquidity_base > MAX_RESERVE || self.virtual_liquidity_quote > MAX_RESERVE {
            return Err(PairError::InvalidConfiguration(
                "virtual liquidity exceeds the reserve cap",
            ));
        }
        Ok(())
    }

    /// The pair's own identity.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Base asset.
    #[must_use]
    pub const fn token0(&self) -> Address {
        self.token0
    }

    /// Wrapped quote asset.
    #[must_use]
    pub const fn token1(&self) -> Address {
        self.token1
    }

    /// Registry that created the pair.
    #[must_use]
    pub const fn factory(&self) -> Address {
        self.factory
    }

    /// Base-side virtual liquidity.
    pub const fn virtual_liquidity_base(&self) -> Amount {
        self.virtual_liquidity_base
    }

    /// Quote-side virtual liquidity.
    pub const fn virtual_liquidity_quote(&self) -> Amount {
        self.virtual_liquidity_quote
    }

    /// Real base balance at which the pair graduates.
    pub const fn graduation_threshold(&self) -> Amount {
        self.graduation_threshold
    }
}

impl fmt::Display for PairConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PairConfig(pair={}, token0={}, token1={}, vl0={}, vl1={}, threshold={})",
            self.address,
            self.token0,
            self.token1,
            self.virtual_liquidity_base,
            self.virtual_liquidity_quote,
            self.graduation_threshold
        )
    }
}
