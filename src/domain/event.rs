//! Events emitted by the pair.

use core::fmt;

use super::{Address, Amount};

/// Separator between event fields in the text encoding.
pub const EVENT_DELIMITER: &str = ";?!";

/// A domain event. Each variant maps to a name and an ordered list of
/// string fields.
///
/// # Examples
///
/// ```
/// use pump_amm::domain::{Amount, Event};
///
/// let sync = Event::Sync { reserve0: Amount::new(1), reserve1: Amount::new(2) };
/// assert_eq!(sync.to_string(), "Sync:1;?!2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event {
    /// Reserves persisted.
    Sync {
        /// New base reserve.
        reserve0: Amount,
        /// New quote reserve.
        reserve1: Amount,
    },
    /// Bootstrap LP unit issued.
    Mint {
        /// LP unit recipient.
        to: Address,
        /// Base amount accounted since the last sync.
        amount0: Amount,
        /// Quote amount accounted since the last sync.
        amount1: Amount,
    },
    /// Pool drained to `to`.
    Burn {
        /// Caller of `burn`.
        caller: Address,
        /// Base amount sent out.
        amount0: Amount,
        /// Quote amount sent out.
        amount1: Amount,
        /// Recipient.
        to: Address,
    },
    /// Trade executed.
    Swap {
        /// Caller of the trade.
        caller: Address,
        /// Implied base input.
        amount0_in: Amount,
        /// Implied quote input.
        amount1_in: Amount,
        /// Base output.
        amount0_out: Amount,
        /// Quote output.
        amount1_out: Amount,
        /// Recipient.
        to: Address,
    },
}

impl Event {
    /// Event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sync { .. } => "Sync",
            Self::Mint { .. } => "Mint",
            Self::Burn { .. } => "Burn",
            Self::Swap { .. } => "Swap",
        }
    }

    /// Ordered string fields.
    #[must_use]
    pub fn fields(&self) -> Vec<String> {
        match self {
            Self::Sync { reserve0, reserve1 } => vec![reserve0.to_string(), reserve1.to_string()],
            Self::Mint {
                to,
                amount0,
                amount1,
            } => vec![to.to_string(), amount0.to_string(), amount1.to_string()],
            Self::Burn {
                caller,
                amount0,
                amount1,
                to,
            } => vec![
                caller.to_string(),
                amount0.to_string(),
                amount1.to_string(),
                to.to_string(),
            ],
            Self::Swap {
                caller,
                amount0_in,
                amount1_in,
                amount0_out,
                amount1_out,
                to,
            } => vec![
                caller.to_string(),
                amount0_in.to_string(),
                amount1_in.to_string(),
                amount0_out.to_string(),
                amount1_out.to_string(),
                to.to_string(),
            ],
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name(), self.fields().join(EVENT_DELIMITER))
    }
}
