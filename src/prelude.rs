//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pump_amm::prelude::*;
//! ```

pub use crate::config::{PairConfig, GRADUATION_THRESHOLD, TOKEN_TOTAL_SUPPLY};
pub use crate::domain::{Address, Amount, CallContext, Event, PoolPhase, Reserves, Rounding};
pub use crate::error::{PairError, Result};
pub use crate::host::MemoryHost;
pub use crate::math::{curve, CheckedArithmetic};
pub use crate::pair::{GuardStatus, Pair};
pub use crate::traits::{AssetLedger, EventSink, FromConfig, Host, Registry};
