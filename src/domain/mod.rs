//! Fundamental domain value types used by the pair engine.
//!
//! Amounts, identities, reserve snapshots, the per-call context supplied
//! by the host, events and lifecycle phases.

mod address;
mod amount;
mod call_context;
mod event;
mod phase;
mod reserves;
mod rounding;

pub use address::Address;
pub use amount::Amount;
pub use call_context::CallContext;
pub use event::{Event, EVENT_DELIMITER};
pub use phase::PoolPhase;
pub use reserves::Reserves;
pub use rounding::Rounding;
