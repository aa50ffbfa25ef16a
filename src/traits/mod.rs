//! Core trait abstractions.
//!
//! - [`FromConfig`]: configuration-driven construction.
//! - [`AssetLedger`], [`EventSink`], [`Registry`], [`Host`]: the external
//!   collaborators the pair calls into.

mod from_config;
mod host;

pub use from_config::FromConfig;
pub use host::{AssetLedger, EventSink, Host, Registry};
