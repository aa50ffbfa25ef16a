//! Host implementations.
//!
//! [`MemoryHost`] keeps every collaborator in memory and is what the test
//! suites and embedders without a chain drive the pair with.

mod memory;

pub use memory::{LedgerSnapshot, MemoryHost, ReentryHook};
