//! Shared utilities for consumers of `outcome-core`
//!
//! Currently this holds the tracing setup used by applications and test
//! harnesses that want to see the events `outcome-core` emits before a
//! misuse or invariant-violation panic.

pub mod tracing;

pub use self::tracing::{env_filter, init, init_with, outcome_event, InitError};
