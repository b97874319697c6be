//! Failure taxonomy for misuse and invariant violations

mod builders;
mod types;

pub use types::Failure;
