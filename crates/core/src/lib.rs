//! Core types for the `outcome` workspace.
//!
//! This crate provides a tagged [`Result`] value: exactly one of `Ok`, holding
//! a success payload, or `Err`, holding a failure payload. All behaviour is
//! implemented once on the enum and dispatches on the variant, so callers are
//! forced to acknowledge both outcomes.
//!
//! ## Key Components
//!
//! - **`result`**: The `Result` enum, its `ResultType` discriminant, the `ok`
//!   and `err` constructors and every combinator (`map`, `match_with`,
//!   `expect`, `unwrap`, ...).
//! - **`guard`**: Invariant guards for code paths that must be unreachable.
//! - **`errors`**: The `Failure` enum naming misuse and invariant-violation
//!   failures.
//! - **`constants`**: Tags, panic messages and logging defaults.
//! - **`functional`**: Small composition helpers used when reasoning about
//!   `map`.

pub mod constants;
pub mod errors;
pub mod functional;
pub mod guard;
pub mod result;

#[cfg(test)]
mod testing;

pub use self::{
    constants::*,
    errors::Failure,
    guard::{assert_never, unreachable},
    result::{err, ok, MatchMap, Result, ResultType},
};
