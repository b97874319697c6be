//! Result type definitions

use crate::constants::{ERR_TAG, OK_TAG};
use crate::errors::Failure;
use std::fmt;
use std::str::FromStr;

/// # `Result<T, E>`
///
/// `Result` represents either success (`Ok`) or failure (`Err`). The variant
/// and its payload are fixed at construction; every operation consumes or
/// borrows the value and never rewrites it.
///
/// Values are created through [`crate::ok`] and [`crate::err`] and consumed
/// through the combinators, all of which dispatch through
/// [`Result::match_with`].
///
/// Trait impls are derived, so `Clone`, `Debug`, `PartialEq` and friends are
/// available exactly when both payload types provide them. Likewise the value
/// is `Send`/`Sync` whenever `T` and `E` are.
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Result<T, E> {
    /// Success, holding the `data` payload
    Ok(T),
    /// Failure, holding the `error` payload
    Err(E),
}

/// The discriminant of a [`Result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResultType {
    Ok,
    Err,
}

impl ResultType {
    /// The tag string of this discriminant
    pub const fn as_str(self) -> &'static str {
        match self {
            ResultType::Ok => OK_TAG,
            ResultType::Err => ERR_TAG,
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultType {
    type Err = Failure;

    fn from_str(s: &str) -> std::result::Result<Self, Failure> {
        match s {
            OK_TAG => Ok(ResultType::Ok),
            ERR_TAG => Ok(ResultType::Err),
            other => Err(Failure::invalid_discriminant(other)),
        }
    }
}

/// Handler pair for [`Result::match_map`].
///
/// ```rust
/// use outcome_core::{err, MatchMap, Result};
///
/// let value: Result<u32, &str> = err("boom");
/// let len = value.match_map(MatchMap {
///     ok: |_: u32| 0,
///     err: |error: &str| error.len(),
/// });
/// assert_eq!(len, 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MatchMap<OkFn, ErrFn> {
    /// Invoked with the payload of an `Ok` value
    pub ok: OkFn,
    /// Invoked with the payload of an `Err` value
    pub err: ErrFn,
}
