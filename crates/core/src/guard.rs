//! Invariant guards for code paths that must never run
//!
//! [`assert_never`] is the type-level check: it only accepts a value of an
//! uninhabited type, so a call site compiles only when the compiler agrees the
//! path is dead. [`unreachable`] is the runtime counterpart for paths the type
//! system cannot rule out, such as dispatch on a tag read from text.
//!
//! Both terminate the calling context with a panic. Neither is ever caught
//! inside this crate.

use crate::errors::Failure;
use crate::result::ResultType;
use std::convert::Infallible;
use std::panic::Location;
use tracing::error;

/// Asserts that `value` has no remaining possible type.
///
/// ```rust
/// use outcome_core::{assert_never, ok, Result};
/// use std::convert::Infallible;
///
/// let value: Result<u8, Infallible> = ok(7);
/// let data = value.match_with(|data| data, |never| assert_never(never));
/// assert_eq!(data, 7);
/// ```
pub fn assert_never(value: Infallible) -> ! {
    match value {}
}

/// Panics with `Unreachable`, or `Unreachable; <context>` when a context is
/// given.
///
/// ```rust,should_panic
/// use outcome_core::{unreachable, ResultType};
///
/// let tag: ResultType = "ok".parse().unwrap();
/// match tag {
///     ResultType::Ok => unreachable(Some("parsed tag must be err here")),
///     ResultType::Err => {}
/// }
/// ```
#[track_caller]
pub fn unreachable(context: Option<&str>) -> ! {
    let failure = Failure::unreachable(context);
    error!(
        invariant_violation = failure.is_invariant_violation(),
        location = %Location::caller(),
        "{failure}"
    );
    panic!("{failure}")
}

/// Panics with a misuse failure whose message is exactly `message`.
#[track_caller]
pub(crate) fn misuse(message: &str) -> ! {
    let failure = Failure::misuse(message);
    error!(
        result_type = %ResultType::Err,
        invariant_violation = failure.is_invariant_violation(),
        location = %Location::caller(),
        "{failure}"
    );
    panic!("{failure}")
}
