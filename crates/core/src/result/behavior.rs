//! Shared behaviour of both `Result` variants
//!
//! Every combinator is written once against the enum and reaches the payload
//! through [`Result::match_with`] (or its borrowing form via
//! [`Result::as_ref`]). Neither variant carries logic of its own.

use super::constructors::{err, ok};
use super::types::{MatchMap, Result, ResultType};
use crate::constants::DEFAULT_UNWRAP_MESSAGE;
use crate::guard::{assert_never, misuse};
use std::convert::Infallible;
use std::fmt::Debug;

impl<T, E> Result<T, E> {
    /// Matches the result to its variant, invoking exactly one handler with
    /// the payload and returning what it returns.
    ///
    /// This is the single dispatch point for the whole type. The match is
    /// exhaustive, so adding a variant fails to compile here.
    ///
    /// ```rust
    /// use outcome_core::{err, Result};
    ///
    /// let value: Result<u32, &str> = err("boom");
    /// assert_eq!(value.match_with(|_| 0, |error| error.len()), 4);
    /// ```
    pub fn match_with<R, F, G>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Result::Ok(data) => on_ok(data),
            Result::Err(error) => on_err(error),
        }
    }

    /// [`Result::match_with`] taking both handlers as one [`MatchMap`]
    pub fn match_map<R, F, G>(self, handlers: MatchMap<F, G>) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        self.match_with(handlers.ok, handlers.err)
    }

    /// Borrows the payload, producing a `Result` of references.
    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Result::Ok(data) => ok(data),
            Result::Err(error) => err(error),
        }
    }

    /// Returns the discriminant of this value.
    pub fn result_type(&self) -> ResultType {
        self.as_ref().match_with(|_| ResultType::Ok, |_| ResultType::Err)
    }

    /// Returns `true` if the result is `Ok`.
    pub fn is_ok(&self) -> bool {
        self.result_type() == ResultType::Ok
    }

    /// Returns `true` if the result is `Err`.
    pub fn is_err(&self) -> bool {
        self.result_type() == ResultType::Err
    }

    /// The success payload, present only on `Ok`
    pub fn data(&self) -> Option<&T> {
        self.as_ref().match_with(Some, |_| None)
    }

    /// The failure payload, present only on `Err`
    pub fn error(&self) -> Option<&E> {
        self.as_ref().match_with(|_| None, Some)
    }

    /// Maps a `Result<T, E>` to `Result<U, E>` by applying `f` to a contained
    /// `Ok` value, leaving an `Err` value untouched. `f` is never called on
    /// `Err`. A panic inside `f` propagates to the caller.
    ///
    /// ```rust
    /// use outcome_core::{ok, Result};
    ///
    /// let value: Result<i32, String> = ok(1);
    /// assert_eq!(value.map(|n| n + 1).unwrap(), 2);
    /// ```
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.match_with(|data| ok(f(data)), err)
    }

    /// Returns the contained `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` if the value is an `Err`.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        self.expect_with(|_| message.to_owned())
    }

    /// Returns the contained `Ok` value, building the panic message from the
    /// error only when one is needed.
    ///
    /// # Panics
    ///
    /// Panics with the message returned by `describe` if the value is an `Err`.
    #[track_caller]
    pub fn expect_with<F>(self, describe: F) -> T
    where
        F: FnOnce(&E) -> String,
    {
        // Matched inline: `#[track_caller]` does not reach through closures,
        // and the panic must point at the caller.
        match self {
            Result::Ok(data) => data,
            Result::Err(error) => misuse(&describe(&error)),
        }
    }

    /// Returns the contained `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with [`DEFAULT_UNWRAP_MESSAGE`] if the value is an `Err`. The
    /// error itself is not described; see [`Result::unwrap_verbose`].
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.expect(DEFAULT_UNWRAP_MESSAGE)
    }
}

impl<T, E: Debug> Result<T, E> {
    /// Returns the contained `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with [`DEFAULT_UNWRAP_MESSAGE`] followed by the `Debug` form of
    /// the error if the value is an `Err`.
    #[track_caller]
    pub fn unwrap_verbose(self) -> T {
        self.expect_with(|error| format!("{DEFAULT_UNWRAP_MESSAGE}: {error:?}"))
    }
}

impl<T> Result<T, Infallible> {
    /// Returns the `Ok` payload of a result that cannot be `Err`.
    pub fn into_ok(self) -> T {
        self.match_with(|data| data, |never| assert_never(never))
    }
}

impl<E> Result<Infallible, E> {
    /// Returns the `Err` payload of a result that cannot be `Ok`.
    pub fn into_err(self) -> E {
        self.match_with(|never| assert_never(never), |error| error)
    }
}
