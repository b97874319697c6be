use super::types::Result;

/// Creates a new `Ok` result wrapping `data` verbatim.
///
/// The error type is left to inference at the call site.
///
/// ```rust
/// use outcome_core::{ok, Result};
///
/// let value: Result<u32, String> = ok(123);
/// assert!(value.is_ok());
/// ```
pub const fn ok<T, E>(data: T) -> Result<T, E> {
    Result::Ok(data)
}

/// Creates a new `Err` result wrapping `error` verbatim.
///
/// ```rust
/// use outcome_core::{err, Result};
///
/// let value: Result<u32, &str> = err("boom");
/// assert!(value.is_err());
/// ```
pub const fn err<T, E>(error: E) -> Result<T, E> {
    Result::Err(error)
}
