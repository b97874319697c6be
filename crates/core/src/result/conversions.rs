//! Conversions between the tagged `Result` and `std::result::Result`

use super::constructors::{err, ok};
use super::types::Result;

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(value: std::result::Result<T, E>) -> Self {
        match value {
            Ok(data) => ok(data),
            Err(error) => err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        value.match_with(Ok, Err)
    }
}
