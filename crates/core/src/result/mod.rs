//! The tagged `Result` type and its combinators

mod behavior;
mod constructors;
mod conversions;
mod types;

pub use constructors::{err, ok};
pub use types::{MatchMap, Result, ResultType};
