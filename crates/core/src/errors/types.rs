//! Core failure type definitions

use crate::constants::UNREACHABLE_MESSAGE;

/// Failures raised outside the `Err` channel.
///
/// Domain failures travel as the `Err` payload of a [`crate::Result`] and
/// never appear here. `Failure` names the remaining cases: a caller
/// unwrapping an `Err` value, an invariant the type system should have ruled
/// out, and a discriminant tag that does not name a variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    /// `expect`/`unwrap` called on an `Err` value
    #[error("{message}")]
    Misuse { message: String },

    /// A code path that must be unreachable was reached
    #[error("{}", format_unreachable(.context))]
    Unreachable { context: Option<String> },

    /// Text that is neither the `ok` nor the `err` tag
    #[error("invalid result discriminant '{tag}'")]
    InvalidDiscriminant { tag: String },
}

fn format_unreachable(context: &Option<String>) -> String {
    match context {
        Some(context) if !context.is_empty() => format!("{UNREACHABLE_MESSAGE}; {context}"),
        _ => UNREACHABLE_MESSAGE.to_string(),
    }
}
