//! Builder methods for creating failures

use super::types::Failure;

impl Failure {
    /// Create a misuse failure carrying the caller's message
    #[must_use]
    pub fn misuse(message: impl Into<String>) -> Self {
        Failure::Misuse {
            message: message.into(),
        }
    }

    /// Create an invariant-violation failure with optional context
    #[must_use]
    pub fn unreachable(context: Option<&str>) -> Self {
        Failure::Unreachable {
            context: context.map(str::to_owned),
        }
    }

    /// Create an invalid discriminant failure
    #[must_use]
    pub fn invalid_discriminant(tag: impl Into<String>) -> Self {
        Failure::InvalidDiscriminant { tag: tag.into() }
    }

    /// Check if this failure signals a bug rather than caller misuse
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Failure::Unreachable { .. })
    }
}
