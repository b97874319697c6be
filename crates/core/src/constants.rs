/// Constants used throughout the outcome workspace
// Discriminant tags
pub const OK_TAG: &str = "ok";
pub const ERR_TAG: &str = "err";

// Panic messages
pub const DEFAULT_UNWRAP_MESSAGE: &str = "called `Result::unwrap()` on an `Err` value";
pub const UNREACHABLE_MESSAGE: &str = "Unreachable";

// Logging
pub const LOG_ENV_VAR: &str = "OUTCOME_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";
