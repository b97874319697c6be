use outcome_core::{Result, ResultType, DEFAULT_LOG_FILTER, LOG_ENV_VAR};
use std::fmt::Display;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use ::tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

/// Error returned when the subscriber cannot be built or installed
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Initialize the tracing system
///
/// The filter comes from `OUTCOME_LOG`, then `RUST_LOG`, then the
/// `warn` default (see [`env_filter`]). Events go to stderr in compact form,
/// with ANSI colours only when stderr is a terminal.
///
/// Fails instead of panicking when a global subscriber is already installed.
pub fn init() -> std::result::Result<(), InitError> {
    install(env_filter()?)
}

/// Initialize the tracing system with explicit filter directives
pub fn init_with(directives: &str) -> std::result::Result<(), InitError> {
    install(EnvFilter::try_new(directives)?)
}

/// Build the filter from the environment
///
/// An unset or unparsable `OUTCOME_LOG` falls through to `RUST_LOG`, and an
/// unset or unparsable `RUST_LOG` falls through to [`DEFAULT_LOG_FILTER`].
pub fn env_filter() -> std::result::Result<EnvFilter, InitError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }

    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .map_err(Into::into)
}

fn install(filter: EnvFilter) -> std::result::Result<(), InitError> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Emit a structured event describing how an operation turned out
///
/// `Ok` values are logged at debug level, `Err` values at warn level with
/// the error's `Display` form. Returns the discriminant that was logged.
pub fn outcome_event<T, E: Display>(operation: &str, result: &Result<T, E>) -> ResultType {
    let result_type = result.result_type();
    result.as_ref().match_with(
        |_| {
            debug!(
                operation = %operation,
                result_type = %result_type,
                "operation_succeeded"
            )
        },
        |error| {
            warn!(
                operation = %operation,
                result_type = %result_type,
                error = %error,
                "operation_failed"
            )
        },
    );
    result_type
}
