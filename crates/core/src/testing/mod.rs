//! Property-based testing utilities for the `Result` combinators
//!
//! Generators produce arbitrary `Ok` and `Err` values; the properties check
//! the predicate, dispatch, `map` and unwrap laws against them.

use crate::{err, ok, Result};
use proptest::prelude::*;
use std::any::Any;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Extracts the message of a caught panic payload
pub(crate) fn panic_message(payload: Box<dyn Any + Send>) -> String {
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_default()
}

/// A tracing event captured by [`EventRecorder`]
#[derive(Debug, Clone)]
pub(crate) struct RecordedEvent {
    pub level: Level,
    pub fields: Vec<(String, String)>,
}

impl RecordedEvent {
    /// The recorded value of `name`, formatted with `Debug`
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Layer collecting every event it sees
#[derive(Clone, Default)]
pub(crate) struct EventRecorder {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

struct FieldVisitor<'a>(&'a mut Vec<(String, String)>);

impl Visit for FieldVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

impl<S: Subscriber> Layer<S> for EventRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Vec::new();
        event.record(&mut FieldVisitor(&mut fields));
        if let Ok(mut events) = self.events.lock() {
            events.push(RecordedEvent {
                level: *event.metadata().level(),
                fields,
            });
        }
    }
}

/// Runs `f` with a thread-local subscriber and returns the events it emitted
pub(crate) fn record_events<R>(f: impl FnOnce() -> R) -> (R, Vec<RecordedEvent>) {
    let recorder = EventRecorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let output = tracing::subscriber::with_default(subscriber, f);
    let events = recorder
        .events
        .lock()
        .map(|events| events.clone())
        .unwrap_or_default();
    (output, events)
}

/// Property-based test generators
pub mod generators {
    use super::*;

    /// Generate `Ok` values
    pub fn ok_value() -> impl Strategy<Value = Result<i64, String>> {
        any::<i64>().prop_map(ok::<i64, String>)
    }

    /// Generate `Err` values
    pub fn err_value() -> impl Strategy<Value = Result<i64, String>> {
        ".{0,32}".prop_map(err::<i64, String>)
    }

    /// Generate values of either variant
    pub fn any_result() -> impl Strategy<Value = Result<i64, String>> {
        prop_oneof![ok_value(), err_value()]
    }
}

#[cfg(test)]
mod property_tests {
    use super::generators::*;
    use super::*;
    use crate::constants::DEFAULT_UNWRAP_MESSAGE;
    use crate::functional::{compose, identity};
    use crate::ResultType;
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    proptest! {
        /// Exactly one predicate holds for every value
        #[test]
        fn predicates_are_mutually_exclusive(value in any_result()) {
            prop_assert_ne!(value.is_ok(), value.is_err());
            prop_assert_eq!(value.is_ok(), value.result_type() == ResultType::Ok);
        }

        #[test]
        fn ok_values_report_ok(x in any::<i64>()) {
            let value: Result<i64, String> = ok(x);
            prop_assert!(value.is_ok());
            prop_assert!(!value.is_err());
            prop_assert_eq!(value.data(), Some(&x));
        }

        #[test]
        fn err_values_report_err(e in ".{0,32}") {
            let value: Result<i64, String> = err(e.clone());
            prop_assert!(value.is_err());
            prop_assert!(!value.is_ok());
            prop_assert_eq!(value.error(), Some(&e));
        }

        /// `match_with` on `Ok` equals the `ok` handler, and never runs the other
        #[test]
        fn match_dispatches_to_ok_handler(x in any::<i64>()) {
            let wrong = Cell::new(false);
            let value: Result<i64, String> = ok(x);
            let out = value.match_with(|data| data.wrapping_mul(3), |_| {
                wrong.set(true);
                0
            });
            prop_assert_eq!(out, x.wrapping_mul(3));
            prop_assert!(!wrong.get());
        }

        #[test]
        fn match_dispatches_to_err_handler(e in ".{0,32}") {
            let wrong = Cell::new(false);
            let value: Result<i64, String> = err(e.clone());
            let out = value.match_with(|_| {
                wrong.set(true);
                usize::MAX
            }, |error| error.len());
            prop_assert_eq!(out, e.len());
            prop_assert!(!wrong.get());
        }

        /// Identity law
        #[test]
        fn map_identity_is_noop(value in any_result()) {
            prop_assert_eq!(value.clone().map(identity), value);
        }

        /// Composition law
        #[test]
        fn map_composes(value in any_result(), a in any::<i64>(), b in any::<i64>()) {
            let f = move |x: i64| x.wrapping_add(a);
            let g = move |x: i64| x.wrapping_mul(b);
            prop_assert_eq!(value.clone().map(f).map(g), value.map(compose(g, f)));
        }

        #[test]
        fn map_on_err_never_calls_function(e in ".{0,32}") {
            let called = Cell::new(false);
            let value: Result<i64, String> = err(e.clone());
            let mapped = value.map(|x| {
                called.set(true);
                x
            });
            prop_assert_eq!(mapped, err(e));
            prop_assert!(!called.get());
        }

        #[test]
        fn unwrap_and_expect_return_ok_payload(x in any::<i64>(), message in ".{0,32}") {
            let value: Result<i64, String> = ok(x);
            prop_assert_eq!(value.clone().unwrap(), x);
            prop_assert_eq!(value.expect(&message), x);
        }

        #[test]
        fn expect_on_err_panics_with_message(e in ".{0,32}", message in ".{1,32}") {
            let value: Result<i64, String> = err(e);
            let payload = catch_unwind(AssertUnwindSafe(|| value.expect(&message)))
                .expect_err("expect on Err must panic");
            prop_assert_eq!(panic_message(payload), message);
        }

        #[test]
        fn unwrap_on_err_panics_with_default_message(e in ".{0,32}") {
            let value: Result<i64, String> = err(e);
            let payload = catch_unwind(AssertUnwindSafe(|| value.unwrap()))
                .expect_err("unwrap on Err must panic");
            prop_assert_eq!(panic_message(payload), DEFAULT_UNWRAP_MESSAGE);
        }

        /// Round trip through `std::result::Result`
        #[test]
        fn std_conversion_preserves_value(value in any_result()) {
            let std_value: std::result::Result<i64, String> = value.clone().into();
            prop_assert_eq!(std_value.is_ok(), value.is_ok());
            prop_assert_eq!(Result::from(std_value), value);
        }
    }
}
