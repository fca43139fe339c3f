//! Tests for the `tracing` feature.
//!
//! `process` and `iterate` emit exactly one trace event when they
//! short-circuit, carrying the combinator name and the zero-based position
//! of the failing step or element, and none when everything succeeds.

#![cfg(all(feature = "tracing", feature = "control", feature = "sequence"))]

use fungi::control::process;
use fungi::sequence::iterate;
use rstest::rstest;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct ShortCircuit {
    operation: Option<String>,
    position: Option<u64>,
}

impl Visit for ShortCircuit {
    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "operation" {
            self.operation = Some(value.to_string());
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "position" {
            self.position = Some(value);
        }
    }
}

struct EventRecorder(Arc<Mutex<Vec<ShortCircuit>>>);

impl<S: Subscriber> Layer<S> for EventRecorder {
    fn on_event(&self, event: &Event<'_>, _context: Context<'_, S>) {
        let mut visitor = ShortCircuit::default();
        event.record(&mut visitor);
        if let Ok(mut events) = self.0.lock() {
            events.push(visitor);
        }
    }
}

fn record_events(body: impl FnOnce()) -> Vec<ShortCircuit> {
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventRecorder(Arc::clone(&recorded)));
    tracing::subscriber::with_default(subscriber, body);
    recorded.lock().map(|events| events.clone()).unwrap_or_default()
}

fn short_circuit(operation: &str, position: u64) -> ShortCircuit {
    ShortCircuit {
        operation: Some(operation.to_string()),
        position: Some(position),
    }
}

#[rstest]
fn process_traces_failing_step_position() {
    let events = record_events(|| {
        let steps: [fn() -> Result<(), u8>; 3] = [|| Ok(()), || Err(1), || Err(2)];
        assert_eq!(process(steps), Err(1));
    });
    assert_eq!(events, vec![short_circuit("process", 1)]);
}

#[rstest]
fn process_traces_first_step_as_position_zero() {
    let events = record_events(|| {
        let steps: [fn() -> Result<(), u8>; 2] = [|| Err(9), || Ok(())];
        assert_eq!(process(steps), Err(9));
    });
    assert_eq!(events, vec![short_circuit("process", 0)]);
}

#[rstest]
fn process_success_is_silent() {
    let events = record_events(|| {
        let steps: [fn() -> Result<(), u8>; 2] = [|| Ok(()), || Ok(())];
        assert_eq!(process(steps), Ok(()));
    });
    assert!(events.is_empty());
}

#[rstest]
fn iterate_traces_failing_element_position() {
    let events = record_events(|| {
        let values = [1, 2, 3];
        let result = iterate(&values, |index, _| if index == 1 { Err(index) } else { Ok(()) });
        assert_eq!(result, Err(1));
    });
    assert_eq!(events, vec![short_circuit("iterate", 1)]);
}

#[rstest]
fn iterate_traces_last_element_position() {
    let events = record_events(|| {
        let values = [4, 5, 6, 7];
        let result = iterate(&values, |_, value| if *value == 7 { Err(*value) } else { Ok(()) });
        assert_eq!(result, Err(7));
    });
    assert_eq!(events, vec![short_circuit("iterate", 3)]);
}

#[rstest]
fn iterate_success_is_silent() {
    let events = record_events(|| {
        let values = [1, 2, 3];
        let result: Result<(), ()> = iterate(&values, |_, _| Ok(()));
        assert_eq!(result, Ok(()));
    });
    assert!(events.is_empty());
}
