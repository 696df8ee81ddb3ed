//! In-memory capture of log events for test assertions
//!
//! `init_test_capture()` installs a process-wide subscriber once per test
//! binary. Unit tests that want isolation can instead wrap a closure in
//! `tracing::subscriber::with_default` using [`TestCapture::layer`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use maavarim_core_types::schema::{
    FIELD_COMPONENT, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_EVENT, FIELD_OP,
};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event: its level and every field rendered as text
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    pub fn duration_ms(&self) -> Option<u64> {
        self.field(FIELD_DURATION_MS)?.parse().ok()
    }

    /// `ERR_*` code of an `end_error` event
    pub fn error_code(&self) -> Option<&str> {
        self.field(FIELD_ERR_CODE)
    }

    pub fn error_kind(&self) -> Option<&str> {
        self.field(FIELD_ERR_KIND)
    }

    fn is(&self, op: &str, event: &str) -> bool {
        self.op() == Some(op) && self.event() == Some(event)
    }
}

struct FieldCollector<'a>(&'a mut BTreeMap<String, String>);

impl Visit for FieldCollector<'_> {
    // Strings arrive here unquoted; everything else goes through Debug,
    // which prints integers the same way Display does.
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

type Buffer = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer {
    buffer: Buffer,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut FieldCollector(&mut fields));
        let captured = CapturedEvent {
            level: *event.metadata().level(),
            fields,
        };
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(captured);
        }
    }
}

/// Shared handle onto the captured events
#[derive(Clone, Default)]
pub struct TestCapture {
    buffer: Buffer,
}

impl TestCapture {
    /// A layer feeding this handle
    pub fn layer<S: Subscriber>(&self) -> impl Layer<S> {
        CaptureLayer {
            buffer: Arc::clone(&self.buffer),
        }
    }

    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.buffer
            .lock()
            .map(|buffer| buffer.clone())
            .unwrap_or_default()
    }

    /// First event with the given op and event name
    pub fn find(&self, op: &str, event: &str) -> Option<CapturedEvent> {
        self.events().into_iter().find(|e| e.is(op, event))
    }

    /// # Panics
    ///
    /// Panics when no event has that op and event name.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        if self.find(op, event).is_none() {
            let seen: Vec<String> = self
                .events()
                .iter()
                .map(|e| format!("{}/{}", e.op().unwrap_or("-"), e.event().unwrap_or("-")))
                .collect();
            panic!("no {}/{} event captured; saw [{}]", op, event, seen.join(", "));
        }
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture subscriber globally (first call only) and return
/// the shared handle
///
/// Do not combine with `init()` in the same test binary.
///
/// # Example
///
/// ```
/// use maavarim_core::logging_facility::test_capture::init_test_capture;
/// use maavarim_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("clear_events");
/// capture.assert_event_exists("clear_events", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let capture = TestCapture::default();
            tracing_subscriber::registry()
                .with(capture.layer())
                .init();
            capture
        })
        .clone()
}
