#![forbid(unsafe_code)]
#![cfg(feature = "tracing")]

//! Tracing integration tests for the measurement and layout passes.
//!
//!   cargo test -p flowrow-layout --features tracing --test tracing_spans

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use flowrow_layout::{Container, FlowConfig, FlowEngine, FlowItem};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured span with its fields.
#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

/// A tracing Layer that records new spans and event messages.
struct SpanCapture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<String>>>,
}

struct CaptureHandle {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<String>>>,
}

impl CaptureHandle {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

/// Visitor that extracts fields as strings.
struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for SpanCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        if let Some((_, message)) = visitor.0.into_iter().find(|(name, _)| name == "message") {
            self.events.lock().unwrap().push(message);
        }
    }
}

fn with_captured<F>(f: F) -> CaptureHandle
where
    F: FnOnce(),
{
    let spans = Arc::new(Mutex::new(Vec::new()));
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = SpanCapture {
        spans: spans.clone(),
        events: events.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    CaptureHandle { spans, events }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn measure_and_layout_open_spans() {
    let handle = with_captured(|| {
        let mut engine = FlowEngine::new(Some(FlowConfig::default().spacing_horizontal(10)));
        engine.measure(&[FlowItem::new(40, 10); 3], &Container::natural(100));
        engine.layout();
    });

    let spans = handle.spans();
    let wrap = spans
        .iter()
        .find(|s| s.name == "flow_wrap")
        .expect("flow_wrap span recorded");
    assert_eq!(wrap.fields.get("items").map(String::as_str), Some("3"));
    assert_eq!(wrap.fields.get("wrap_width").map(String::as_str), Some("100"));

    let place = spans
        .iter()
        .find(|s| s.name == "flow_place")
        .expect("flow_place span recorded");
    assert_eq!(place.fields.get("rows").map(String::as_str), Some("2"));
}

#[test]
fn measure_emits_summary_events() {
    let handle = with_captured(|| {
        let mut engine = FlowEngine::new(Some(FlowConfig::default()));
        engine.measure(&[FlowItem::new(10, 10)], &Container::natural(100));
    });

    let events = handle.events();
    assert!(events.iter().any(|m| m.contains("wrapped flow items")));
    assert!(events.iter().any(|m| m.contains("measured flow container")));
}

#[test]
fn layout_without_measure_opens_no_place_span() {
    let handle = with_captured(|| {
        let mut engine = FlowEngine::new(Some(FlowConfig::default()));
        engine.layout();
    });
    assert!(handle.spans().iter().all(|s| s.name != "flow_place"));
}

#[test]
fn malformed_attributes_warn() {
    let handle = with_captured(|| {
        let _engine = FlowEngine::from_attrs_with(|key| {
            (key == "flowGravity").then(|| "diagonal".to_string())
        });
    });
    assert!(
        handle
            .events()
            .iter()
            .any(|m| m.contains("ignoring malformed flow attributes"))
    );
}
