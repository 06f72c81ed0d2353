//! JSON line layout of an exported span.
//!
//! ```json
//! {"service":"zallery","trace_id":"4bf9…","span_id":"00f0…","parent_span_id":null,
//!  "name":"handle_event","kind":"internal","start":"2024-05-01T10:00:00.000120Z",
//!  "end":"2024-05-01T10:00:00.000480Z","duration_us":360,
//!  "attributes":{"event_type":"FocusDown"},"events":[],"status":"unset"}
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use opentelemetry::trace::{SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::time::SystemTime;

/// One exported span.
#[derive(Debug, Clone, Serialize)]
pub struct SpanRecord {
    pub service: String,
    pub trace_id: String,
    pub span_id: String,
    pub parent_span_id: Option<String>,
    pub name: String,
    pub kind: &'static str,
    pub start: String,
    pub end: String,
    pub duration_us: u128,
    pub attributes: BTreeMap<String, JsonValue>,
    pub events: Vec<EventRecord>,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

/// A `tracing` event recorded inside a span.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub time: String,
    pub name: String,
    pub attributes: BTreeMap<String, JsonValue>,
}

impl SpanRecord {
    #[must_use]
    pub fn from_span(service: &str, span: &SpanData) -> Self {
        let (status, status_message) = match &span.status {
            Status::Unset => ("unset", None),
            Status::Ok => ("ok", None),
            Status::Error { description } => ("error", Some(description.to_string())),
        };

        Self {
            service: service.to_string(),
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id: (span.parent_span_id != SpanId::INVALID)
                .then(|| format!("{:016x}", span.parent_span_id)),
            name: span.name.to_string(),
            kind: kind_name(&span.span_kind),
            start: timestamp(span.start_time),
            end: timestamp(span.end_time),
            duration_us: span
                .end_time
                .duration_since(span.start_time)
                .map_or(0, |d| d.as_micros()),
            attributes: attributes(&span.attributes),
            events: span
                .events
                .iter()
                .map(|event| EventRecord {
                    time: timestamp(event.timestamp),
                    name: event.name.to_string(),
                    attributes: attributes(&event.attributes),
                })
                .collect(),
            status,
            status_message,
        }
    }
}

/// RFC 3339 UTC timestamp with microsecond precision.
#[must_use]
pub fn timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}

const fn kind_name(kind: &SpanKind) -> &'static str {
    match kind {
        SpanKind::Internal => "internal",
        SpanKind::Server => "server",
        SpanKind::Client => "client",
        SpanKind::Producer => "producer",
        SpanKind::Consumer => "consumer",
    }
}

fn attributes(pairs: &[KeyValue]) -> BTreeMap<String, JsonValue> {
    pairs
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect()
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Array(_) => JsonValue::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn timestamps_are_rfc3339_utc() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_micros(1_714_557_600_000_120);
        assert_eq!(timestamp(time), "2024-05-01T10:00:00.000120Z");
    }

    #[test]
    fn attribute_values_keep_their_json_type() {
        assert_eq!(attribute_value(&Value::I64(8)), JsonValue::from(8));
        assert_eq!(attribute_value(&Value::Bool(true)), JsonValue::Bool(true));
        assert_eq!(attribute_value(&Value::from("2023")), JsonValue::from("2023"));
    }
}
