//! Serializable form of a finished span.
//!
//! Every exported span becomes one JSON object on its own line. Field names follow
//! the OTLP JSON mapping (`traceId`, `spanId`, ...) so the file can be fed to tools
//! that understand that shape, while timestamps are kept human-readable.

use chrono::{DateTime, SecondsFormat, Utc};
use opentelemetry::trace::{SpanId, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::time::SystemTime;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanRecord {
    service: String,
    trace_id: String,
    span_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_span_id: Option<String>,
    name: String,
    start: String,
    duration_us: u128,
    #[serde(skip_serializing_if = "Map::is_empty")]
    attributes: Map<String, JsonValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    events: Vec<EventRecord>,
    status: StatusRecord,
}

#[derive(Debug, Serialize)]
pub struct EventRecord {
    name: String,
    time: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    attributes: Map<String, JsonValue>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "message", rename_all = "lowercase")]
pub enum StatusRecord {
    Unset,
    Ok,
    Error(String),
}

impl SpanRecord {
    pub fn from_span(service: &str, span: &SpanData) -> Self {
        let parent_span_id = (span.parent_span_id != SpanId::INVALID)
            .then(|| format!("{:016x}", span.parent_span_id));
        let duration_us = span
            .end_time
            .duration_since(span.start_time)
            .map(|d| d.as_micros())
            .unwrap_or(0);

        Self {
            service: service.to_string(),
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id,
            name: span.name.to_string(),
            start: timestamp(span.start_time),
            duration_us,
            attributes: attribute_map(&span.attributes),
            events: span
                .events
                .iter()
                .map(|event| EventRecord {
                    name: event.name.to_string(),
                    time: timestamp(event.timestamp),
                    attributes: attribute_map(&event.attributes),
                })
                .collect(),
            status: match &span.status {
                Status::Unset => StatusRecord::Unset,
                Status::Ok => StatusRecord::Ok,
                Status::Error { description } => StatusRecord::Error(description.to_string()),
            },
        }
    }
}

/// RFC 3339 UTC timestamp with microsecond precision.
pub fn timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn attribute_map(attributes: &[KeyValue]) -> Map<String, JsonValue> {
    attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect()
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => serde_json::Number::from_f64(*f)
            .map_or_else(|| JsonValue::String(f.to_string()), JsonValue::Number),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Array(_) => JsonValue::String(value.to_string()),
    }
}
