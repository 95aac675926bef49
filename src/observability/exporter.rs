//! Span exporter writing one JSON line per finished span.

use super::file_writer::RotatingFile;
use super::span_record::SpanRecord;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry::{Key, KeyValue};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Service name reported in every span record.
pub const SERVICE_NAME: &str = "movie-catalog";

#[derive(Debug)]
struct FileSpanExporter {
    writer: RotatingFile,
    service: String,
    stopped: bool,
}

impl FileSpanExporter {
    fn new(writer: RotatingFile) -> Self {
        Self {
            writer,
            service: SERVICE_NAME.to_string(),
            stopped: false,
        }
    }

    fn write_batch(&mut self, batch: &[SpanData]) -> ExportResult {
        if self.stopped {
            return Err(TraceError::from("exporter is shut down"));
        }
        for span in batch {
            let record = SpanRecord::from_span(&self.service, span);
            let line = serde_json::to_string(&record).map_err(|e| TraceError::from(e.to_string()))?;
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))?;
        }
        Ok(())
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        if let Some(name) = resource.get(Key::new("service.name")) {
            self.service = name.to_string();
        }
    }
}

/// Builds a tracer provider that exports each span synchronously to `trace_file`.
pub fn create_tracer_provider(trace_file: PathBuf) -> TracerProvider {
    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let exporter = FileSpanExporter::new(RotatingFile::new(trace_file));

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
