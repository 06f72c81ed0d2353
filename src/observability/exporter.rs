//! Span exporter writing [`SpanRecord`] lines.

use super::record::SpanRecord;
use super::rotation::RotatingWriter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry::Key;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes every exported span as one JSON line.
#[derive(Debug)]
struct FileSpanExporter {
    writer: RotatingWriter,
    /// `service.name` of the resource, stamped on each record.
    service: String,
    is_shutdown: bool,
}

impl FileSpanExporter {
    fn new(file_path: PathBuf, resource: &Resource) -> Self {
        Self {
            writer: RotatingWriter::new(file_path),
            service: service_name(resource),
            is_shutdown: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> std::result::Result<(), TraceError> {
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

fn service_name(resource: &Resource) -> String {
    resource
        .get(Key::from_static_str("service.name"))
        .map_or_else(|| "unknown".to_string(), |value| value.to_string())
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            self.write_batch(&batch)
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, res: &Resource) {
        self.service = service_name(res);
    }
}

/// Builds a tracer provider that exports each span as soon as it ends.
#[must_use]
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, &resource);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Span as _, Tracer as _, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn finished_spans_become_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let resource = Resource::new(vec![KeyValue::new("service.name", "zallery-test")]);
        let provider = create_tracer_provider(path.clone(), resource);
        let tracer = provider.tracer("test");

        let mut span = tracer.start("visible_set");
        span.set_attribute(KeyValue::new("item_count", 3_i64));
        span.end();

        let contents = std::fs::read_to_string(&path).unwrap();
        let line = contents.lines().next().unwrap();
        let json: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(json["service"], "zallery-test");
        assert_eq!(json["name"], "visible_set");
        assert_eq!(json["attributes"]["item_count"], 3);
        assert_eq!(json["trace_id"].as_str().map(str::len), Some(32));
    }
}
