//! Worker thread implementation for catalog loading.
//!
//! Catalog files are read and decoded here, off the plugin's render loop.
//! The worker only decodes and validates; the plugin decides what to do with
//! the result.

use crate::catalog::{CatalogSource, FileCatalog};
use crate::domain::error::Result;
use crate::infrastructure::paths;
use crate::worker::{WorkerMessage, WorkerResponse};
use crate::Config;
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// Runs on a thread spawned by Zellij. It holds nothing between messages:
/// every request names its file and is read from scratch.
#[derive(Serialize, Deserialize, Default)]
pub struct CatalogWorker;

impl CatalogWorker {
    /// Standardizes logging and error mapping for an operation result.
    fn handle_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "worker operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "worker operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    fn handle_load_catalog(path: &str) -> WorkerResponse {
        let source = FileCatalog::new(paths::expand_tilde(path));
        let description = paths::strip_host_prefix(&source.describe());

        Self::handle_result("load catalog", source.load(), |catalog| {
            tracing::debug!(item_count = catalog.len(), source = %description, "catalog loaded");
            WorkerResponse::CatalogLoaded {
                source: description,
                items: catalog.items().to_vec(),
            }
        })
    }

    /// Reconstructs the plugin-side span context carried by `message` so
    /// worker spans join the same trace.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the response.
    pub fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadCatalog { path, .. } => Self::handle_load_catalog(&path),
        }
    }

    /// Decodes a JSON request, logging and dropping malformed ones; there is
    /// nobody to report them to.
    fn decode(payload: &str) -> Option<WorkerMessage> {
        serde_json::from_str(payload)
            .map_err(|e| tracing::warn!(error = %e, "failed to deserialize worker message"))
            .ok()
    }

    fn encode(response: &WorkerResponse) -> Option<String> {
        serde_json::to_string(response)
            .map_err(|e| tracing::warn!(error = %e, "failed to serialize worker response"))
            .ok()
    }

    /// Decodes a JSON payload, handles it and encodes the response.
    ///
    /// Returns `None` when either side fails to (de)serialize.
    pub fn handle_payload(&self, payload: &str) -> Option<String> {
        let response = self.handle_message(Self::decode(payload)?);
        Self::encode(&response)
    }
}

/// Tracing configuration for the worker thread: the plugin's defaults with
/// the span filter the request carries.
fn worker_config(message: &WorkerMessage) -> Config {
    Config {
        trace_level: message.trace_level().map(String::from),
        ..Config::default()
    }
}

static WORKER_TRACING: std::sync::Once = std::sync::Once::new();

impl ZellijWorker<'_> for CatalogWorker {
    /// Zellij entry point: `message` names the reply channel, `payload` is a
    /// JSON [`WorkerMessage`].
    ///
    /// The subscriber is installed on the first request, with that
    /// request's span filter; it writes to the same span file as the plugin.
    fn on_message(&mut self, message: String, payload: String) {
        let Some(request) = Self::decode(&payload) else {
            return;
        };
        WORKER_TRACING.call_once(|| crate::observability::init_tracing(&worker_config(&request)));

        let response = self.handle_message(request);
        if let Some(payload) = Self::encode(&response) {
            post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, Write};

    fn catalog_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn load(worker: &CatalogWorker, path: &str) -> WorkerResponse {
        worker.handle_message(WorkerMessage::load_catalog(path.to_string(), None))
    }

    #[test]
    fn loads_items_from_file() {
        let file = catalog_file(
            r#"[{"id":1,"name":"Meera Iyer","year":2025,"image":"m.jpg","description":"Debate"}]"#,
        );
        let path = file.path().to_str().unwrap();
        let worker = CatalogWorker;

        match load(&worker, path) {
            WorkerResponse::CatalogLoaded { source, items } => {
                assert_eq!(source, path);
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].name, "Meera Iyer");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn duplicate_ids_are_reported_as_errors() {
        let file = catalog_file(
            r#"{"items":[
                {"id":1,"name":"A","year":2025,"image":"","description":""},
                {"id":1,"name":"B","year":2025,"image":"","description":""}
            ]}"#,
        );
        let response = load(&CatalogWorker, file.path().to_str().unwrap());
        assert!(matches!(
            response,
            WorkerResponse::Error { ref message } if message.contains("duplicate item id 1")
        ));
    }

    #[test]
    fn every_request_reads_the_file_again() {
        let mut file = catalog_file("[]");
        let path = file.path().to_str().unwrap().to_string();
        let worker = CatalogWorker;

        assert!(matches!(
            load(&worker, &path),
            WorkerResponse::CatalogLoaded { ref items, .. } if items.is_empty()
        ));

        file.as_file_mut().set_len(0).unwrap();
        file.as_file_mut().rewind().unwrap();
        file.write_all(br#"[{"id":9,"name":"Z","year":2020,"image":"","description":""}]"#).unwrap();

        assert!(matches!(
            load(&worker, &path),
            WorkerResponse::CatalogLoaded { ref items, .. } if items.len() == 1
        ));
    }

    #[test]
    fn payload_round_trip() {
        let worker = CatalogWorker;
        let request =
            serde_json::to_string(&WorkerMessage::load_catalog("/nonexistent/items.json".to_string(), None)).unwrap();
        let reply = worker.handle_payload(&request).unwrap();
        let response: WorkerResponse = serde_json::from_str(&reply).unwrap();
        assert!(matches!(response, WorkerResponse::Error { .. }));
        assert_eq!(worker.handle_payload("not json"), None);
    }

    #[test]
    fn worker_tracing_uses_the_requested_level() {
        let message = WorkerMessage::load_catalog("/host/items.json".to_string(), Some("zallery=trace".to_string()));
        let config = worker_config(&message);
        assert_eq!(config.trace_level.as_deref(), Some("zallery=trace"));
        assert_eq!(config.catalog_file, None);

        let plain = worker_config(&WorkerMessage::load_catalog("/host/items.json".to_string(), None));
        assert_eq!(plain.trace_level, None);
    }
}
