//! Subscriber setup.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the span file inside the data directory.
pub const SPAN_FILE_NAME: &str = "zallery-spans.jsonl";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber: an `EnvFilter` from `config.trace_level`
/// and an OpenTelemetry layer exporting to the span file.
///
/// Observability is optional. If the data directory cannot be created the
/// plugin runs without a subscriber; an invalid filter directive falls back
/// to `info`. Only the first call in a process takes effect.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", "zallery")]);
    let provider = exporter::create_tracer_provider(data_dir.join(SPAN_FILE_NAME), resource);

    let tracer = provider.tracer("zallery");
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
