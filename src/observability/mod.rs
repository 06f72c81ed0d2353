//! Tracing with OpenTelemetry spans exported to a local JSON lines file.
//!
//! ```text
//! tracing → tracing-opentelemetry → opentelemetry_sdk → FileSpanExporter → RotatingWriter
//! ```
//!
//! Every finished span becomes one JSON object on its own line in
//! `~/.local/share/zellij/zallery/zallery-spans.jsonl`. The file rotates at
//! 10 MB into numbered backups (`.1` newest, `.3` oldest).
//!
//! The filter comes from the `trace_level` plugin option, an `EnvFilter`
//! directive such as `"debug"` or `"zallery::gallery=trace"`; the default is
//! `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and tracer provider
//! - [`record`]: JSON line layout of an exported span
//! - [`rotation`]: Size-rotated append-only writer

mod exporter;
mod init;
mod record;
mod rotation;

pub use exporter::create_tracer_provider;
pub use init::{init_tracing, SPAN_FILE_NAME};
pub use record::SpanRecord;
pub use rotation::RotatingWriter;
