//! Background worker thread for catalog loading.
//!
//! - `messages`: Request/response protocol with trace context propagation
//! - `handler`: Worker implementation and message processing

pub mod handler;
pub mod messages;

pub use handler::CatalogWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
