//! Worker thread message types for cross-thread communication.
//!
//! Requests and responses exchanged between the plugin and the catalog
//! worker, serialized as JSON. Requests carry a [`TraceContext`] so spans
//! recorded in the worker join the trace of the plugin span that posted them.

use crate::domain::Item;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span ids of the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span
    /// context is invalid, which is the case in tests.
    ///
    /// ```
    /// use zallery::worker::TraceContext;
    ///
    /// assert!(TraceContext::from_current().is_none());
    /// ```
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            let trace_id_str = format!("{:032x}", span_context.trace_id());
            let parent_span_id_str = format!("{:016x}", span_context.span_id());

            tracing::debug!(
                trace_id = %trace_id_str,
                parent_span_id = %parent_span_id_str,
                "capturing trace context"
            );

            Some(Self {
                trace_id: trace_id_str,
                parent_span_id: parent_span_id_str,
            })
        } else {
            tracing::debug!("span context is not valid");
            None
        }
    }
}

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Each builder attaches the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_catalog(LoadCatalog { path: String, trace_level: Option<String> }),
}

/// Messages sent from the plugin to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read and decode a catalog file.
    LoadCatalog {
        /// Catalog file path; `~` is expanded against the host mount.
        path: String,

        /// Span filter directive the plugin was configured with, applied
        /// when the worker installs its own subscriber.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_level: Option<String>,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Trace context attached to the message, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context, .. } => trace_context.as_ref(),
        }
    }

    #[must_use]
    pub fn trace_level(&self) -> Option<&str> {
        match self {
            Self::LoadCatalog { trace_level, .. } => trace_level.as_deref(),
        }
    }
}

/// Responses sent from the worker thread back to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The file decoded; the plugin still validates the items before
    /// replacing its catalog.
    CatalogLoaded {
        /// Human-readable description of where the items came from.
        source: String,

        /// Items in file order.
        items: Vec<Item>,
    },

    /// The operation failed.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
