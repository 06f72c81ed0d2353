//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij directly. It returns a
//! `Vec<Action>` and the shim in `main.rs` carries each one out in order.

use crate::worker::WorkerMessage;
use std::time::Duration;

/// Commands produced by the event handler and executed by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the catalog worker thread.
    PostToWorker(WorkerMessage),

    /// Arms a one-shot timer; the shim turns its expiry into
    /// [`Event::TimerElapsed`](crate::app::Event::TimerElapsed).
    ScheduleDismissal {
        /// Delay before the notification is dismissed.
        after: Duration,
    },
}
