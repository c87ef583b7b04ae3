//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the `log`
//! facade.  A middleware bridge would implement the same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => info!("START | lines cleared"),
            AppEvent::RouteAssigned(route) => info!("ROUTE | {}", route),
            AppEvent::ProductAssigned(product) => info!("CARGO | {}", product),
            AppEvent::TransportStopped => info!("STOP  | back to idle"),
            AppEvent::CommandRejected { command, reason } => {
                warn!("REJECT | {} | {}", command, reason);
            }
        }
    }
}
