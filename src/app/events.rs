//! Outbound application events and the broadcast frame message.
//!
//! The [`SignalService`](super::service::SignalService) emits [`AppEvent`]s
//! through the [`EventSink`](super::ports::EventSink) port for presentation,
//! and [`FrameMessage`]s through the
//! [`FramePublisher`](super::ports::FramePublisher) port for the output
//! driver.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::drivers::line_frame::{LineFrame, MAX_LINES};
use crate::error::Error;
use crate::fsm::{Product, Route};

/// Structured events emitted by the controller core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started and broadcast its initial frame.
    Started,

    /// A route was accepted.
    RouteAssigned(Route),

    /// A product was accepted.
    ProductAssigned(Product),

    /// The transport was stopped and the end-of-transport blink played.
    TransportStopped,

    /// A command was answered with failure.
    CommandRejected {
        command: &'static str,
        reason: Error,
    },
}

/// One broadcast unit: every line state plus a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameMessage {
    /// Microseconds on the controller's monotonic clock.
    pub stamp_us: u64,
    pub values: Vec<bool, MAX_LINES>,
}

impl FrameMessage {
    pub fn capture(frame: &LineFrame, stamp_us: u64) -> Self {
        Self {
            stamp_us,
            values: frame.values().iter().copied().collect(),
        }
    }

    /// Render as `RGYB....`-style text, lowercase for unlit lines.
    pub fn pattern(&self) -> heapless::String<MAX_LINES> {
        const LABELS: [char; 4] = ['R', 'G', 'Y', 'B'];

        self.values
            .iter()
            .enumerate()
            .map(|(i, &on)| match (LABELS.get(i), on) {
                (Some(c), true) => *c,
                (Some(c), false) => c.to_ascii_lowercase(),
                (None, true) => '#',
                (None, false) => '.',
            })
            .collect()
    }
}
