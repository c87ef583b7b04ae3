//! Mock I/O adapter for integration tests.
//!
//! Records every broadcast frame together with the virtual time it was
//! published at, so tests can assert on the full output history.

use std::time::Duration;

use transit_leds::app::events::{AppEvent, FrameMessage};
use transit_leds::app::ports::{EventSink, FramePublisher, PublishError, TimePort};
use transit_leds::drivers::line_frame::Line;

// ── MockIo ────────────────────────────────────────────────────

pub struct MockIo {
    pub frames: Vec<FrameMessage>,
    pub sleeps: Vec<Duration>,
    pub now_us: u64,
    /// When set, every publish fails (the service must carry on).
    pub fail_publish: bool,
}

#[allow(dead_code)]
impl MockIo {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            sleeps: Vec::new(),
            now_us: 0,
            fail_publish: false,
        }
    }

    pub fn last_frame(&self) -> Option<&FrameMessage> {
        self.frames.last()
    }

    /// Lit colour lines of the most recent frame.
    pub fn last_lit(&self) -> Vec<Line> {
        let Some(frame) = self.last_frame() else {
            return Vec::new();
        };
        [Line::Red, Line::Green, Line::Yellow, Line::Blue]
            .into_iter()
            .filter(|l| frame.values[l.index()])
            .collect()
    }

    pub fn all_off(frame: &FrameMessage) -> bool {
        frame.values.iter().all(|v| !v)
    }

    pub fn core_on(frame: &FrameMessage) -> bool {
        frame.values[..4].iter().all(|v| *v)
    }
}

impl Default for MockIo {
    fn default() -> Self {
        Self::new()
    }
}

impl FramePublisher for MockIo {
    fn publish(&mut self, message: &FrameMessage) -> Result<(), PublishError> {
        if self.fail_publish {
            return Err(PublishError::IoError);
        }
        self.frames.push(message.clone());
        Ok(())
    }
}

impl TimePort for MockIo {
    fn now_us(&self) -> u64 {
        self.now_us
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
        self.now_us += duration.as_micros() as u64;
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
