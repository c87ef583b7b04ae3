//! Frame publisher that writes each broadcast to the log.

use log::info;

use crate::app::events::FrameMessage;
use crate::app::ports::{FramePublisher, PublishError};

pub struct LogFramePublisher {
    published: u64,
}

impl LogFramePublisher {
    pub fn new() -> Self {
        Self { published: 0 }
    }

    /// Frames logged so far.
    pub fn published(&self) -> u64 {
        self.published
    }
}

impl Default for LogFramePublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl FramePublisher for LogFramePublisher {
    fn publish(&mut self, message: &FrameMessage) -> Result<(), PublishError> {
        self.published += 1;
        info!(
            "FRAME | #{} t={}us | {}",
            self.published,
            message.stamp_us,
            message.pattern()
        );
        Ok(())
    }
}
