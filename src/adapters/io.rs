//! Pairs a publisher with a clock so the service sees one I/O handle.

use core::time::Duration;

use crate::app::events::FrameMessage;
use crate::app::ports::{FramePublisher, PublishError, TimePort};

pub struct SignalIo<P, T> {
    pub publisher: P,
    pub time: T,
}

impl<P: FramePublisher, T: TimePort> SignalIo<P, T> {
    pub fn new(publisher: P, time: T) -> Self {
        Self { publisher, time }
    }
}

impl<P: FramePublisher, T> FramePublisher for SignalIo<P, T> {
    fn publish(&mut self, message: &FrameMessage) -> Result<(), PublishError> {
        self.publisher.publish(message)
    }
}

impl<P, T: TimePort> TimePort for SignalIo<P, T> {
    fn now_us(&self) -> u64 {
        self.time.now_us()
    }

    fn sleep(&mut self, duration: Duration) {
        self.time.sleep(duration);
    }
}
