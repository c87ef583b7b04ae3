//! Host time adapter.
//!
//! Monotonic time from `std::time::Instant`, blocking sleep from
//! `std::thread::sleep`.

use core::time::Duration;
use std::time::Instant;

use crate::app::ports::TimePort;

pub struct HostTimeAdapter {
    start: Instant,
}

impl Default for HostTimeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl HostTimeAdapter {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl TimePort for HostTimeAdapter {
    fn now_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
