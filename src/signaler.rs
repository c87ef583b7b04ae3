//! Periodic signaler — the control loop.
//!
//! Runs at the tick rate (twice the configured base frequency).  One cycle:
//!
//! 1. If the service is not idle, run one blink tick (which broadcasts).
//! 2. Drain pending command requests, answering each in arrival order.
//! 3. Sleep until the next deadline.
//!
//! Commands and ticks therefore never interleave: a command, including its
//! immediate broadcast and any end-of-transport blink, finishes before the
//! next tick is considered.

use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;

use log::{debug, info, warn};

use crate::app::ports::{EventSink, FramePublisher, TimePort};
use crate::app::service::SignalService;
use crate::channels::{CommandChannel, CommandResponse, ResponseChannel};

// ═══════════════════════════════════════════════════════════════
//  Loop rate
// ═══════════════════════════════════════════════════════════════

/// Fixed-cadence sleeper.
///
/// Deadlines advance by one period per cycle.  When a cycle overruns its
/// deadline (e.g. after a blocking end signal) the schedule is re-anchored
/// at the current time instead of firing a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct LoopRate {
    period_us: u64,
    next_us: Option<u64>,
}

impl LoopRate {
    pub fn new(period: Duration) -> Self {
        Self {
            period_us: (period.as_micros() as u64).max(1),
            next_us: None,
        }
    }

    pub fn period(&self) -> Duration {
        Duration::from_micros(self.period_us)
    }

    /// Sleep for whatever remains of the current period.
    pub fn sleep(&mut self, time: &mut impl TimePort) {
        let now = time.now_us();
        let deadline = self.next_us.unwrap_or(now + self.period_us);

        if deadline > now {
            time.sleep(Duration::from_micros(deadline - now));
            self.next_us = Some(deadline + self.period_us);
        } else {
            debug!("Loop overran by {}us, re-anchoring", now - deadline);
            self.next_us = Some(now + self.period_us);
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Signaler
// ═══════════════════════════════════════════════════════════════

pub struct PeriodicSignaler<'a> {
    commands: &'a CommandChannel,
    responses: &'a ResponseChannel,
    rate: LoopRate,
    cycles: u64,
}

impl<'a> PeriodicSignaler<'a> {
    pub fn new(
        tick_period: Duration,
        commands: &'a CommandChannel,
        responses: &'a ResponseChannel,
    ) -> Self {
        Self {
            commands,
            responses,
            rate: LoopRate::new(tick_period),
            cycles: 0,
        }
    }

    /// Tick-if-active, then answer every pending request.  Does not sleep.
    pub fn run_cycle(
        &mut self,
        service: &mut SignalService,
        io: &mut (impl FramePublisher + TimePort),
        sink: &mut impl EventSink,
    ) {
        self.cycles += 1;

        if !service.is_idle() && !service.tick(io) {
            debug!("Tick {} reported failure in {:?}", service.tick_count(), service.mode());
        }

        while let Ok(request) = self.commands.try_receive() {
            let succeed = service.handle_command(request.command, io, sink);
            let response = CommandResponse {
                id: request.id,
                succeed,
            };
            if self.responses.try_send(response).is_err() {
                warn!(
                    "Response queue full, dropping reply {} for {}",
                    request.id,
                    request.command.name()
                );
            }
        }
    }

    /// Run cycles at the tick rate until `shutdown` is raised.
    pub fn run(
        &mut self,
        service: &mut SignalService,
        io: &mut (impl FramePublisher + TimePort),
        sink: &mut impl EventSink,
        shutdown: &AtomicBool,
    ) {
        info!(
            "Signaler running with a {}ms tick",
            self.rate.period().as_millis()
        );
        while !shutdown.load(Ordering::Acquire) {
            self.run_cycle(service, io, sink);
            self.rate.sleep(io);
        }
        info!("Signaler stopped after {} cycles", self.cycles);
    }

    /// Cycles executed so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}
