//! Signal service — the hexagonal core.
//!
//! [`SignalService`] owns the [`LineFrame`] and the [`SignalingState`] and
//! exposes the three command handlers plus the per-tick derivation step.
//! All I/O flows through port traits injected at call sites, so the whole
//! service runs against mock adapters in tests.
//!
//! ```text
//!  AppCommand ──▶ ┌──────────────────────────┐ ──▶ FramePublisher
//!                 │      SignalService       │
//!    TimePort ◀──▶│  LineFrame · State       │ ──▶ EventSink
//!                 └──────────────────────────┘
//! ```
//!
//! Every method runs to completion before returning, including the
//! end-of-transport blink, which sleeps through the [`TimePort`].

use core::time::Duration;

use log::{debug, info, warn};

use crate::config::SignalConfig;
use crate::drivers::line_frame::LineFrame;
use crate::error::{CommandError, Error};
use crate::fsm::{Place, Product, Route, SignalMode, SignalingState};

use super::commands::AppCommand;
use super::events::{AppEvent, FrameMessage};
use super::ports::{EventSink, FramePublisher, TimePort};

/// Number of on/off flashes in the end-of-transport blink.
const END_SIGNAL_FLASHES: usize = 3;

// ───────────────────────────────────────────────────────────────
// SignalService
// ───────────────────────────────────────────────────────────────

pub struct SignalService {
    frame: LineFrame,
    state: SignalingState,
    /// Wait between end-signal steps.
    blink_step: Duration,
    tick_count: u64,
}

impl SignalService {
    /// Construct the service in the idle state with an all-off frame.
    ///
    /// Does **not** broadcast; call [`start`](Self::start) next.
    ///
    /// # Panics
    ///
    /// `config` must pass [`SignalConfig::validate`]; a non-positive
    /// frequency has no blink step.
    pub fn new(config: &SignalConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid config: {config:?}");
        Self {
            frame: LineFrame::new(config.line_count),
            state: SignalingState::default(),
            blink_step: config.blink_step(),
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Clear the core lines and broadcast the initial frame.
    pub fn start(
        &mut self,
        io: &mut (impl FramePublisher + TimePort),
        sink: &mut impl EventSink,
    ) {
        if let Err(e) = self.frame.reset_core() {
            warn!("Initial line reset failed: {}", e);
        }
        self.publish(io);
        sink.emit(&AppEvent::Started);
        info!("Signal service up with {} lines", self.frame.width());
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an inbound command and return the success flag for the reply.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        io: &mut (impl FramePublisher + TimePort),
        sink: &mut impl EventSink,
    ) -> bool {
        match cmd {
            AppCommand::AssignRoute { departure, arrival } => {
                self.assign_route(departure, arrival, io, sink)
            }
            AppCommand::AssignProduct(code) => self.assign_product(code, io, sink),
            AppCommand::Abort => self.abort(io, sink),
        }
    }

    /// Clear the core lines, broadcast, then apply each valid place code.
    ///
    /// Departure and arrival are validated independently: a valid half is
    /// stored even when the other half is rejected, and the reply is then
    /// a failure.
    pub fn assign_route(
        &mut self,
        departure: i32,
        arrival: i32,
        io: &mut (impl FramePublisher + TimePort),
        sink: &mut impl EventSink,
    ) -> bool {
        let mut succeed = self.clear_and_publish(io);

        match Place::try_from(departure) {
            Ok(place) => self.state.route.departure = place,
            Err(e) => {
                self.reject("go_from_to", e, sink);
                succeed = false;
            }
        }
        match Place::try_from(arrival) {
            Ok(place) => self.state.route.arrival = place,
            Err(e) => {
                self.reject("go_from_to", e, sink);
                succeed = false;
            }
        }

        if succeed {
            info!("Going from {}!!!", self.state.route);
            sink.emit(&AppEvent::RouteAssigned(self.state.route));
        }
        succeed
    }

    /// Clear the core lines, broadcast, then store the product if the code
    /// names one.
    pub fn assign_product(
        &mut self,
        code: i32,
        io: &mut (impl FramePublisher + TimePort),
        sink: &mut impl EventSink,
    ) -> bool {
        let cleared = self.clear_and_publish(io);

        match Product::try_from(code) {
            Ok(product) => {
                self.state.product = product;
                info!("Transporting a {}!!!", product);
                sink.emit(&AppEvent::ProductAssigned(product));
                cleared
            }
            Err(e) => {
                self.reject("transport_product", e, sink);
                false
            }
        }
    }

    /// Return to idle unconditionally and play the end-of-transport blink.
    pub fn abort(
        &mut self,
        io: &mut (impl FramePublisher + TimePort),
        sink: &mut impl EventSink,
    ) -> bool {
        info!("Stopping transportation!!!");
        self.state.reset();
        let succeed = self.end_signal(io);
        sink.emit(&AppEvent::TransportStopped);
        succeed
    }

    // ── Per-tick derivation ───────────────────────────────────

    /// Apply one blink step for the current product and route, then
    /// broadcast.
    ///
    /// The product pair is toggled first and the route colour second, on
    /// the same frame.  The returned flag is the outcome of the last toggle
    /// that ran: the route toggle's result replaces the pair's, but neither
    /// undoes the other's effect on the frame.  With no product the pair
    /// step reports failure.
    pub fn tick(&mut self, io: &mut (impl FramePublisher + TimePort)) -> bool {
        self.tick_count += 1;

        let mut succeed = match self.state.product.signal_pair() {
            Some((first, second)) => self.frame.toggle_pair(first, second).is_ok(),
            None => false,
        };
        if let Some(line) = self.state.route.signal_line() {
            succeed = self.frame.toggle(line).is_ok();
        }

        self.publish(io);
        succeed
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn frame(&self) -> &LineFrame {
        &self.frame
    }

    pub fn state(&self) -> SignalingState {
        self.state
    }

    pub fn mode(&self) -> SignalMode {
        self.state.mode()
    }

    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    pub fn route(&self) -> Route {
        self.state.route
    }

    pub fn product(&self) -> Product {
        self.state.product
    }

    /// Blink ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // ── Internal ──────────────────────────────────────────────

    /// Blocking end-of-transport blink: off, then three on/off flashes.
    fn end_signal(&mut self, io: &mut (impl FramePublisher + TimePort)) -> bool {
        info!("Signaling the end of transportation!!!");
        self.clear_and_publish(io);
        for _ in 0..END_SIGNAL_FLASHES {
            io.sleep(self.blink_step);
            if let Err(e) = self.frame.set_core() {
                warn!("End signal set failed: {}", e);
            }
            self.publish(io);
            io.sleep(self.blink_step);
            self.clear_and_publish(io);
        }
        true
    }

    fn clear_and_publish(&mut self, io: &mut (impl FramePublisher + TimePort)) -> bool {
        let cleared = match self.frame.reset_core() {
            Ok(()) => true,
            Err(e) => {
                warn!("Line reset failed: {}", e);
                false
            }
        };
        self.publish(io);
        cleared
    }

    fn publish(&self, io: &mut (impl FramePublisher + TimePort)) {
        let message = FrameMessage::capture(&self.frame, io.now_us());
        debug!("Frame {}", message.pattern());
        if let Err(e) = io.publish(&message) {
            warn!("Frame publish failed: {}", e);
        }
    }

    fn reject(&self, command: &'static str, error: CommandError, sink: &mut impl EventSink) {
        warn!("{} rejected: {}", command, error);
        sink.emit(&AppEvent::CommandRejected {
            command,
            reason: Error::from(error),
        });
    }
}
