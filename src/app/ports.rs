//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SignalService (domain)
//! ```
//!
//! Driven adapters (frame publishers, clocks, event sinks, config storage)
//! implement these traits.  The [`SignalService`](super::service::SignalService)
//! consumes them via generics, so the domain core never touches a transport
//! or the system clock directly.

use core::time::Duration;

use crate::config::SignalConfig;

use super::events::{AppEvent, FrameMessage};

// ───────────────────────────────────────────────────────────────
// Frame publisher (driven adapter: domain → output driver)
// ───────────────────────────────────────────────────────────────

/// Best-effort broadcast of the full line frame.
///
/// Receivers only care about the latest frame, so a failed publish is
/// logged by the caller and never retried.
pub trait FramePublisher {
    fn publish(&mut self, message: &FrameMessage) -> Result<(), PublishError>;
}

// ───────────────────────────────────────────────────────────────
// Time port (driven adapter: domain ↔ clock)
// ───────────────────────────────────────────────────────────────

/// Monotonic clock plus blocking sleep.
pub trait TimePort {
    /// Microseconds since an arbitrary fixed origin.
    fn now_us(&self) -> u64;

    /// Block the calling thread for `duration`.
    fn sleep(&mut self, duration: Duration);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port
// ───────────────────────────────────────────────────────────────

/// Loads and persists controller configuration.
///
/// Implementations MUST validate before returning or persisting a config.
pub trait ConfigPort {
    fn load(&self) -> Result<SignalConfig, ConfigError>;

    fn save(&self, config: &SignalConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug)]
pub enum ConfigError {
    /// No config found in storage.
    NotFound,
    /// Stored config could not be parsed.
    Corrupted,
    /// A config field failed range validation.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

/// Errors from [`FramePublisher`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishError {
    /// The frame could not be serialised.
    Encoding,
    /// The underlying writer failed.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl core::fmt::Display for PublishError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Encoding => write!(f, "frame encoding failed"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for PublishError {}
