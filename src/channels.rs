//! Command request/response channels.
//!
//! Uses `embassy-sync` bounded MPMC channels to bridge whatever receives
//! requests (a stdin reader, a middleware bridge) with the synchronous
//! control loop.  The loop drains requests between ticks and answers each
//! one on the response channel, keyed by the request id.
//!
//! ```text
//! ┌──────────────┐ CommandRequest  ┌──────────────┐
//! │   Receiver   │───────────────▶│ Control Loop │
//! │   (thread)   │◀───────────────│   (sync)     │
//! └──────────────┘ CommandResponse └──────────────┘
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::app::commands::AppCommand;

/// Inbound request carrying a caller-chosen correlation id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRequest {
    pub id: u32,
    pub command: AppCommand,
}

/// Reply to a [`CommandRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResponse {
    pub id: u32,
    pub succeed: bool,
}

/// Channel depth for inbound requests.
pub const CMD_DEPTH: usize = 8;

/// Channel depth for outbound responses.
pub const RESP_DEPTH: usize = 8;

pub type CommandChannel = Channel<CriticalSectionRawMutex, CommandRequest, CMD_DEPTH>;
pub type ResponseChannel = Channel<CriticalSectionRawMutex, CommandResponse, RESP_DEPTH>;
