//! Unified error types for the signaling controller.
//!
//! A single `Error` enum that every subsystem can convert into, keeping the
//! control loop's error handling uniform.  All variants are `Copy` so they
//! can be passed through the service and logged without allocation.
//!
//! None of these are fatal: the controller reports them to the immediate
//! caller as a failed command or tick and keeps running.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level controller error
// ---------------------------------------------------------------------------

/// Every fallible domain operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A mask operation was rejected by the bitmask engine.
    Mask(MaskError),
    /// An inbound command carried an invalid code.
    Command(CommandError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mask(e) => write!(f, "mask: {e}"),
            Self::Command(e) => write!(f, "command: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Shape errors (bitmask engine)
// ---------------------------------------------------------------------------

/// The frame is never mutated when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {
    /// Mask length differs from the frame width.
    LengthMismatch { expected: usize, actual: usize },
    /// Line index is outside the frame.
    LineOutOfRange { index: usize, width: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "mask size {actual} must equal frame size {expected}")
            }
            Self::LineOutOfRange { index, width } => {
                write!(f, "line {index} out of range for {width}-line frame")
            }
        }
    }
}

impl From<MaskError> for Error {
    fn from(e: MaskError) -> Self {
        Self::Mask(e)
    }
}

// ---------------------------------------------------------------------------
// Validation errors (command handlers)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Place code outside `0..=5`.
    InvalidPlace(i32),
    /// Product code outside `1..=5`.
    InvalidProduct(i32),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPlace(code) => write!(f, "invalid place code: {code}"),
            Self::InvalidProduct(code) => write!(f, "invalid product code: {code}"),
        }
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Self::Command(e)
    }
}
