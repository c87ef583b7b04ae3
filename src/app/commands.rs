//! Inbound commands to the signal service.
//!
//! These mirror the three request/response endpoints exposed to route
//! planners and operators.  Codes arrive raw and are validated by the
//! [`SignalService`](super::service::SignalService), which answers each one
//! with a single success flag.

use core::fmt;
use core::str::FromStr;

/// Commands that external adapters can send into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Start signaling a route between two place codes.
    AssignRoute { departure: i32, arrival: i32 },

    /// Start signaling the product class being carried.
    AssignProduct(i32),

    /// Stop the transport and play the end-of-transport blink.
    Abort,
}

impl AppCommand {
    /// Short label for logs and responses.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AssignRoute { .. } => "go_from_to",
            Self::AssignProduct(_) => "transport_product",
            Self::Abort => "stop_transportation",
        }
    }
}

/// Text form used by the host binary's stdin reader:
/// `route <departure> <arrival>`, `product <code>` or `abort`.
impl FromStr for AppCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(ParseCommandError::Empty)?;
        let mut code = || -> Result<i32, ParseCommandError> {
            words
                .next()
                .ok_or(ParseCommandError::MissingArgument)?
                .parse()
                .map_err(|_| ParseCommandError::BadNumber)
        };

        let cmd = match verb {
            "route" => Self::AssignRoute {
                departure: code()?,
                arrival: code()?,
            },
            "product" => Self::AssignProduct(code()?),
            "abort" | "stop" => Self::Abort,
            _ => return Err(ParseCommandError::UnknownVerb),
        };
        if words.next().is_some() {
            return Err(ParseCommandError::TrailingInput);
        }
        Ok(cmd)
    }
}

/// Why a text command line could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCommandError {
    Empty,
    UnknownVerb,
    MissingArgument,
    BadNumber,
    TrailingInput,
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownVerb => write!(f, "expected route, product or abort"),
            Self::MissingArgument => write!(f, "missing code"),
            Self::BadNumber => write!(f, "code is not an integer"),
            Self::TrailingInput => write!(f, "unexpected trailing input"),
        }
    }
}
