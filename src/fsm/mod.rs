//! Signaling state: what the robot is carrying and where it is going.
//!
//! The controller never stores its mode explicitly.  [`SignalMode`] is
//! derived on demand from the [`SignalingState`] tuple:
//!
//! ```text
//!                    product == NONE      product != NONE
//!  route == IDLE     Idle                 CarryingOnly
//!  route != IDLE     RoutingOnly          RoutingAndCarrying
//! ```
//!
//! The colour tables live next to the enums in [`tables`] and are written
//! as exhaustive matches, so a new place or product will not compile until
//! every table has been updated.

pub mod tables;

use core::fmt;

use crate::error::CommandError;

// ---------------------------------------------------------------------------
// Place
// ---------------------------------------------------------------------------

/// Locations the robot travels between.  Discriminants are the wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Place {
    Origin = 0,
    ControlSector = 1,
    ExamRoom = 2,
    OperatingRoom = 3,
    RecoverySector = 4,
    ExitSector = 5,
}

impl Place {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Origin => "ORIGIN",
            Self::ControlSector => "CONTROL_SECTOR",
            Self::ExamRoom => "EXAM_ROOM",
            Self::OperatingRoom => "OPERATING_ROOM",
            Self::RecoverySector => "RECOVERY_SECTOR",
            Self::ExitSector => "EXIT_SECTOR",
        }
    }
}

impl TryFrom<i32> for Place {
    type Error = CommandError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Origin),
            1 => Ok(Self::ControlSector),
            2 => Ok(Self::ExamRoom),
            3 => Ok(Self::OperatingRoom),
            4 => Ok(Self::RecoverySector),
            5 => Ok(Self::ExitSector),
            _ => Err(CommandError::InvalidPlace(code)),
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// Cargo classes.  `None` is the "nothing assigned" sentinel and cannot be
/// requested by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Product {
    #[default]
    None = 0,
    Tv = 1,
    Dvd = 2,
    Phone = 3,
    Tablet = 4,
    Laptop = 5,
}

impl Product {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Tv => "TV",
            Self::Dvd => "DVD",
            Self::Phone => "PHONE",
            Self::Tablet => "TABLET",
            Self::Laptop => "LAPTOP",
        }
    }
}

/// Only assignable products decode; code 0 (`None`) is rejected.
impl TryFrom<i32> for Product {
    type Error = CommandError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Tv),
            2 => Ok(Self::Dvd),
            3 => Ok(Self::Phone),
            4 => Ok(Self::Tablet),
            5 => Ok(Self::Laptop),
            _ => Err(CommandError::InvalidProduct(code)),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// Departure/arrival pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    pub departure: Place,
    pub arrival: Place,
}

impl Route {
    /// Sentinel pair meaning "no route active".
    pub const IDLE: Self = Self {
        departure: Place::Origin,
        arrival: Place::ControlSector,
    };

    pub const fn new(departure: Place, arrival: Place) -> Self {
        Self { departure, arrival }
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::IDLE
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.departure, self.arrival)
    }
}

// ---------------------------------------------------------------------------
// Signaling state
// ---------------------------------------------------------------------------

/// Derived controller mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalMode {
    Idle,
    RoutingOnly,
    CarryingOnly,
    RoutingAndCarrying,
}

/// Current product and route.  Mutated only by the command handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignalingState {
    pub product: Product,
    pub route: Route,
}

impl SignalingState {
    pub fn mode(&self) -> SignalMode {
        match (self.product == Product::None, self.route.is_idle()) {
            (true, true) => SignalMode::Idle,
            (true, false) => SignalMode::RoutingOnly,
            (false, true) => SignalMode::CarryingOnly,
            (false, false) => SignalMode::RoutingAndCarrying,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.mode() == SignalMode::Idle
    }

    /// Back to the idle tuple.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
