//! Colour lookup tables.
//!
//! | Product | Pair (first, second) |   | Route                              | Line   |
//! |---------|----------------------|---|------------------------------------|--------|
//! | TV      | Yellow, Blue         |   | EXAM_ROOM -> EXIT_SECTOR           | Green  |
//! | DVD     | Blue, Green          |   | OPERATING_ROOM -> RECOVERY_SECTOR  | Red    |
//! | PHONE   | Green, Yellow        |   | RECOVERY_SECTOR -> EXIT_SECTOR     | Yellow |
//! | TABLET  | Red, Blue            |   | EXAM_ROOM -> OPERATING_ROOM        | Blue   |
//! | LAPTOP  | Green, Red           |   | anything else                      | none   |

use super::{Place, Product, Route};
use crate::drivers::line_frame::Line;

impl Product {
    /// Colour pair blinked while carrying this product.
    pub const fn signal_pair(self) -> Option<(Line, Line)> {
        match self {
            Self::None => None,
            Self::Tv => Some((Line::Yellow, Line::Blue)),
            Self::Dvd => Some((Line::Blue, Line::Green)),
            Self::Phone => Some((Line::Green, Line::Yellow)),
            Self::Tablet => Some((Line::Red, Line::Blue)),
            Self::Laptop => Some((Line::Green, Line::Red)),
        }
    }
}

impl Route {
    /// Single colour blinked for a known route segment.
    pub const fn signal_line(&self) -> Option<Line> {
        use Place::*;

        match (self.departure, self.arrival) {
            (ExamRoom, ExitSector) => Some(Line::Green),
            (OperatingRoom, RecoverySector) => Some(Line::Red),
            (RecoverySector, ExitSector) => Some(Line::Yellow),
            (ExamRoom, OperatingRoom) => Some(Line::Blue),
            _ => None,
        }
    }
}
