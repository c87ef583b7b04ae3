//! Line frame and bitmask engine.
//!
//! A [`LineFrame`] is the ordered set of digital output states broadcast to
//! the indicator driver as one unit.  Every mutation goes through one of
//! four boolean-algebra primitives applied positionwise against a mask of
//! the same width:
//!
//! | Operation       | Rule                   | Effect                           |
//! |-----------------|------------------------|----------------------------------|
//! | `toggle`        | `old XOR mask`         | flips masked lines               |
//! | `toggle_pair`   | XOR, asymmetric start  | alternates two colours           |
//! | `set_masked`    | `old OR mask`          | lights masked lines, never clears|
//! | `reset_masked`  | `!(!old OR mask)`      | clears masked lines, never lights|
//!
//! The non-implication form of reset means a line that is off stays off.
//! Width is fixed at construction; a mask of any other length is rejected
//! before anything is written.

use heapless::Vec;

use crate::error::MaskError;

/// Upper bound on the number of lines a frame can carry.
pub const MAX_LINES: usize = 16;

/// Smallest frame that still holds every colour line.
pub const MIN_LINES: usize = 4;

/// Default frame width of the robot's digital output bank.
pub const DEFAULT_LINES: usize = 8;

/// Colour-bound output lines.  Positions past `Blue` are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Line {
    Red = 0,
    Green = 1,
    Yellow = 2,
    Blue = 3,
}

impl Line {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The four lines every masking operation in the controller works on.
pub const CORE_LINES: [Line; 4] = [Line::Red, Line::Blue, Line::Yellow, Line::Green];

/// Fixed-capacity boolean mask.
pub type LineMask = Vec<bool, MAX_LINES>;

/// Ordered, fixed-width sequence of line states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFrame {
    values: Vec<bool, MAX_LINES>,
}

impl LineFrame {
    /// All-off frame of `width` lines, clamped into `MIN_LINES..=MAX_LINES`.
    pub fn new(width: usize) -> Self {
        let width = width.clamp(MIN_LINES, MAX_LINES);
        Self {
            values: core::iter::repeat_n(false, width).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Build a frame-width mask with `lines` set.
    pub fn mask_of(&self, lines: &[Line]) -> LineMask {
        let mut mask: LineMask = core::iter::repeat_n(false, self.width()).collect();
        for line in lines {
            if let Some(bit) = mask.get_mut(line.index()) {
                *bit = true;
            }
        }
        mask
    }

    /// Whether `line` is currently lit.
    pub fn is_lit(&self, line: Line) -> bool {
        self.values.get(line.index()).copied().unwrap_or(false)
    }

    /// Flip exactly one line (XOR against a single-bit mask).
    pub fn toggle(&mut self, line: Line) -> Result<(), MaskError> {
        let index = line.index();
        if index >= self.width() {
            return Err(MaskError::LineOutOfRange {
                index,
                width: self.width(),
            });
        }
        let mask = self.mask_of(&[line]);
        for (value, bit) in self.values.iter_mut().zip(mask.iter()) {
            *value ^= *bit;
        }
        Ok(())
    }

    /// Toggle a colour pair so the two colours alternate.
    ///
    /// From fully off only `first` is lit; afterwards both lines are flipped
    /// independently, which swaps which of the two is on.
    pub fn toggle_pair(&mut self, first: Line, second: Line) -> Result<(), MaskError> {
        if !self.is_lit(first) && !self.is_lit(second) {
            self.toggle(first)
        } else {
            self.toggle(first)?;
            self.toggle(second)
        }
    }

    /// Positionwise OR: light every masked line.
    pub fn set_masked(&mut self, mask: &[bool]) -> Result<(), MaskError> {
        self.check_len(mask)?;
        for (value, bit) in self.values.iter_mut().zip(mask) {
            *value = *value || *bit;
        }
        Ok(())
    }

    /// Positionwise material non-implication: clear every masked line.
    pub fn reset_masked(&mut self, mask: &[bool]) -> Result<(), MaskError> {
        self.check_len(mask)?;
        for (value, bit) in self.values.iter_mut().zip(mask) {
            *value = !(!*value || *bit);
        }
        Ok(())
    }

    /// Light all four core colours.
    pub fn set_core(&mut self) -> Result<(), MaskError> {
        let mask = self.mask_of(&CORE_LINES);
        self.set_masked(&mask)
    }

    /// Turn off all four core colours.
    pub fn reset_core(&mut self) -> Result<(), MaskError> {
        let mask = self.mask_of(&CORE_LINES);
        self.reset_masked(&mask)
    }

    fn check_len(&self, mask: &[bool]) -> Result<(), MaskError> {
        if mask.len() == self.width() {
            Ok(())
        } else {
            Err(MaskError::LengthMismatch {
                expected: self.width(),
                actual: mask.len(),
            })
        }
    }
}

impl Default for LineFrame {
    fn default() -> Self {
        Self::new(DEFAULT_LINES)
    }
}
