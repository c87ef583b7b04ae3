//! Output-line model and the bitmask engine that mutates it.

pub mod line_frame;
