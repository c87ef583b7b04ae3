//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the signaling rules: command handling, blink-tick
//! derivation and the end-of-transport sequence.  All interaction with the
//! outside world happens through **port traits** defined in [`ports`],
//! keeping this layer fully testable without a transport or a real clock.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
