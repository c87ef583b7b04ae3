//! Transit LED signaling controller library.
//!
//! Drives a bank of coloured indicator lines to tell people nearby which
//! route a transport robot is running and what it is carrying.  Exposes the
//! pure-logic modules for integration testing; the host binary in
//! `main.rs` wires them to stdin, stdout and the system clock.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod channels;
pub mod config;
pub mod drivers;
pub mod error;
pub mod fsm;
pub mod signaler;
