//! # CLI Layer
//!
//! This module is **one possible UI client** for pocket. It is the only place
//! that knows about terminal I/O, argument parsing and exit codes.
//!
//! ## Structure
//!
//! - `setup`: clap definitions for the process and for session lines
//! - `commands`: `run()`, logging/config initialization, session loops
//! - `terminal`: line input plus the `Confirmer` and `MediaPicker` a
//!   terminal can offer
//! - `render`: turning `CmdResult`s into colored text

mod commands;
mod render;
mod setup;
mod terminal;

pub use commands::run;
