//! Observability layer: tracing setup and log output.
//!
//! The application logs through the `tracing` macros everywhere; this module
//! wires those events to a log file in the data directory. Stdout is off
//! limits because the terminal runs in raw mode.

pub mod init;

pub use init::init_tracing;
