//! Wavsmith CLI library.
//!
//! Command implementations and render spec loading for the `wavsmith` binary.

pub mod commands;
pub mod input;
