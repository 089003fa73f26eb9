//! Simulation utilities and program loading.
//!
//! Provides the run-loop driver, utilities for reading program images from
//! disk, and the built-in demonstration program.

/// Built-in demonstration program.
pub mod demo;

/// Binary image loading.
pub mod loader;

/// Run-loop driver.
pub mod simulator;

pub use self::simulator::{RunOutcome, Simulator, StopReason};
