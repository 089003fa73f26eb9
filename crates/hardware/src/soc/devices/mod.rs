//! Memory-Mapped IO Devices.
//!
//! The only device is a write-only UART transmit port and the console sinks
//! it writes to.

/// UART transmit port and console sinks.
pub mod uart;

pub use uart::{BufferConsole, Console, StdConsole, Uart};
