//! Memory-mapped UART transmit port.
//!
//! The interpreter exposes a single write-only serial port. A byte store to
//! its address is intercepted by [`Memory`](crate::soc::memory::Memory) and
//! handed to the [`Uart`], which forwards it to a [`Console`] sink. There is
//! no receive path and no register file; drivers simply store one character
//! at a time.
//!
//! Output is written and flushed per byte so that characters appear in
//! program order relative to every other side effect of the run.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Destination for characters written to the UART.
pub trait Console: Send {
    /// Emits one byte. Implementations must not reorder or hold back output.
    fn put_byte(&mut self, byte: u8);
}

/// Console writing to the host's standard output or standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole {
    /// When true, output goes to stderr.
    to_stderr: bool,
}

impl StdConsole {
    /// Creates a console bound to stdout, or stderr if `to_stderr` is set.
    pub const fn new(to_stderr: bool) -> Self {
        Self { to_stderr }
    }
}

impl Console for StdConsole {
    fn put_byte(&mut self, byte: u8) {
        // Host I/O failures are not guest-visible; the byte is simply lost.
        if self.to_stderr {
            let mut err = io::stderr().lock();
            let _ = err.write_all(&[byte]).and_then(|()| err.flush());
        } else {
            let mut out = io::stdout().lock();
            let _ = out.write_all(&[byte]).and_then(|()| out.flush());
        }
    }
}

/// Console capturing output in a shared in-memory buffer.
///
/// Clones share the same buffer, so a caller can keep one handle and give
/// the other to the machine.
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl BufferConsole {
    /// Creates an empty buffer console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every byte written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the captured output decoded lossily as UTF-8.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }
}

impl Console for BufferConsole {
    fn put_byte(&mut self, byte: u8) {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(byte);
    }
}

/// UART device structure.
pub struct Uart {
    /// Address of the transmit port.
    base_addr: u32,
    /// Output sink.
    console: Box<dyn Console>,
    /// Number of bytes transmitted.
    tx_count: u64,
}

impl Uart {
    /// Creates a UART at `base_addr` writing to `console`.
    ///
    /// # Arguments
    ///
    /// * `base_addr` - Address whose byte stores are intercepted.
    /// * `console` - Sink receiving each transmitted byte.
    pub fn new(base_addr: u32, console: Box<dyn Console>) -> Self {
        Self {
            base_addr,
            console,
            tx_count: 0,
        }
    }

    /// Returns the address of the transmit port.
    pub const fn base_addr(&self) -> u32 {
        self.base_addr
    }

    /// Transmits one byte.
    pub fn write_u8(&mut self, val: u8) {
        self.console.put_byte(val);
        self.tx_count += 1;
    }

    /// Number of bytes transmitted since creation.
    pub const fn tx_count(&self) -> u64 {
        self.tx_count
    }
}

impl fmt::Debug for Uart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uart")
            .field("base_addr", &format_args!("{:#010x}", self.base_addr))
            .field("tx_count", &self.tx_count)
            .finish_non_exhaustive()
    }
}
