//! Physical System Memory.
//!
//! This module implements the emulated address space. It provides:
//! 1. **Storage:** A fixed-capacity byte array mapped at address 0.
//! 2. **Access:** Little-endian 8/16/32-bit loads and stores with a lenient bounds policy.
//! 3. **MMIO:** Interception of byte stores to the UART transmit port.
//!
//! # Bounds policy
//!
//! A load whose access window `addr .. addr + width` leaves the array returns
//! zero; a store whose window leaves the array is dropped. Instruction fetch
//! uses [`Memory::fetch32`] instead, which reports the violation so the caller
//! can treat it as fatal.
//!
//! Only `store8` is routed to the UART. Half-word and word stores to the port
//! address follow the ordinary bounds policy, mirroring a device that is
//! programmed one character at a time.

use std::fmt;
use std::ops::Range;

use tracing::debug;

use crate::common::{Result, SimError};
use crate::soc::devices::Uart;

/// System Memory structure.
pub struct Memory {
    /// Backing storage; its length is the capacity.
    data: Vec<u8>,
    /// Transmit port intercepting byte stores.
    uart: Uart,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes with the given UART attached.
    ///
    /// # Arguments
    ///
    /// * `size` - Capacity in bytes.
    /// * `uart` - Device receiving byte stores to its port address.
    pub fn new(size: usize, uart: Uart) -> Self {
        Self {
            data: vec![0; size],
            uart,
        }
    }

    /// Copies a binary image to address 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] if the image does not fit; memory is
    /// left untouched in that case.
    pub fn load_image(&mut self, image: &[u8]) -> Result<()> {
        let capacity = self.data.len();
        let dest = self
            .data
            .get_mut(..image.len())
            .ok_or(SimError::ImageTooLarge {
                size: image.len(),
                capacity,
            })?;
        dest.copy_from_slice(image);
        debug!(bytes = image.len(), "image loaded at 0x00000000");
        Ok(())
    }

    /// Returns the capacity in bytes.
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the memory has zero capacity.
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the raw memory contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the attached UART.
    pub const fn uart(&self) -> &Uart {
        &self.uart
    }

    /// Returns the index range covered by an access, or `None` if any byte of
    /// it lies outside memory.
    fn window(&self, addr: u32, width: usize) -> Option<Range<usize>> {
        let start = usize::try_from(addr).ok()?;
        let end = start.checked_add(width)?;
        (end <= self.data.len()).then_some(start..end)
    }

    /// Reads `N` bytes at `addr`, or `None` if the window leaves memory.
    fn read_bytes<const N: usize>(&self, addr: u32) -> Option<[u8; N]> {
        let range = self.window(addr, N)?;
        self.data.get(range)?.try_into().ok()
    }

    /// Writes `bytes` at `addr`; dropped if the window leaves memory.
    fn write_bytes(&mut self, addr: u32, bytes: &[u8]) {
        if let Some(range) = self.window(addr, bytes.len()) {
            self.data[range].copy_from_slice(bytes);
        }
    }

    /// Reads an instruction word, reporting an out-of-bounds window.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::FetchOutOfBounds`] if any of the four bytes lies
    /// outside memory.
    pub fn fetch32(&self, pc: u32) -> Result<u32> {
        self.read_bytes::<4>(pc)
            .map(u32::from_le_bytes)
            .ok_or(SimError::FetchOutOfBounds { pc })
    }

    /// Reads a byte; zero if out of range.
    pub fn load8(&self, addr: u32) -> u8 {
        self.read_bytes::<1>(addr).map_or(0, |[b]| b)
    }

    /// Reads a little-endian half-word; zero if out of range.
    pub fn load16(&self, addr: u32) -> u16 {
        self.read_bytes::<2>(addr).map_or(0, u16::from_le_bytes)
    }

    /// Reads a little-endian word; zero if out of range.
    pub fn load32(&self, addr: u32) -> u32 {
        self.read_bytes::<4>(addr).map_or(0, u32::from_le_bytes)
    }

    /// Writes a byte, or transmits it if `addr` is the UART port.
    pub fn store8(&mut self, addr: u32, val: u8) {
        if addr == self.uart.base_addr() {
            self.uart.write_u8(val);
            return;
        }
        self.write_bytes(addr, &[val]);
    }

    /// Writes a little-endian half-word; dropped if out of range.
    pub fn store16(&mut self, addr: u32, val: u16) {
        self.write_bytes(addr, &val.to_le_bytes());
    }

    /// Writes a little-endian word; dropped if out of range.
    pub fn store32(&mut self, addr: u32, val: u32) {
        self.write_bytes(addr, &val.to_le_bytes());
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("size", &self.data.len())
            .field("uart", &self.uart)
            .finish()
    }
}
