//! Load/Store Unit (LSU).
//!
//! This module provides the Load/Store Unit, responsible for sizing memory
//! accesses and extending loaded values to register width. It sits between
//! the executor and [`Memory`], whose bounds policy (out-of-range loads read
//! zero, out-of-range stores are dropped) it inherits unchanged.

use crate::isa::instruction::MemWidth;
use crate::soc::memory::Memory;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Loads a value of the given width and extends it to 32 bits.
    ///
    /// # Arguments
    ///
    /// * `mem`    - Backing memory.
    /// * `addr`   - Effective byte address.
    /// * `width`  - Access width.
    /// * `signed` - Sign-extend (`LB`/`LH`) instead of zero-extend (`LBU`/`LHU`).
    ///   Ignored for word loads.
    pub fn load(mem: &Memory, addr: u32, width: MemWidth, signed: bool) -> u32 {
        match (width, signed) {
            (MemWidth::Byte, true) => mem.load8(addr) as i8 as i32 as u32,
            (MemWidth::Byte, false) => u32::from(mem.load8(addr)),
            (MemWidth::Half, true) => mem.load16(addr) as i16 as i32 as u32,
            (MemWidth::Half, false) => u32::from(mem.load16(addr)),
            (MemWidth::Word, _) => mem.load32(addr),
        }
    }

    /// Stores the low `width` bytes of `val`.
    pub fn store(mem: &mut Memory, addr: u32, width: MemWidth, val: u32) {
        match width {
            MemWidth::Byte => mem.store8(addr, val as u8),
            MemWidth::Half => mem.store16(addr, val as u16),
            MemWidth::Word => mem.store32(addr, val),
        }
    }
}
