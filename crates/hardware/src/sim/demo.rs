//! Built-in demonstration program.
//!
//! Run when no image is given on the command line:
//!
//! ```text
//! 0x00: addi x1, x0, 5
//! 0x04: addi x2, x0, 10
//! 0x08: add  x3, x1, x2
//! 0x0c: beq  x0, x0, 0
//! ```
//!
//! The final branch targets itself, so the program parks the PC at `0x0c`
//! with `x3 = 15` once the cycle budget runs out.

/// Instruction words of the demonstration program.
pub const WORDS: [u32; 4] = [0x0050_0093, 0x00A0_0113, 0x0020_81B3, 0x0000_0063];

/// Address of the self-branch that ends the program.
pub const PARK_PC: u32 = 0x0c;

/// Returns the program as a little-endian byte image.
pub fn program() -> Vec<u8> {
    WORDS.iter().flat_map(|w| w.to_le_bytes()).collect()
}
