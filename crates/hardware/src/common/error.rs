//! Simulator error definitions.
//!
//! This module defines the fatal conditions of the interpreter. It provides:
//! 1. **Fatal Errors:** Conditions that stop emulation (oversized image, fetch out of bounds).
//! 2. **Host Errors:** Failures of the thin I/O layer (reading images, parsing configuration).
//! 3. **Result Alias:** A crate-wide `Result` type bound to [`SimError`].
//!
//! Non-fatal conditions (out-of-range loads and stores, writes to `x0`, unknown
//! encodings) are absorbed by the components themselves and never surface here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that terminate a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// The binary image does not fit in the emulated memory.
    #[error("binary image of {size} bytes exceeds memory capacity of {capacity} bytes")]
    ImageTooLarge {
        /// Length of the rejected image in bytes.
        size: usize,
        /// Capacity of the emulated memory in bytes.
        capacity: usize,
    },

    /// The binary image file exists but contains no bytes.
    #[error("binary image '{}' is empty", path.display())]
    EmptyImage {
        /// Path of the empty file.
        path: PathBuf,
    },

    /// The 4-byte instruction window at the program counter leaves memory.
    #[error("PC out of bounds: {pc:#010x}")]
    FetchOutOfBounds {
        /// The offending program counter.
        pc: u32,
    },

    /// Reading a file from the host failed.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type used throughout the simulator.
pub type Result<T> = std::result::Result<T, SimError>;
