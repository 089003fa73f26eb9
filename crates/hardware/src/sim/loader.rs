//! Binary Loader.
//!
//! Reads flat program images from disk. Images are uninterpreted bytes that
//! are copied to address 0 by [`Memory::load_image`](crate::soc::Memory::load_image);
//! no header or section format is recognized.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::{Result, SimError};

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read and
/// [`SimError::EmptyImage`] if it contains no bytes.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if data.is_empty() {
        return Err(SimError::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    info!("loaded {} bytes from {}", data.len(), path.display());
    Ok(data)
}
