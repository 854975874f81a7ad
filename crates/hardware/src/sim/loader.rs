//! Program Image Loader.
//!
//! This module reads program images from disk and places them in memory. It performs:
//! 1. **Binary loading:** Reads a raw image file into a byte buffer.
//! 2. **Size check:** Rejects images larger than memory before anything executes.
//! 3. **Program setup:** Copies the image to address 0 and resets the machine.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::constants::MAX_IMAGE_BYTES;
use crate::common::error::LoadError;
use crate::core::Cpu;

/// Loads a raw program image from disk.
///
/// # Arguments
///
/// * `path` - Path to the image file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and [`LoadError::TooLarge`]
/// if it holds more than `MAX_IMAGE_BYTES` bytes.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(io_err)?.len();
    let size = usize::try_from(size).unwrap_or(usize::MAX);
    if size > MAX_IMAGE_BYTES {
        return Err(LoadError::TooLarge {
            path: Some(path.to_path_buf()),
            size,
            max: MAX_IMAGE_BYTES,
        });
    }

    let data = fs::read(path).map_err(io_err)?;
    // The file may have grown between the two calls.
    if data.len() > MAX_IMAGE_BYTES {
        return Err(LoadError::TooLarge {
            path: Some(path.to_path_buf()),
            size: data.len(),
            max: MAX_IMAGE_BYTES,
        });
    }
    Ok(data)
}

/// Loads a program image from disk into the machine's memory.
///
/// # Returns
///
/// The number of words loaded.
///
/// # Errors
///
/// Propagates any [`LoadError`] from reading the file; the machine is left
/// untouched in that case.
pub fn load_program(cpu: &mut Cpu, path: impl AsRef<Path>) -> Result<usize, LoadError> {
    let path = path.as_ref();
    let data = load_binary(path)?;
    let words = cpu.load_image(&data)?;
    debug!("loaded {} bytes ({words} words) from {}", data.len(), path.display());
    Ok(words)
}
