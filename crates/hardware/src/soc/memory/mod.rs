//! Simulated Memory.
//!
//! This module implements the single memory of the machine, holding code and
//! data alike. It provides:
//! 1. **Buffer:** Backing storage for the words.
//! 2. **Memory:** Checked word access by address.
//! 3. **Image Loading:** Copying a raw program image to address 0.

/// Fixed-size word buffer.
pub mod buffer;

use self::buffer::WordBuffer;
use crate::common::WordAddr;
use crate::common::constants::{MAX_IMAGE_BYTES, MEM_SIZE};
use crate::common::error::LoadError;
use crate::config::ByteOrder;

/// The machine's memory: `MEM_SIZE` words, word-addressed from 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory {
    buffer: WordBuffer,
}

impl Memory {
    /// Creates a zeroed memory.
    pub fn new() -> Self {
        Self {
            buffer: WordBuffer::new(),
        }
    }

    /// Reads the word at `addr`, or `None` when `addr` is outside memory.
    pub fn read(&self, addr: WordAddr) -> Option<u16> {
        addr.index().map(|i| self.buffer[i])
    }

    /// Writes the word at `addr`. Returns `false`, leaving memory untouched,
    /// when `addr` is outside memory.
    pub fn write(&mut self, addr: WordAddr, val: u16) -> bool {
        match addr.index() {
            Some(i) => {
                self.buffer[i] = val;
                true
            }
            None => false,
        }
    }

    /// Returns the full memory contents, address 0 first.
    pub fn as_slice(&self) -> &[u16] {
        self.buffer.as_slice()
    }

    /// Copies a raw program image into memory starting at address 0.
    ///
    /// Memory is cleared first. Bytes are paired into words using `order`; an odd
    /// trailing byte becomes the low byte of the final word.
    ///
    /// # Returns
    ///
    /// The number of words written.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the image exceeds `MAX_IMAGE_BYTES`; memory
    /// is left unchanged in that case.
    pub fn load_bytes(&mut self, image: &[u8], order: ByteOrder) -> Result<usize, LoadError> {
        if image.len() > MAX_IMAGE_BYTES {
            return Err(LoadError::TooLarge {
                path: None,
                size: image.len(),
                max: MAX_IMAGE_BYTES,
            });
        }

        self.buffer.clear();
        let words = self.buffer.as_mut_slice();
        let mut count = 0;
        for (slot, chunk) in words.iter_mut().zip(image.chunks(2)) {
            *slot = match (chunk, order) {
                ([lo, hi], ByteOrder::Little) => u16::from_le_bytes([*lo, *hi]),
                ([hi, lo], ByteOrder::Big) => u16::from_be_bytes([*hi, *lo]),
                ([last], _) => u16::from(*last),
                _ => 0,
            };
            count += 1;
        }
        debug_assert!(count <= MEM_SIZE);
        Ok(count)
    }
}
