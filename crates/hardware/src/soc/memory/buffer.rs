//! Word Buffer Implementation.
//!
//! Backing storage for simulated memory: one owned, contiguous, fixed-length
//! array of 16-bit words, zero-initialized and released when dropped.

use std::ops::{Index, IndexMut};

use crate::common::constants::MEM_SIZE;

/// Fixed-size word storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBuffer {
    words: Box<[u16; MEM_SIZE]>,
}

impl WordBuffer {
    /// Creates a zeroed buffer of `MEM_SIZE` words.
    pub fn new() -> Self {
        Self {
            words: Box::new([0; MEM_SIZE]),
        }
    }

    /// Returns the number of words in the buffer.
    pub const fn len(&self) -> usize {
        MEM_SIZE
    }

    /// Always false; the buffer has a fixed non-zero length.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the buffer contents.
    pub fn as_slice(&self) -> &[u16] {
        &self.words[..]
    }

    /// Returns the buffer contents mutably.
    pub fn as_mut_slice(&mut self) -> &mut [u16] {
        &mut self.words[..]
    }

    /// Zeroes every word.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }
}

impl Default for WordBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for WordBuffer {
    type Output = u16;

    fn index(&self, idx: usize) -> &u16 {
        &self.words[idx]
    }
}

impl IndexMut<usize> for WordBuffer {
    fn index_mut(&mut self, idx: usize) -> &mut u16 {
        &mut self.words[idx]
    }
}
