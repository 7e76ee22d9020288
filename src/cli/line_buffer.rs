//! Line buffer for interpreter input
//!
//! Fixed capacity, two cursors: `write_index` for appends, `read_index` for
//! echo. Always `read_index <= write_index <= N`.

use super::CliError;

/// Check whether a byte belongs to the input alphabet.
///
/// Printable ASCII plus CR and LF; everything else is dropped on input.
#[inline]
pub const fn is_accepted(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n' | 0x20..=0x7E)
}

/// Command line buffer
pub struct LineBuffer<const N: usize> {
    buf: [u8; N],
    write_idx: usize,
    read_idx: usize,
}

impl<const N: usize> LineBuffer<N> {
    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            write_idx: 0,
            read_idx: 0,
        }
    }

    /// Append the accepted bytes of `input`.
    ///
    /// Returns the number of bytes stored. Filling the last slot is an
    /// overflow: the rest of `input` is abandoned and the bytes stored so far
    /// are kept.
    pub fn append(&mut self, input: &[u8]) -> Result<usize, CliError> {
        let mut stored = 0;

        for &byte in input.iter().filter(|&&b| is_accepted(b)) {
            if self.write_idx >= N {
                return Err(CliError::CommandOverflow);
            }

            self.buf[self.write_idx] = byte;
            self.write_idx += 1;
            stored += 1;

            if self.write_idx >= N {
                return Err(CliError::CommandOverflow);
            }
        }

        Ok(stored)
    }

    /// Offset of the first occurrence of `needle`, scanning from the start.
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }

        self.as_bytes()
            .windows(needle.len())
            .position(|window| window == needle)
    }

    /// Bytes appended but not yet echoed
    pub fn unechoed(&self) -> &[u8] {
        &self.buf[self.read_idx..self.write_idx]
    }

    /// Move the echo cursor, clamped to the write cursor.
    pub fn set_read_index(&mut self, idx: usize) {
        self.read_idx = idx.min(self.write_idx);
    }

    /// Zero the storage and rewind both cursors
    pub fn reset(&mut self) {
        self.buf.fill(0);
        self.write_idx = 0;
        self.read_idx = 0;
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.write_idx]
    }

    pub fn read_index(&self) -> usize {
        self.read_idx
    }

    pub fn write_index(&self) -> usize {
        self.write_idx
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.write_idx
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.write_idx == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
