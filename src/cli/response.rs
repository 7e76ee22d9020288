//! Response buffer for command output
//!
//! Handlers write through [`core::fmt::Write`]. Output beyond the capacity is
//! truncated, never an error, and never splits a UTF-8 character. The last byte is kept as a terminator, so at
//! most `N - 1` bytes of response are stored.

use core::fmt::Write;

use super::CliError;

/// Bounded, always-terminated response store
pub struct ResponseBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> ResponseBuffer<N> {
    /// Bytes available to a response
    pub const LIMIT: usize = N.saturating_sub(1);

    /// Create empty buffer
    pub const fn new() -> Self {
        Self { buf: [0u8; N], len: 0 }
    }

    /// Append bytes, truncating at [`Self::LIMIT`].
    ///
    /// Returns the number of bytes stored.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> usize {
        let to_copy = bytes.len().min(Self::LIMIT - self.len);
        self.buf[self.len..self.len + to_copy].copy_from_slice(&bytes[..to_copy]);
        self.len += to_copy;
        to_copy
    }

    /// Replace the contents with an error message
    pub fn set_error(&mut self, err: CliError) {
        self.clear();
        self.push_bytes(err.message().as_bytes());
    }

    /// Forget the contents, keep the storage
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Zero the storage
    pub fn reset(&mut self) {
        self.buf.fill(0);
        self.len = 0;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Get contents as string slice
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const N: usize> Default for ResponseBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Write for ResponseBuffer<N> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        // Cut on a char boundary so the contents stay valid UTF-8
        let mut cut = s.len().min(Self::LIMIT - self.len);
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.push_bytes(&s.as_bytes()[..cut]);
        Ok(())
    }
}
