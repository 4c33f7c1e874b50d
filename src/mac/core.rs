//! Streaming Poly1305 authenticator.
//!
//! This module wraps the internal accumulator in a hash-like interface:
//! bytes are written in chunks of any size, buffered into 16-byte blocks,
//! and the tag can be read at any point without disturbing the running
//! state.
//!
//! ## Notes
//!
//! - The caller must ensure a key authenticates a single message.
//! - Tags should be compared with [`verify`] or [`Tag`]'s constant-time
//!   equality, never with a short-circuiting byte comparison.

use std::fmt;
use std::io;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::engine::Accumulator;
use crate::keys::OneTimeKey;
use crate::primitives::{ConstantTimeEq, Tag};
use crate::{BLOCK_SIZE, Result, SIZE};

/// A keyed, streaming Poly1305 instance.
///
/// Writes of any size are accepted; the result only depends on the
/// concatenation of everything written since the last reset, not on how it
/// was split into calls.
///
/// # Example
///
/// ```
/// use cryptal_mac::Poly1305;
///
/// let mut mac = Poly1305::new(&[0x11u8; 32])?;
/// mac.write(b"Hello ");
/// mac.write(b"world!");
///
/// let tag = mac.sum(&[]);
/// assert_eq!(tag.len(), 16);
/// # Ok::<(), cryptal_mac::MacError>(())
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Poly1305 {
    /// Key the instance was created with, kept so [`Poly1305::reset`] can
    /// start over.
    key: OneTimeKey,

    /// Running polynomial state.
    engine: Accumulator,

    /// Bytes not yet forming a full block.
    buffer: [u8; BLOCK_SIZE],

    /// Number of valid bytes in `buffer` (always `< BLOCK_SIZE`).
    buffered: usize,
}

impl Poly1305 {
    /// Creates an authenticator from a 32-byte key.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::InvalidKeyLength`](crate::MacError::InvalidKeyLength)
    /// if `key` is not exactly 32 bytes long.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self::from_key(OneTimeKey::from_slice(key)?))
    }

    /// Creates an authenticator from an already validated key.
    pub fn from_key(key: OneTimeKey) -> Self {
        let engine = Accumulator::new(&key);

        Poly1305 {
            key,
            engine,
            buffer: [0u8; BLOCK_SIZE],
            buffered: 0,
        }
    }

    /// Adds `data` to the message being authenticated.
    ///
    /// Always consumes the whole input and returns its length. Complete
    /// blocks are absorbed immediately; a trailing remainder is held back
    /// until more data arrives or the tag is requested.
    pub fn write(&mut self, data: &[u8]) -> usize {
        let written = data.len();
        let mut data = data;

        // Top up a partially filled buffer first.
        if self.buffered > 0 {
            let take = (BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_SIZE {
                return written;
            }

            self.engine.absorb(&self.buffer);
            self.buffered = 0;
        }

        while let Some((block, rest)) = data.split_first_chunk::<BLOCK_SIZE>() {
            self.engine.absorb(block);
            data = rest;
        }

        self.buffer[..data.len()].copy_from_slice(data);
        self.buffered = data.len();

        written
    }

    /// Returns the tag of everything written so far.
    ///
    /// Buffered bytes are absorbed as the padded final block into a copy
    /// of the state; the instance itself is not modified, so calling this
    /// repeatedly yields the same tag.
    pub fn tag(&self) -> Tag {
        if self.buffered == 0 {
            return Tag(self.engine.finalize());
        }

        let mut engine = self.engine.clone();
        engine.absorb_partial(&self.buffer[..self.buffered]);

        Tag(engine.finalize())
    }

    /// Appends the current tag to `prefix` and returns the result.
    ///
    /// The returned buffer is always `prefix.len() + SIZE` bytes long. Like
    /// [`Poly1305::tag`], this does not change the running state.
    pub fn sum(&self, prefix: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(prefix.len() + SIZE);
        out.extend_from_slice(prefix);
        out.extend_from_slice(self.tag().as_bytes());

        out
    }

    /// Discards everything written and returns to the freshly keyed state.
    ///
    /// The same key is used again. Authenticating a *different* message
    /// after a reset requires [`Poly1305::rekey`] instead.
    pub fn reset(&mut self) {
        self.engine = Accumulator::new(&self.key);
        self.buffer.zeroize();
        self.buffered = 0;

        log::trace!("poly1305 state reset");
    }

    /// Installs a new key and resets the state.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::InvalidKeyLength`](crate::MacError::InvalidKeyLength)
    /// if `key` is not exactly 32 bytes long. The instance is left
    /// unchanged in that case.
    pub fn rekey(&mut self, key: &[u8]) -> Result<()> {
        self.key = OneTimeKey::from_slice(key)?;
        self.reset();

        log::trace!("poly1305 rekeyed");
        Ok(())
    }

    /// Size of the blocks the message is processed in.
    pub const fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// Number of bytes [`Poly1305::sum`] appends.
    pub const fn size(&self) -> usize {
        SIZE
    }
}

impl io::Write for Poly1305 {
    /// Never fails and always consumes the whole buffer.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(Poly1305::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for Poly1305 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Poly1305")
            .field("buffered", &self.buffered)
            .finish_non_exhaustive()
    }
}

/// Computes the Poly1305 tag of `msg` under `key` in one call.
///
/// # Errors
///
/// Returns [`MacError::InvalidKeyLength`](crate::MacError::InvalidKeyLength)
/// if `key` is not exactly 32 bytes long.
pub fn auth(key: &[u8], msg: &[u8]) -> Result<Tag> {
    let mut mac = Poly1305::new(key)?;
    mac.write(msg);

    Ok(mac.tag())
}

/// Recomputes the tag of `msg` and compares it with `expected` in
/// constant time.
///
/// An `expected` value that is not 16 bytes long never verifies.
///
/// # Errors
///
/// Returns [`MacError::InvalidKeyLength`](crate::MacError::InvalidKeyLength)
/// if `key` is not exactly 32 bytes long.
pub fn verify(key: &[u8], msg: &[u8], expected: &[u8]) -> Result<bool> {
    let tag = auth(key, msg)?;

    Ok(tag.as_bytes().ct_eq(expected))
}
