//! Poly1305 key material.
//!
//! This module defines the one-time key consumed by the authenticator and
//! is the single place where key length is validated. Everything past this
//! boundary works on a fixed `[u8; 32]` and cannot fail.
//!
//! ## Layout
//!
//! A Poly1305 key is 256 bits, split into two halves:
//!
//! - `key[0..16]` → `r`, the evaluation point of the polynomial. It is
//!   clamped by the engine before use.
//! - `key[16..32]` → `s`, a mask added to the result at finalization.
//!
//! ## One-time use
//!
//! A key must authenticate **at most one message**. Two tags produced
//! under the same key reveal enough about `r` to forge tags for other
//! messages. Nothing in this type can enforce that; it only makes sure the
//! bytes do not outlive the value holding them.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{KEY_SIZE, MacError, Result};

/// A 32-byte Poly1305 one-time key.
///
/// The key bytes are wiped from memory when the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct OneTimeKey([u8; KEY_SIZE]);

impl OneTimeKey {
    /// Builds a key from an arbitrary byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::InvalidKeyLength`] unless `key` is exactly
    /// [`KEY_SIZE`] bytes long. Shorter or longer input is never padded or
    /// truncated.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_SIZE] = key.try_into().map_err(|_| {
            log::debug!("rejected poly1305 key of {} bytes", key.len());
            MacError::InvalidKeyLength { len: key.len() }
        })?;

        Ok(Self(bytes))
    }

    /// Returns the raw key bytes.
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for OneTimeKey {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        OneTimeKey(value)
    }
}

impl TryFrom<&[u8]> for OneTimeKey {
    type Error = MacError;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::from_slice(value)
    }
}

impl fmt::Debug for OneTimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OneTimeKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exactly_32_bytes() {
        let key = OneTimeKey::from_slice(&[7u8; 32]).unwrap();
        assert_eq!(key.as_bytes(), &[7u8; 32]);
    }

    #[test]
    fn rejects_other_lengths() {
        for len in [0usize, 1, 16, 31, 33, 64] {
            let err = OneTimeKey::from_slice(&vec![0u8; len]).unwrap_err();
            assert_eq!(err, MacError::InvalidKeyLength { len });
        }
    }

    #[test]
    fn debug_hides_key_bytes() {
        let key = OneTimeKey::from([0xABu8; 32]);
        assert_eq!(format!("{key:?}"), "OneTimeKey(..)");
    }
}
