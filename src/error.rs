//! Error type shared by the MAC and key APIs.

use thiserror::Error;

use crate::KEY_SIZE;

/// Errors that can occur when keying a Poly1305 instance.
///
/// Block absorption and tag computation are total and never fail; the only
/// failure mode of this crate is being handed key material of the wrong size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MacError {
    /// The supplied key is not exactly [`KEY_SIZE`] bytes long.
    #[error("invalid poly1305 key length: expected {expected} bytes, got {len}", expected = KEY_SIZE)]
    InvalidKeyLength {
        /// Length of the rejected key, in bytes.
        len: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, MacError>;
