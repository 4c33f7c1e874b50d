//! Poly1305 message authentication code (RFC 8439).
//!
//! This module provides the Poly1305 one-time authenticator as a
//! standalone primitive. It can be used on its own or as the MAC half of
//! an AEAD construction such as ChaCha20-Poly1305.
//!
//! The implementation is split into two layers:
//!
//! - `engine`: low-level arithmetic and block processing
//! - `core`: streaming, hash-like interface
//!
//! Only `core` is reachable from outside the crate.

/// Low-level Poly1305 accumulator.
///
/// This module contains the internal Poly1305 state machine, including:
/// - key clamping
/// - block absorption
/// - modular reduction
/// - final tag computation
///
/// It operates on fixed-size limbs and performs no allocation.
///
/// This module is cryptographically sensitive and must remain internal.
pub(crate) mod engine;

/// High-level Poly1305 interface.
///
/// This module provides the public wrapper around the accumulator:
/// - buffers arbitrary writes into 16-byte blocks
/// - pads the final partial block
/// - computes tags without consuming the running state
/// - one-shot `auth` and constant-time `verify` helpers
pub mod core;

pub use self::core::{Poly1305, auth, verify};
