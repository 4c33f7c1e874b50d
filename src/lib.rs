//! Poly1305 one-time message authentication for Nebula
//!
//! This crate provides a pure-Rust implementation of the Poly1305
//! authenticator (RFC 8439, section 2.5) as a small, standalone building
//! block of the Nebula ecosystem.
//!
//! The focus is on **clarity, predictability, and auditability**. The
//! arithmetic is written out limb by limb, no platform backend is involved,
//! and every instance is a plain value with no process-wide state.
//!
//! # Module overview
//!
//! - `mac`
//!   The authenticator itself. It is split into an internal accumulator
//!   engine (key clamping, block folding modulo `2^130 - 5`, final
//!   reduction) and the public streaming adapter [`Poly1305`], which
//!   buffers arbitrary writes into 16-byte blocks.
//!
//! - `keys`
//!   The [`OneTimeKey`] type. Length validation happens here, once, so the
//!   engine only ever sees well-formed 32-byte keys. Key material is wiped
//!   from memory when dropped.
//!
//! - `primitives`
//!   The fixed-size [`Tag`] output type and constant-time comparison
//!   helpers used to check tags without leaking timing information.
//!
//! # Security contract
//!
//! Poly1305 is a **one-time** authenticator. After a key has been used to
//! authenticate one message, tags for any other message under the same key
//! can be forged. Deriving a fresh key per message (for instance from a
//! stream cipher keystream) is the caller's responsibility.
//!
//! # Example
//!
//! ```
//! use cryptal_mac::{Poly1305, verify};
//!
//! let key = [0x42u8; 32];
//! let message = b"A message which must be authentic.";
//!
//! let mut sender = Poly1305::new(&key)?;
//! sender.write(message);
//! let tag = sender.sum(&[]);
//!
//! assert!(verify(&key, message, &tag)?);
//! # Ok::<(), cryptal_mac::MacError>(())
//! ```

mod error;

pub mod keys;
pub mod mac;
pub mod primitives;

pub use error::{MacError, Result};
pub use keys::OneTimeKey;
pub use mac::{Poly1305, auth, verify};
pub use primitives::{ConstantTimeEq, Tag};

/// Length of a Poly1305 key, in bytes.
pub const KEY_SIZE: usize = 32;

/// Length of a Poly1305 message block, in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Length of a Poly1305 tag, in bytes.
pub const SIZE: usize = 16;
