//! Primitive types
//!
//! This module defines the low-level output and comparison types used by
//! the authenticator.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks that
//! provide well-defined semantics and predictable behavior.
//!
//! Current primitives include:
//! - `Tag`: the 128-bit Poly1305 authenticator
//! - `ConstantTimeEq`: branch-free equality for secret-dependent data

mod ct;
mod tag;

pub use ct::ConstantTimeEq;
pub use tag::Tag;
