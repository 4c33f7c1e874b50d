use std::fmt::{Debug, Display, Formatter, LowerHex, Result};

use crate::SIZE;
use crate::primitives::ConstantTimeEq;

/// A 128-bit Poly1305 authentication tag.
///
/// Equality is constant-time, so comparing a received tag against a
/// recomputed one with `==` does not leak the position of the first
/// mismatching byte.
#[derive(Copy, Clone, Default, Eq)]
pub struct Tag(pub(crate) [u8; SIZE]);

impl Tag {
    /// Returns the tag bytes in little-endian order.
    pub const fn to_bytes(self) -> [u8; SIZE] {
        self.0
    }

    /// Returns the tag as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0)
    }
}

impl ConstantTimeEq for Tag {
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0)
    }
}

impl From<Tag> for [u8; SIZE] {
    fn from(value: Tag) -> Self {
        value.0
    }
}

impl From<[u8; SIZE]> for Tag {
    fn from(value: [u8; SIZE]) -> Self {
        Tag(value)
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl LowerHex for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        LowerHex::fmt(self, f)
    }
}

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Tag({:x})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lower_hex_little_endian() {
        let mut bytes = [0u8; SIZE];
        bytes[0] = 0xA6;
        bytes[15] = 0x0F;

        assert_eq!(
            Tag::from(bytes).to_string(),
            "a600000000000000000000000000000f"
        );
    }

    #[test]
    fn equality_compares_every_byte() {
        let a = Tag::from([1u8; SIZE]);
        let mut bytes = [1u8; SIZE];
        bytes[SIZE - 1] = 2;

        assert_eq!(a, Tag::from([1u8; SIZE]));
        assert_ne!(a, Tag::from(bytes));
    }
}
