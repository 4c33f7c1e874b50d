use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::keys::OneTimeKey;
use crate::{BLOCK_SIZE, SIZE};

/// Mask selecting the low 26 bits of a limb.
const LIMB_MASK: u32 = 0x3ffffff;

/// The `2^128` marker of a full block, expressed in the top limb
/// (`128 - 4 * 26 = 24`).
const FULL_BLOCK_BIT: u32 = 1 << 24;

/// Internal Poly1305 accumulator.
///
/// This structure implements the low-level Poly1305 polynomial evaluation
/// as specified in RFC 8439: every message block `m` is folded into the
/// accumulator as
///
/// ```text
/// h = (h + m) * r mod (2^130 - 5)
/// ```
///
/// and the tag is `(h + s) mod 2^128`.
///
/// Values modulo `2^130 - 5` are held as five 26-bit limbs so that every
/// limb product fits in a `u64` with room for the sums.
///
/// # Security
///
/// - This type must remain internal to the crate.
/// - Reusing an accumulator's key for a second message breaks security.
/// - All operations run in constant time with respect to the key and data.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Accumulator {
    /// Clamped `r` value, split into five 26-bit limbs.
    r: [u32; 5],

    /// Accumulator `h`, five 26-bit limbs.
    ///
    /// Between blocks `h[1]` may exceed 26 bits by a small carry; the value
    /// is only fully normalized in [`Accumulator::finalize`].
    h: [u32; 5],

    /// `s` value (second half of the key) as four little-endian words.
    s: [u32; 4],
}

impl Accumulator {
    /// Creates an accumulator from a one-time key.
    ///
    /// The key is split as follows:
    ///
    /// - `key[0..16]` → `r` (clamped, used for polynomial multiplication)
    /// - `key[16..32]` → `s` (added at finalization)
    ///
    /// Clamping clears the top four bits of bytes 3, 7, 11 and 15 and the
    /// bottom two bits of bytes 4, 8 and 12 of `r`.
    pub(crate) fn new(key: &OneTimeKey) -> Self {
        let key = key.as_bytes();

        let r0 = le_word(key, 0) & 0x0fffffff;
        let r1 = le_word(key, 4) & 0x0ffffffc;
        let r2 = le_word(key, 8) & 0x0ffffffc;
        let r3 = le_word(key, 12) & 0x0ffffffc;

        let r = [
            r0 & LIMB_MASK,
            ((r0 >> 26) | (r1 << 6)) & LIMB_MASK,
            ((r1 >> 20) | (r2 << 12)) & LIMB_MASK,
            ((r2 >> 14) | (r3 << 18)) & LIMB_MASK,
            (r3 >> 8) & LIMB_MASK,
        ];

        let s = [
            le_word(key, 16),
            le_word(key, 20),
            le_word(key, 24),
            le_word(key, 28),
        ];

        Accumulator { r, h: [0; 5], s }
    }

    /// Absorbs one full 16-byte block.
    ///
    /// The block is read as a little-endian integer with the `2^128` bit
    /// set.
    #[inline]
    pub(crate) fn absorb(&mut self, block: &[u8; BLOCK_SIZE]) {
        self.absorb_limbs(block, FULL_BLOCK_BIT);
    }

    /// Absorbs the final, partial block of a message.
    ///
    /// A single `0x01` byte is appended directly after the data and the
    /// rest of the block is zero. The `2^128` marker is not set, so a padded
    /// tail can never collide with a full block.
    ///
    /// `tail` must hold between 1 and 15 bytes.
    pub(crate) fn absorb_partial(&mut self, tail: &[u8]) {
        debug_assert!(!tail.is_empty() && tail.len() < BLOCK_SIZE);

        let mut padded = [0u8; BLOCK_SIZE];
        padded[..tail.len()].copy_from_slice(tail);
        padded[tail.len()] = 1;

        self.absorb_limbs(&padded, 0);
        padded.zeroize();
    }

    /// `h = (h + m) * r mod (2^130 - 5)`, with `hibit` the top-limb
    /// contribution of the `2^128` marker.
    fn absorb_limbs(&mut self, block: &[u8; BLOCK_SIZE], hibit: u32) {
        let t0 = le_word(block, 0);
        let t1 = le_word(block, 4);
        let t2 = le_word(block, 8);
        let t3 = le_word(block, 12);

        let h0 = (self.h[0] + (t0 & LIMB_MASK)) as u64;
        let h1 = (self.h[1] + (((t0 >> 26) | (t1 << 6)) & LIMB_MASK)) as u64;
        let h2 = (self.h[2] + (((t1 >> 20) | (t2 << 12)) & LIMB_MASK)) as u64;
        let h3 = (self.h[3] + (((t2 >> 14) | (t3 << 18)) & LIMB_MASK)) as u64;
        let h4 = (self.h[4] + ((t3 >> 8) | hibit)) as u64;

        let r0 = self.r[0] as u64;
        let r1 = self.r[1] as u64;
        let r2 = self.r[2] as u64;
        let r3 = self.r[3] as u64;
        let r4 = self.r[4] as u64;

        // 2^130 = 5 mod p, so limb products that land above the top limb
        // wrap around multiplied by 5.
        let r1_5 = r1 * 5;
        let r2_5 = r2 * 5;
        let r3_5 = r3 * 5;
        let r4_5 = r4 * 5;

        let d0 = h0 * r0 + h1 * r4_5 + h2 * r3_5 + h3 * r2_5 + h4 * r1_5;
        let mut d1 = h0 * r1 + h1 * r0 + h2 * r4_5 + h3 * r3_5 + h4 * r2_5;
        let mut d2 = h0 * r2 + h1 * r1 + h2 * r0 + h3 * r4_5 + h4 * r3_5;
        let mut d3 = h0 * r3 + h1 * r2 + h2 * r1 + h3 * r0 + h4 * r4_5;
        let mut d4 = h0 * r4 + h1 * r3 + h2 * r2 + h3 * r1 + h4 * r0;

        let mask = LIMB_MASK as u64;
        let mut c: u64;

        c = d0 >> 26;
        let mut d0 = d0 & mask;
        d1 += c;

        c = d1 >> 26;
        d1 &= mask;
        d2 += c;

        c = d2 >> 26;
        d2 &= mask;
        d3 += c;

        c = d3 >> 26;
        d3 &= mask;
        d4 += c;

        c = d4 >> 26;
        d4 &= mask;
        d0 += c * 5;

        c = d0 >> 26;
        d0 &= mask;
        d1 += c;

        self.h = [d0 as u32, d1 as u32, d2 as u32, d3 as u32, d4 as u32];
    }

    /// Computes the authentication tag for everything absorbed so far.
    ///
    /// # Algorithm
    ///
    /// 1. Final carry propagation
    /// 2. Conditional subtraction of `p = 2^130 - 5`, selected with a mask
    /// 3. Serialization of the low 128 bits of `h`
    /// 4. Addition of `s` modulo `2^128`
    ///
    /// The accumulator itself is left untouched, so the caller may keep
    /// absorbing or finalize again with identical results.
    pub(crate) fn finalize(&self) -> [u8; SIZE] {
        let mut h = self.h;
        let mut c: u32;

        c = h[1] >> 26;
        h[1] &= LIMB_MASK;
        h[2] += c;

        c = h[2] >> 26;
        h[2] &= LIMB_MASK;
        h[3] += c;

        c = h[3] >> 26;
        h[3] &= LIMB_MASK;
        h[4] += c;

        c = h[4] >> 26;
        h[4] &= LIMB_MASK;
        h[0] += c * 5;

        c = h[0] >> 26;
        h[0] &= LIMB_MASK;
        h[1] += c;

        // g = h + 5 - 2^130; the carry out of bit 130 tells whether h >= p.
        let mut g = [0u32; 5];
        g[0] = h[0] + 5;
        c = g[0] >> 26;
        g[0] &= LIMB_MASK;

        for (h_i, g_i) in h[1..].iter().zip(&mut g[1..]) {
            *g_i = h_i + c;
            c = *g_i >> 26;
            *g_i &= LIMB_MASK;
        }

        let mask = 0u32.wrapping_sub(c);

        for (h_i, g_i) in h.iter_mut().zip(&g) {
            *h_i = (*h_i & !mask) | (*g_i & mask);
        }

        let words = [
            h[0] | (h[1] << 26),
            (h[1] >> 6) | (h[2] << 20),
            (h[2] >> 12) | (h[3] << 14),
            (h[3] >> 18) | (h[4] << 8),
        ];

        let mut tag = [0u8; SIZE];
        let mut carry = 0u64;
        for (i, (word, s)) in words.iter().zip(&self.s).enumerate() {
            let sum = *word as u64 + *s as u64 + carry;
            tag[i * 4..i * 4 + 4].copy_from_slice(&(sum as u32).to_le_bytes());
            carry = sum >> 32;
        }

        h.zeroize();
        g.zeroize();

        tag
    }
}

/// Reads the little-endian `u32` starting at `offset`.
#[inline(always)]
fn le_word(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
