/// Constant-time comparison utilities.
///
/// This trait provides constant-time primitives used to check
/// authenticators without timing side-channels. Implementations must ensure
/// that execution time does not depend on the compared data.
///
/// All operations are designed to compile down to branch-free code.
pub trait ConstantTimeEq {
    /// Returns `true` if `self == other`, in constant time.
    ///
    /// This method must not introduce data-dependent branches or early exits.
    fn ct_eq(&self, other: &Self) -> bool;
}

impl ConstantTimeEq for [u8] {
    /// Constant-time equality test for byte slices.
    ///
    /// Slices of different lengths compare unequal. The length itself is not
    /// secret; only the contents are compared without early exit.
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let diff = self
            .iter()
            .zip(other)
            .map(|(a, b)| a ^ b)
            .fold(0, |acc, v| acc | v);

        // Fold the accumulated difference into a 0/1 without branching.
        (((diff as u64).wrapping_sub(1) >> 63) as u8) == 1
    }
}

impl ConstantTimeEq for [u8; 16] {
    /// Constant-time equality test for 16-byte arrays.
    ///
    /// All bytes are XORed and accumulated before comparison, ensuring that
    /// the execution time does not depend on where the first difference occurs.
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        self[..].ct_eq(&other[..])
    }
}
