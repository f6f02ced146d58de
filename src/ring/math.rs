//! Implementation of ring ops using modular arithmetic.

use crate::errors::HillCipherError;
use crate::ring::ALPHABET_MODULUS;

use super::extended_gcd;

use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_m using modular arithmetic.
///
/// The cipher itself always works in Z_26 (see [`Ring::alphabet`]); the
/// modulus stays a parameter so the arithmetic can be tested in isolation.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, HillCipherError> {
        if modulus <= 1 {
            return Err(HillCipherError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// The ring Z_26 every letter residue lives in.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// assert_eq!(Ring::alphabet().modulus(), 26);
    /// ```
    pub fn alphabet() -> Self {
        Ring {
            modulus: ALPHABET_MODULUS,
        }
    }

    /// Returns the modulus of the ring.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.normalize(27), 1);
    /// assert_eq!(ring.normalize(-3), 23);
    /// assert_eq!(ring.normalize(0), 0);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        let rem = value % m;
        if rem < 0 {
            return rem + m;
        }

        rem
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.add(20, 10), 4);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_add(b_norm))
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.sub(7, 5), 2);
    /// assert_eq!(ring.sub(3, 5), 24);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_sub(b_norm))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication
    /// before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.mul(5, 6), 4); // 30 mod 26 = 4
    /// assert_eq!(ring.mul(-2, 6), 14); // -12 mod 26 = 14
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        self.normalize(result as i64)
    }

    /// Computes the additive inverse `-a mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.neg(3), 23);
    /// assert_eq!(ring.neg(0), 0);
    /// assert_eq!(ring.neg(23), 3);
    /// assert!(ring.add(3, ring.neg(3)) == 0);
    /// ```
    pub fn neg(&self, a: i64) -> i64 {
        if a == 0 {
            return 0;
        }

        self.normalize((-(a as i128) % self.modulus as i128) as _)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`. In Z_26
    /// that excludes every even residue and 13. Uses the Extended
    /// Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NoModularInverse` if the inverse does not
    /// exist (i.e., `gcd(a, modulus) != 1`), or if `a` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.inv(9).unwrap(), 3); // 9 * 3 = 27 = 1 mod 26
    /// assert_eq!(ring.inv(25).unwrap(), 25);
    /// assert!(ring.inv(2).is_err()); // gcd(2, 26) = 2
    /// assert!(ring.inv(13).is_err()); // gcd(13, 26) = 13
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, HillCipherError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(HillCipherError::NoModularInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let (g, x, _) = extended_gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(HillCipherError::NoModularInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(self.normalize(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_creation() {
        assert!(Ring::try_with(26).is_ok());
        assert!(Ring::try_with(2).is_ok());
        assert!(Ring::try_with(1).is_err());
        assert!(Ring::try_with(0).is_err());
    }

    #[test]
    fn test_element_normalization() {
        let ring = Ring::alphabet();
        assert_eq!(ring.normalize(5), 5);
        assert_eq!(ring.normalize(31), 5);
        assert_eq!(ring.normalize(-21), 5);
        assert_eq!(ring.normalize(-26), 0);
    }

    #[test]
    fn test_addition_and_subtraction() {
        let ring = Ring::alphabet();
        assert_eq!(ring.add(19, 9), 2);
        assert_eq!(ring.add(-3, 8), 5);
        assert_eq!(ring.sub(5, 8), 23);
        assert_eq!(ring.sub(8, 5), 3);
    }

    #[test]
    fn test_multiplication() {
        let ring = Ring::alphabet();
        assert_eq!(ring.mul(5, 8), 14);
        assert_eq!(ring.mul(-2, 8), 10);
        assert_eq!(ring.mul(13, 2), 0);
    }

    #[test]
    fn test_negation() {
        let ring = Ring::alphabet();
        assert_eq!(ring.neg(5), 21);
        assert_eq!(ring.neg(0), 0);
        assert_eq!(ring.neg(-3), 3);
        // i64::MIN = 2 mod 26, so its additive inverse is 24.
        assert_eq!(ring.neg(i64::MIN), 24);
        for a in 0..26 {
            assert_eq!(ring.add(a, ring.neg(a)), 0);
        }
    }

    #[test]
    fn test_inversion_units_only() {
        let ring = Ring::alphabet();
        // Spot-check the classic Hill pairs.
        assert_eq!(ring.inv(9).unwrap(), 3);
        assert_eq!(ring.inv(3).unwrap(), 9);
        assert_eq!(ring.inv(1).unwrap(), 1);

        // Every unit of Z_26 must invert; every non-unit must fail.
        for a in 1..26 {
            let invertible = crate::ring::gcd(a, 26) == 1;
            match ring.inv(a) {
                Ok(inv) => {
                    assert!(invertible);
                    assert_eq!(ring.mul(a, inv), 1);
                }
                Err(HillCipherError::NoModularInverse(_)) => assert!(!invertible),
                Err(e) => panic!("unexpected error: {e:?}"),
            }
        }
    }
}
