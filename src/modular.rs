//! Modular arithmetic over fixed-width integers.
//!
//! Group elements are `u64`; every intermediate product is widened to
//! `u128` so that `(modulo - 1)^2` cannot overflow.

use num_integer::Integer;

use crate::error::{ElGamalError, Result};

/// Computes `base^exponent mod modulo` by square-and-multiply over the
/// binary expansion of `exponent`.
///
/// The result is in `[0, modulo)`, and `mod_exp(b, 0, m)` is `1 % m`.
///
/// # Errors
/// Returns [`ElGamalError::InvalidModulus`] if `modulo` is zero.
pub fn mod_exp(base: u64, exponent: u64, modulo: u64) -> Result<u64> {
    if modulo == 0 {
        return Err(ElGamalError::InvalidModulus);
    }
    let m = u128::from(modulo);
    let mut result = 1 % m;
    let mut x = u128::from(base) % m;
    let mut e = exponent;
    while e > 0 {
        if e & 1 == 1 {
            result = result * x % m;
        }
        x = x * x % m;
        e >>= 1;
    }
    Ok(result as u64)
}

/// Least non-negative representative of `value` modulo `modulo`.
///
/// Unlike the `%` operator, this is correct for every negative `value`.
///
/// # Errors
/// Returns [`ElGamalError::InvalidModulus`] if `modulo` is zero.
pub fn signed_mod(value: i128, modulo: u64) -> Result<u64> {
    if modulo == 0 {
        return Err(ElGamalError::InvalidModulus);
    }
    let m = i128::from(modulo);
    Ok((((value % m) + m) % m) as u64)
}

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(a, 0)` and `gcd(0, b)` return the nonzero operand; `gcd(0, 0)`
/// is zero.
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Iterative extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `a*x + b*y == g`. For non-negative inputs,
/// `g` is the greatest common divisor of `a` and `b`.
pub fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    let mut a = a;
    let mut b = b;
    let mut x0 = 1_i128;
    let mut x1 = 0_i128;
    let mut y0 = 0_i128;
    let mut y1 = 1_i128;

    while b != 0 {
        let (q, r) = a.div_rem(&b);
        a = b;
        b = r;

        let tmpx = x0 - q * x1;
        x0 = x1;
        x1 = tmpx;

        let tmpy = y0 - q * y1;
        y0 = y1;
        y1 = tmpy;
    }
    (a, x0, y0)
}

/// Modular inverse of `a` modulo `modulo` via the extended Euclidean
/// algorithm, in `O(log modulo)` steps.
///
/// # Errors
/// Returns [`ElGamalError::NoInverseExists`] when `gcd(a, modulo) != 1`,
/// and [`ElGamalError::InvalidModulus`] if `modulo` is zero.
pub fn mod_inv(a: u64, modulo: u64) -> Result<u64> {
    if modulo == 0 {
        return Err(ElGamalError::InvalidModulus);
    }
    let (g, s, _) = extended_gcd(i128::from(a), i128::from(modulo));
    if g != 1 {
        return Err(ElGamalError::NoInverseExists { value: a, modulo });
    }
    signed_mod(s, modulo)
}

/// `a * b mod modulo` without overflow. Callers guarantee a nonzero modulus.
pub(crate) fn mul_mod(a: u64, b: u64, modulo: u64) -> u64 {
    (u128::from(a) * u128::from(b) % u128::from(modulo)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_exp_basic() {
        assert_eq!(mod_exp(5, 6, 23).unwrap(), 8);
        assert_eq!(mod_exp(2, 7, 11).unwrap(), 7);
        assert_eq!(mod_exp(5, 3, 23).unwrap(), 10);
    }

    #[test]
    fn test_mod_exp_zero_exponent() {
        assert_eq!(mod_exp(7, 0, 13).unwrap(), 1);
        // modulo 1 collapses everything to zero, including the empty product
        assert_eq!(mod_exp(7, 0, 1).unwrap(), 0);
    }

    #[test]
    fn test_mod_exp_zero_modulus_is_an_error() {
        assert_eq!(mod_exp(2, 3, 0), Err(ElGamalError::InvalidModulus));
    }

    #[test]
    fn test_mod_exp_near_word_size_does_not_overflow() {
        // 2^64 - 59 is prime, so 2^64 mod (2^64 - 59) = 59. The squarings
        // on the way there exercise the full u128 intermediate width.
        let p = 18_446_744_073_709_551_557_u64;
        assert_eq!(mod_exp(2, 64, p).unwrap(), 59);
    }

    #[test]
    fn test_signed_mod_handles_negatives() {
        assert_eq!(signed_mod(-53, 22).unwrap(), 13);
        assert_eq!(signed_mod(-66, 22).unwrap(), 0);
        assert_eq!(signed_mod(-1, 5).unwrap(), 4);
        assert_eq!(signed_mod(7, 22).unwrap(), 7);
        assert_eq!(signed_mod(0, 1).unwrap(), 0);
    }

    #[test]
    fn test_signed_mod_zero_modulus_is_an_error() {
        assert_eq!(signed_mod(-5, 0), Err(ElGamalError::InvalidModulus));
    }

    #[test]
    fn test_gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(4, 22), 2);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_gcd_is_symmetric_and_handles_zero() {
        for (a, b) in [(0, 9), (9, 0), (14, 21), (1_000_000_000, 3), (2, 1 << 40)] {
            assert_eq!(gcd(a, b), gcd(b, a));
        }
        for a in 0..20 {
            assert_eq!(gcd(a, 0), a);
        }
    }

    #[test]
    fn test_extended_gcd_bezout_identity() {
        for (a, b) in [(240, 46), (46, 240), (7, 11), (0, 5), (12, 0), (35, 64)] {
            let (g, x, y) = extended_gcd(a, b);
            assert_eq!(a * x + b * y, g, "Bezout identity for ({}, {})", a, b);
            assert_eq!(g, i128::from(gcd(a as u64, b as u64)));
        }
    }

    #[test]
    fn test_mod_inv_known_values() {
        assert_eq!(mod_inv(3, 22).unwrap(), 15);
        assert_eq!(mod_inv(19, 22).unwrap(), 7);
        assert_eq!(mod_inv(2, 11).unwrap(), 6);
    }

    #[test]
    fn test_mod_inv_product_is_one() {
        let m = 53;
        for a in 1..m {
            let inv = mod_inv(a, m).unwrap();
            assert_eq!(mul_mod(a, inv, m), 1, "{} * {} != 1 (mod {})", a, inv, m);
        }
    }

    #[test]
    fn test_mod_inv_absent_inverse_is_an_error() {
        assert_eq!(
            mod_inv(4, 8),
            Err(ElGamalError::NoInverseExists { value: 4, modulo: 8 })
        );
        assert_eq!(
            mod_inv(6, 22),
            Err(ElGamalError::NoInverseExists { value: 6, modulo: 22 })
        );
        assert_eq!(mod_inv(5, 0), Err(ElGamalError::InvalidModulus));
    }
}
