//! Recovery of the ephemeral signing nonce from a known private key.
//!
//! A valid ElGamal signature satisfies `m = x*s1 + k*s2 (mod p-1)`. With
//! the private key `x` in hand, the congruence `k*s2 = m - x*s1 (mod p-1)`
//! can be solved for the nonce `k`. When `gcd(s2, p-1) = c > 1` the
//! single-inverse shortcut is invalid and the solution set splits into `c`
//! congruence classes modulo `p-1`; each class is tested against the public
//! relation `alpha^k mod p = s1` to pick out the true nonce.

use log::debug;

use crate::error::{ElGamalError, Result};
use crate::modular::{gcd, mod_exp, mod_inv, mul_mod, signed_mod};
use crate::signature::ElGamalParams;

/// Recomputes the nonce `k` that produced `s1` in a signature `(s1, s2)`
/// over `m`, given the private key `x`.
///
/// With `gcd(s2, p-1) = 1` the answer is unique and reduced into
/// `[0, p-1)`. Otherwise the `c` candidate classes are enumerated in
/// ascending order and the first one whose exponent reproduces `s1` is
/// returned.
///
/// # Errors
/// - [`ElGamalError::InvalidModulus`] if `p < 2`.
/// - [`ElGamalError::NoInverseExists`] propagated from the inverse step.
/// - [`ElGamalError::NonceRecoveryFailed`] when no candidate class
///   reproduces `s1`; the last unverified candidate is never returned.
pub fn recover_nonce(params: &ElGamalParams, x: u64, m: u64, s1: u64, s2: u64) -> Result<u64> {
    if params.p < 2 {
        return Err(ElGamalError::InvalidModulus);
    }
    let order = params.p - 1;

    let xs1 = mul_mod(x, s1, order);
    let aux = signed_mod(i128::from(m) - i128::from(xs1), order)?;

    let c = gcd(s2, order);
    if c == 1 {
        let s2_inv = mod_inv(s2, order)?;
        return Ok(mul_mod(s2_inv, aux, order));
    }

    // c > 1: factor c out of the congruence and solve in the reduced
    // modulus (p-1)/c, where s2/c is coprime by construction. The base
    // solution kt fans out into c classes kt + i*(p-1)/c, and only the
    // public relation alpha^k = s1 (mod p) can tell them apart.
    let modulo2 = order / c;
    let s2_inv = mod_inv(s2 / c, modulo2)?;
    let kt = mul_mod((aux / c) % modulo2, s2_inv, modulo2);
    debug!("nonce recovery: c = {}, base solution {} (mod {})", c, kt, modulo2);

    for i in 1..=c {
        let k = kt + i * modulo2;
        if mod_exp(params.alpha, k, params.p)? == s1 {
            return Ok(k);
        }
    }

    Err(ElGamalError::NonceRecoveryFailed { candidates: c })
}
