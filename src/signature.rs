//! DISCLAIMER: This module is a toy example of the ElGamal signature
//! scheme in pure Rust. It is *EXCLUSIVELY* for demonstration and
//! educational purposes. Absolutely DO NOT use it for real cryptographic
//! or security-sensitive operations. It is not audited, not vetted, and
//! very likely insecure in practice.
//!
//! If you need ElGamal or any cryptographic operations in production,
//! please use a vetted, well-reviewed cryptography library.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{ElGamalError, Result};
use crate::modular::{mod_exp, mod_inv, mul_mod, signed_mod};

/// ElGamal group parameters: a prime modulus `p` and a generator `alpha`.
/// In actual practice these must be carefully selected and validated; here
/// `p` is assumed prime and `1 < alpha < p` is not checked.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone)]
pub struct ElGamalParams {
    /// The prime modulus.
    pub p: u64,
    /// A generator of the multiplicative group modulo `p`.
    pub alpha: u64,
}

/// ElGamal public key: the group parameters plus `beta = alpha^x mod p`
/// for a secret exponent `x`.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone)]
pub struct ElGamalPublicKey {
    pub p: u64,
    pub alpha: u64,
    pub beta: u64,
}

/// Keypair holding the public half and the secret exponent `x`.
#[derive(Debug, Clone)]
pub struct ElGamalKeyPair {
    pub public: ElGamalPublicKey,
    pub private: u64,
}

/// A signature `(s1, s2)` over a message representative `m`.
///
/// `s1 = alpha^k mod p` for an ephemeral nonce `k`; `s2` is the response
/// half, computed modulo the group order `p - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamalSignature {
    pub s1: u64,
    pub s2: u64,
}

/// Configuration for keypair generation.
pub struct KeyGenConfig {
    /// Optional RNG seed for reproducibility in toy examples.
    pub seed: Option<u64>,
}

impl ElGamalKeyPair {
    /// Generate a keypair over `params`: secret `x` uniform in `[1, p-2]`,
    /// public `beta = alpha^x mod p`.
    ///
    /// # Errors
    /// Returns [`ElGamalError::InvalidModulus`] if `p < 3`, which leaves no
    /// room for a nontrivial exponent.
    pub fn generate(params: &ElGamalParams, config: &KeyGenConfig) -> Result<Self> {
        if params.p < 3 {
            return Err(ElGamalError::InvalidModulus);
        }
        let mut rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        let x = rng.gen_range(1..params.p - 1);
        let beta = mod_exp(params.alpha, x, params.p)?;

        Ok(ElGamalKeyPair {
            public: ElGamalPublicKey {
                p: params.p,
                alpha: params.alpha,
                beta,
            },
            private: x,
        })
    }
}

/// Sign a message representative `m` with secret key `x` and ephemeral
/// nonce `k`: `s1 = alpha^k mod p`, `s2 = k^-1 * (m - x*s1) mod (p-1)`.
///
/// The nonce must be coprime to the group order `p - 1`.
///
/// # Errors
/// Returns [`ElGamalError::NoInverseExists`] when `gcd(k, p-1) != 1`, and
/// [`ElGamalError::InvalidModulus`] if `p < 2`.
pub fn sign(params: &ElGamalParams, x: u64, m: u64, k: u64) -> Result<ElGamalSignature> {
    if params.p < 2 {
        return Err(ElGamalError::InvalidModulus);
    }
    let order = params.p - 1;

    let s1 = mod_exp(params.alpha, k, params.p)?;
    let k_inv = mod_inv(k, order)?;

    let xs1 = mul_mod(x, s1, order);
    let aux = signed_mod(i128::from(m) - i128::from(xs1), order)?;
    let s2 = mul_mod(k_inv, aux, order);

    Ok(ElGamalSignature { s1, s2 })
}

/// ElGamal verification: checks `alpha^m = beta^s1 * s1^s2 (mod p)`.
///
/// The product of the two exponentiations is reduced modulo `p` exactly
/// once before the comparison. The check is a pure function of its inputs;
/// identical inputs always yield the identical boolean.
///
/// # Errors
/// Returns [`ElGamalError::InvalidModulus`] only if the modulus is zero.
pub fn verify(public: &ElGamalPublicKey, m: u64, sig: &ElGamalSignature) -> Result<bool> {
    let v1 = mod_exp(public.alpha, m, public.p)?;
    let beta_s1 = mod_exp(public.beta, sig.s1, public.p)?;
    let s1_s2 = mod_exp(sig.s1, sig.s2, public.p)?;
    let v2 = mul_mod(beta_s1, s1_s2, public.p);
    Ok(v1 == v2)
}
