//! Baby-step/giant-step discrete logarithms.
//!
//! Solves `alpha^x = beta (mod p)` in `O(sqrt(p))` time and space by the
//! meet-in-the-middle split `x = i*n - j` with `n = ceil(sqrt(p))`: the
//! giant steps `alpha^(i*n)` are tabulated once, then the baby steps
//! `alpha^j * beta` are scanned against the table.

use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{ElGamalError, Result};
use crate::modular::{mod_exp, mul_mod};

/// Finds `x` in `[0, p-1)` with `alpha^x = beta (mod p)`.
///
/// The lookup table is keyed by residue, so the sparse key domain costs
/// `O(sqrt(p))` entries rather than `O(p)` slots, and an absent residue is
/// distinguishable from one that maps to index zero. On a residue
/// collision between two giant steps the higher index wins; the baby-step
/// scan below depends on that ordering, so the table is always completed
/// before the first lookup.
///
/// # Errors
/// - [`ElGamalError::InvalidModulus`] if `p` is zero.
/// - [`ElGamalError::DiscreteLogNotFound`] if the scan exhausts without an
///   in-range exponent, e.g. when `beta` lies outside the subgroup
///   generated by `alpha`.
///
/// # Examples
/// ```
/// use elgamal_lab::discrete_log::discrete_log;
///
/// // 2^7 = 128 = 7 (mod 11)
/// assert_eq!(discrete_log(2, 7, 11), Ok(7));
/// ```
pub fn discrete_log(alpha: u64, beta: u64, p: u64) -> Result<u64> {
    if p == 0 {
        return Err(ElGamalError::InvalidModulus);
    }
    let n = ceil_sqrt(p);
    debug!("bsgs: p = {}, {} giant steps", p, n);

    // Giant steps: alpha^(i*n) mod p -> i, ascending i, last write wins.
    let giant = mod_exp(alpha, n, p)?;
    let mut table: HashMap<u64, u64> = HashMap::with_capacity(n as usize);
    let mut cur = 1 % p;
    for i in 1..=n {
        cur = mul_mod(cur, giant, p);
        table.insert(cur, i);
    }

    // Baby steps: alpha^j * beta mod p, ascending j. The first candidate
    // inside [0, p) is the answer; out-of-range candidates keep scanning.
    let mut cur = beta % p;
    for j in 0..n {
        if let Some(&i) = table.get(&cur) {
            let candidate = u128::from(i) * u128::from(n) - u128::from(j);
            if candidate < u128::from(p) {
                trace!("bsgs: hit at i = {}, j = {}", i, j);
                return Ok(candidate as u64);
            }
        }
        cur = mul_mod(cur, alpha, p);
    }

    Err(ElGamalError::DiscreteLogNotFound { alpha, beta, p })
}

/// Smallest `n` with `n * n >= p`.
fn ceil_sqrt(p: u64) -> u64 {
    let r = p.isqrt();
    if r * r == p {
        r
    } else {
        r + 1
    }
}
