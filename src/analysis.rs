//! The six-integer analysis boundary.
//!
//! Callers hand over `(alpha, beta, p, m, s1, s2)` and get back the three
//! computed results: whether the signature verifies, the private key found
//! by the discrete-log search, and the ephemeral nonce derived from that
//! key. Presentation of the results is the caller's concern.

use crate::discrete_log::discrete_log;
use crate::error::{ElGamalError, Result};
use crate::nonce::recover_nonce;
use crate::signature::{verify, ElGamalParams, ElGamalPublicKey, ElGamalSignature};

/// Outcome of analyzing one signature tuple.
///
/// Verification is a plain boolean; the two searches each carry their own
/// result, so one failing does not mask the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureAnalysis {
    /// Whether the ElGamal verification equation holds.
    pub verified: bool,
    /// The private key recovered by the baby-step/giant-step search.
    pub private_key: Result<u64>,
    /// The ephemeral nonce derived from the recovered private key.
    pub nonce: Result<u64>,
}

/// Runs verification, private-key recovery, and nonce recovery over a
/// single signature tuple.
///
/// Everything is re-derived from the six inputs on every call; nothing is
/// cached between invocations. Nonce recovery consumes the recovered
/// private key, so a failed discrete log leaves the nonce slot carrying
/// that same error. The verification outcome feeds neither search.
///
/// # Errors
/// Only a degenerate modulus (`p < 2`) fails the call as a whole; the two
/// searches report their failures inside [`SignatureAnalysis`].
pub fn analyze(
    alpha: u64,
    beta: u64,
    p: u64,
    m: u64,
    s1: u64,
    s2: u64,
) -> Result<SignatureAnalysis> {
    if p < 2 {
        return Err(ElGamalError::InvalidModulus);
    }

    let params = ElGamalParams { p, alpha };
    let public = ElGamalPublicKey { p, alpha, beta };
    let sig = ElGamalSignature { s1, s2 };

    let verified = verify(&public, m, &sig)?;
    let private_key = discrete_log(alpha, beta, p);
    let nonce = match &private_key {
        Ok(x) => recover_nonce(&params, *x, m, s1, s2),
        Err(e) => Err(e.clone()),
    };

    Ok(SignatureAnalysis {
        verified,
        private_key,
        nonce,
    })
}
