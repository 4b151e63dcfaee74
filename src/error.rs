//! Error types shared by the ElGamal analysis modules.

use thiserror::Error;

/// Errors reported by the numeric engine.
///
/// All of these are recoverable conditions surfaced to the caller. None of
/// the search routines falls back to a placeholder value on failure: a
/// missing inverse is an error, not `1`, and an unverified nonce candidate
/// is an error, not a stale guess.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElGamalError {
    /// A zero or otherwise degenerate modulus was passed to a modular
    /// operation.
    #[error("invalid or degenerate modulus")]
    InvalidModulus,

    /// No modular inverse exists because `gcd(value, modulo) != 1`.
    #[error("{value} has no inverse modulo {modulo}")]
    NoInverseExists { value: u64, modulo: u64 },

    /// The baby-step/giant-step scan exhausted its range without a hit.
    #[error("no exponent x with {alpha}^x = {beta} (mod {p})")]
    DiscreteLogNotFound { alpha: u64, beta: u64, p: u64 },

    /// None of the candidate nonces reproduced the signature component `s1`.
    #[error("none of the {candidates} candidate nonces matches the signature")]
    NonceRecoveryFailed { candidates: u64 },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ElGamalError>;
