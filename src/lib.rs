//! DISCLAIMER: This library is a toy exploration of the ElGamal signature
//! scheme in pure Rust. It is *EXCLUSIVELY* for demonstration and
//! educational purposes. Absolutely DO NOT use it for real cryptographic or
//! security-sensitive operations. It is not audited, not vetted, and very
//! likely insecure in practice.
//!
//! If you need ElGamal or any cryptographic operations in production,
//! please use a vetted, well-reviewed cryptography library.
//!
//! The crate covers three related computations over a prime field:
//! signature verification, private-key recovery by a baby-step/giant-step
//! discrete-logarithm search, and recovery of the ephemeral signing nonce
//! once the private key is known. [`analyze`] runs all three over a single
//! `(alpha, beta, p, m, s1, s2)` tuple.

pub mod analysis;
pub mod discrete_log;
pub mod error;
pub mod modular;
pub mod nonce;
pub mod signature;

// Re-export the analysis entry point
pub use analysis::{analyze, SignatureAnalysis};

// Re-export the discrete-log solver
pub use discrete_log::discrete_log;

// Re-export the error types
pub use error::{ElGamalError, Result};

// Re-export the modular arithmetic helpers
pub use modular::{extended_gcd, gcd, mod_exp, mod_inv, signed_mod};

// Re-export nonce recovery
pub use nonce::recover_nonce;

// Re-export the signature types and operations
pub use signature::{
    sign, verify, ElGamalKeyPair, ElGamalParams, ElGamalPublicKey, ElGamalSignature, KeyGenConfig,
};
