//! # hedged-ed25519
//!
//! Hedged Ed25519 signatures for protection against fault attacks.
//!
//! Deterministic Ed25519 derives its internal nonce from the secret key and
//! message alone. If an attacker can induce a fault (voltage glitch, bit
//! flip) during signing, a faulty signature over the same message can leak
//! the secret key. This library hedges against that: every signing call
//! draws a fresh 32-byte random nonce, signs `nonce || message` instead of
//! the bare message, and appends the nonce to the signature so verification
//! remains self-contained.
//!
//! ## Wire format
//!
//! A hedged signature is exactly 96 bytes: the 64-byte Ed25519 signature
//! over `nonce || message`, followed by the 32-byte nonce. There are no
//! length prefixes and no padding; the layout must be preserved bit-exactly
//! for interoperability with other implementations of this scheme.
//!
//! ## Usage
//!
//! ```
//! use hedged_ed25519::prelude::*;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> hedged_ed25519::api::Result<()> {
//! let mut rng = OsRng;
//! let (public_key, secret_key) = HedgedEd25519::keypair(&mut rng)?;
//!
//! let message = b"Hope clouds observation.";
//! let signature = HedgedEd25519::sign(message, &secret_key)?;
//!
//! assert!(HedgedEd25519::verify(message, &signature, &public_key)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from two sub-crates:
//!
//! - [`hedged-ed25519-api`](api): trait definitions and error types
//! - [`hedged-ed25519-sign`](sign): the hedged Ed25519 scheme itself

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use hedged_ed25519_api as api;
pub use hedged_ed25519_sign as sign;

/// Common imports for hedged-ed25519 users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Signature, SignatureDerive};

    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::api::SignatureSerialize;

    // Re-export the scheme and its types
    pub use crate::sign::{HedgedEd25519, HedgedPublicKey, HedgedSecretKey, HedgedSignature};

    // Re-export size parameters
    pub use crate::sign::hedged::constants::{
        CORE_SIGNATURE_SIZE, NONCE_SIZE, PUBLIC_KEY_SIZE, SECRET_KEY_SIZE, SIGNATURE_SIZE,
    };
}
