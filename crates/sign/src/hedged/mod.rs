//! Hedged Ed25519 implementation
//!
//! Deterministic Ed25519 signatures are a fault-attack target: glitching
//! the computation while re-signing the same message yields a faulty
//! signature that can leak the secret scalar. The hedged construction
//! signs `nonce || message` with a fresh 32-byte random nonce on every
//! call and transmits the nonce in the last 32 bytes of the signature, so
//! two faulted signing attempts never share intermediate values while
//! verification stays self-contained.
//!
//! # Features
//!
//! - Fresh hedging nonce per signing call, never reused or persisted
//! - Fixed 96-byte wire format: 64-byte Ed25519 signature, then the nonce
//! - Secret key material zeroized on drop
//! - Exact-size input validation before any cryptographic work
//!
//! # Example
//!
//! ```
//! use hedged_ed25519_sign::hedged::HedgedEd25519;
//! use api::Signature;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> api::Result<()> {
//! let mut rng = OsRng;
//! let (public_key, secret_key) = HedgedEd25519::keypair(&mut rng)?;
//!
//! let message = b"Hello, hedged Ed25519!";
//! let signature = HedgedEd25519::sign(message, &secret_key)?;
//!
//! assert!(HedgedEd25519::verify(message, &signature, &public_key)?);
//! # Ok(())
//! # }
//! ```

pub mod constants;

mod ed25519;

// Re-export the scheme and its types
pub use ed25519::{HedgedEd25519, HedgedPublicKey, HedgedSecretKey, HedgedSignature};
