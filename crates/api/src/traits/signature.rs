//! Digital signature traits for hedged-ed25519
//!
//! This module defines the traits a signature scheme must implement. The
//! design prioritizes security by not requiring mutable byte access to
//! secret keys.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

#[cfg(any(feature = "std", feature = "alloc"))]
use zeroize::Zeroizing;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Core trait for digital signature schemes
///
/// # Type Safety
///
/// Secret keys are opaque types that cannot be directly manipulated as
/// bytes. This prevents common vulnerabilities where key material is
/// accidentally modified or exposed.
///
/// # Verification contract
///
/// `verify` returns `Ok(false)` for a cryptographically invalid signature;
/// it never turns an invalid signature into an error. `Err` is reserved for
/// precondition violations and failures internal to the scheme, so callers
/// must branch on the boolean, not on the error channel.
pub trait Signature {
    /// Public key type for this scheme
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    ///
    /// # Security Note
    ///
    /// This type should not implement `AsMut<[u8]>` to prevent corruption
    /// of key material. Use explicit serialization methods if needed.
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type (typically a tuple of public and secret keys)
    type KeyPair;

    /// Returns the name of this signature scheme
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    ///
    /// # Security Requirements
    ///
    /// Implementations must use the provided cryptographically secure RNG
    /// for all random number generation.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message with the given secret key
    ///
    /// # Security Requirements
    ///
    /// Hedged schemes must draw any per-call randomness from a
    /// cryptographically secure source; a predictable or reused hedging
    /// nonce reintroduces the fault-attack exposure of the underlying
    /// deterministic scheme.
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    ///
    /// Returns `Ok(true)` when the signature is valid, `Ok(false)` when it
    /// is cryptographically invalid, and `Err` only for precondition
    /// violations.
    ///
    /// # Security Requirements
    ///
    /// Must not branch on the boolean outcome in a timing-observable way
    /// beyond what the underlying primitive's verify routine guarantees.
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool>;
}

/// Optional trait for signature schemes that support key serialization
///
/// This trait should only be implemented for schemes where key
/// import/export is safe and well-defined. All sizes are compile-time
/// constants; deserialization must reject input of any other length before
/// touching key material.
#[cfg(any(feature = "std", feature = "alloc"))]
pub trait SignatureSerialize: Signature {
    /// Size of serialized public keys in bytes
    const PUBLIC_KEY_SIZE: usize;

    /// Size of serialized secret keys in bytes
    const SECRET_KEY_SIZE: usize;

    /// Size of serialized signatures in bytes
    const SIGNATURE_SIZE: usize;

    /// Export a public key to bytes
    fn serialize_public_key(key: &Self::PublicKey) -> Vec<u8>;

    /// Import a public key from bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not exactly `PUBLIC_KEY_SIZE` long
    fn deserialize_public_key(bytes: &[u8]) -> Result<Self::PublicKey>;

    /// Export a secret key to bytes
    ///
    /// # Security Warning
    ///
    /// The returned bytes contain sensitive key material. The `Zeroizing`
    /// wrapper ensures they are cleared from memory when dropped.
    fn serialize_secret_key(key: &Self::SecretKey) -> Zeroizing<Vec<u8>>;

    /// Import a secret key from bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not exactly `SECRET_KEY_SIZE` long
    fn deserialize_secret_key(bytes: &[u8]) -> Result<Self::SecretKey>;

    /// Export a signature to bytes
    fn serialize_signature(sig: &Self::SignatureData) -> Vec<u8>;

    /// Import a signature from bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not exactly `SIGNATURE_SIZE` long
    fn deserialize_signature(bytes: &[u8]) -> Result<Self::SignatureData>;
}

/// Optional trait for signature schemes that support key derivation
///
/// This trait is for schemes that can derive keys from seed material in a
/// deterministic way.
pub trait SignatureDerive: Signature {
    /// Minimum seed size in bytes
    const MIN_SEED_SIZE: usize;

    /// Derive a key pair from seed material
    ///
    /// # Security Requirements
    ///
    /// - The seed must have sufficient entropy
    /// - Derivation must be deterministic
    /// - Same seed must always produce same key pair
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is too short or invalid
    fn derive_keypair(seed: &[u8]) -> Result<Self::KeyPair>;

    /// Derive the public key from a secret key
    ///
    /// This is useful when you have a secret key and need to recover the
    /// corresponding public key.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret key is invalid
    fn derive_public_key(secret_key: &Self::SecretKey) -> Result<Self::PublicKey>;
}
