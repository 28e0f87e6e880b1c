//! Hedged Ed25519 signature scheme
//!
//! The scheme delegates all curve arithmetic to `ed25519-dalek` and owns
//! only the hedging transform: nonce generation, payload binding, and the
//! fixed-offset wire layout of the hedged signature.

use super::constants::{
    CORE_SIGNATURE_SIZE, NONCE_SIZE, PUBLIC_KEY_SIZE, SECRET_KEY_SIZE, SIGNATURE_SIZE,
};
use api::error::ResultExt;
use api::{error::Error as ApiError, Result as ApiResult, Signature as SignatureTrait};
use api::SignatureDerive;
use core::fmt;
use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

#[cfg(any(feature = "std", feature = "alloc"))]
use api::SignatureSerialize;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Hedged Ed25519 signature scheme
pub struct HedgedEd25519;

/// Ed25519 public key (32 bytes)
#[derive(Clone, Debug, Zeroize)]
pub struct HedgedPublicKey(pub [u8; PUBLIC_KEY_SIZE]);

/// Ed25519 secret key (32-byte seed)
///
/// Zeroized on drop. Deliberately provides no mutable byte access; use
/// [`HedgedPublicKey`] and the serialization traits for byte-level I/O.
#[derive(Clone)]
pub struct HedgedSecretKey {
    seed: [u8; SECRET_KEY_SIZE],
}

impl Zeroize for HedgedSecretKey {
    fn zeroize(&mut self) {
        self.seed.zeroize();
    }
}

impl Drop for HedgedSecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl PartialEq for HedgedSecretKey {
    fn eq(&self, other: &Self) -> bool {
        // Constant-time comparison; secret material must not leak through
        // early-exit equality.
        self.seed.ct_eq(&other.seed).into()
    }
}

impl Eq for HedgedSecretKey {}

impl fmt::Debug for HedgedSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HedgedSecretKey([REDACTED])")
    }
}

/// Hedged signature (96 bytes: Ed25519 signature over `nonce || message`,
/// followed by the nonce)
#[derive(Clone, PartialEq, Eq)]
pub struct HedgedSignature(pub [u8; SIGNATURE_SIZE]);

impl HedgedPublicKey {
    /// Create from a slice, which must be exactly `PUBLIC_KEY_SIZE` bytes
    pub fn from_slice(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(ApiError::InvalidLength {
                context: "HedgedPublicKey::from_slice",
                expected: PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut data = [0u8; PUBLIC_KEY_SIZE];
        data.copy_from_slice(bytes);
        Ok(Self(data))
    }

    /// Byte representation of the public key
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for HedgedPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl HedgedSecretKey {
    /// Create from a slice, which must be exactly `SECRET_KEY_SIZE` bytes
    ///
    /// The caller remains responsible for zeroizing the source buffer.
    pub fn from_slice(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != SECRET_KEY_SIZE {
            return Err(ApiError::InvalidLength {
                context: "HedgedSecretKey::from_slice",
                expected: SECRET_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut seed = [0u8; SECRET_KEY_SIZE];
        seed.copy_from_slice(bytes);
        Ok(Self { seed })
    }
}

impl HedgedSignature {
    /// Create from a slice, which must be exactly `SIGNATURE_SIZE` bytes
    pub fn from_slice(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != SIGNATURE_SIZE {
            return Err(ApiError::InvalidLength {
                context: "HedgedSignature::from_slice",
                expected: SIGNATURE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut data = [0u8; SIGNATURE_SIZE];
        data.copy_from_slice(bytes);
        Ok(Self(data))
    }

    /// The embedded Ed25519 signature over `nonce || message` (first 64 bytes)
    pub fn core_signature(&self) -> &[u8] {
        &self.0[..CORE_SIGNATURE_SIZE]
    }

    /// The embedded hedging nonce (last 32 bytes)
    ///
    /// The nonce is not secret; it travels inside the signature so that
    /// verification needs no separate nonce transport.
    pub fn nonce(&self) -> &[u8] {
        &self.0[CORE_SIGNATURE_SIZE..]
    }

    /// Byte representation of the hedged signature
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for HedgedSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for HedgedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HedgedSignature")
            .field("core", &&self.0[..CORE_SIGNATURE_SIZE])
            .field("nonce", &&self.0[CORE_SIGNATURE_SIZE..])
            .finish()
    }
}

impl HedgedEd25519 {
    /// Sign a message, drawing the hedging nonce from the provided RNG
    ///
    /// This is the hedging transform:
    /// 1. Draw a fresh `NONCE_SIZE` nonce from `rng`
    /// 2. Sign `nonce || message` deterministically with Ed25519
    /// 3. Emit `core_signature || nonce`, exactly `SIGNATURE_SIZE` bytes
    ///
    /// The nonce is drawn before any signing work; an RNG failure aborts
    /// the call, so a zeroed or stale nonce can never be signed.
    pub fn sign_with_rng<R: CryptoRng + RngCore>(
        message: &[u8],
        secret_key: &HedgedSecretKey,
        rng: &mut R,
    ) -> ApiResult<HedgedSignature> {
        let mut nonce = Zeroizing::new([0u8; NONCE_SIZE]);
        rng.try_fill_bytes(nonce.as_mut())
            .map_err(|_e| ApiError::RandomGenerationError {
                context: "HedgedEd25519 sign",
                #[cfg(feature = "std")]
                message: _e.to_string(),
            })?;

        // Nonce first, then message, contiguous. Both sizes are fixed or
        // caller-known, so the layout is unambiguous without delimiters.
        let mut payload = Zeroizing::new(Vec::with_capacity(NONCE_SIZE + message.len()));
        payload.extend_from_slice(nonce.as_ref());
        payload.extend_from_slice(message);

        let signing_key = SigningKey::from_bytes(&secret_key.seed);
        let core = signing_key
            .try_sign(&payload)
            .map_err(|_e| ApiError::InvalidKey {
                context: "HedgedEd25519 sign",
                #[cfg(feature = "std")]
                message: _e.to_string(),
            })?;

        let mut signature = [0u8; SIGNATURE_SIZE];
        signature[..CORE_SIGNATURE_SIZE].copy_from_slice(&core.to_bytes());
        signature[CORE_SIGNATURE_SIZE..].copy_from_slice(nonce.as_ref());
        Ok(HedgedSignature(signature))
    }
}

impl SignatureTrait for HedgedEd25519 {
    type PublicKey = HedgedPublicKey;
    type SecretKey = HedgedSecretKey;
    type SignatureData = HedgedSignature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "HedgedEd25519"
    }

    /// Generate a key pair
    ///
    /// Pure delegation to the Ed25519 primitive; the hedging layer adds no
    /// behavior to key generation.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let signing_key = SigningKey::generate(rng);
        let public_key = HedgedPublicKey(signing_key.verifying_key().to_bytes());
        let secret_key = HedgedSecretKey {
            seed: signing_key.to_bytes(),
        };
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    /// Sign a message with a fresh hedging nonce from the operating system RNG
    ///
    /// Two calls over the same message and key produce different signatures
    /// with overwhelming probability (nonce collision ≈ 2^-256).
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        Self::sign_with_rng(message, secret_key, &mut OsRng)
    }

    /// Verify a hedged signature
    ///
    /// Splits the signature at the fixed offset, re-binds the embedded nonce
    /// to the message, and delegates to the primitive's strict verification.
    /// A cryptographically invalid signature, including one under a public
    /// key that fails point decoding, yields `Ok(false)`, never an error.
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<bool> {
        let verifying_key = match VerifyingKey::from_bytes(&public_key.0) {
            Ok(vk) => vk,
            // A key that is not a valid curve point can never have produced
            // a valid signature.
            Err(_) => return Ok(false),
        };

        let core = match ed25519_dalek::Signature::from_slice(signature.core_signature()) {
            Ok(sig) => sig,
            Err(_) => return Ok(false),
        };

        // Reconstruct the payload exactly as signed: nonce first.
        let mut payload = Vec::with_capacity(NONCE_SIZE + message.len());
        payload.extend_from_slice(signature.nonce());
        payload.extend_from_slice(message);

        Ok(verifying_key.verify_strict(&payload, &core).is_ok())
    }
}

impl SignatureDerive for HedgedEd25519 {
    const MIN_SEED_SIZE: usize = SECRET_KEY_SIZE;

    fn derive_keypair(seed: &[u8]) -> ApiResult<Self::KeyPair> {
        let secret_key =
            HedgedSecretKey::from_slice(seed).with_context("HedgedEd25519 derive_keypair")?;
        let public_key = Self::derive_public_key(&secret_key)?;
        Ok((public_key, secret_key))
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        let signing_key = SigningKey::from_bytes(&secret_key.seed);
        Ok(HedgedPublicKey(signing_key.verifying_key().to_bytes()))
    }
}

#[cfg(any(feature = "std", feature = "alloc"))]
impl SignatureSerialize for HedgedEd25519 {
    const PUBLIC_KEY_SIZE: usize = PUBLIC_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = SECRET_KEY_SIZE;
    const SIGNATURE_SIZE: usize = SIGNATURE_SIZE;

    fn serialize_public_key(key: &Self::PublicKey) -> Vec<u8> {
        key.0.to_vec()
    }

    fn deserialize_public_key(bytes: &[u8]) -> ApiResult<Self::PublicKey> {
        HedgedPublicKey::from_slice(bytes)
    }

    fn serialize_secret_key(key: &Self::SecretKey) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(key.seed.to_vec())
    }

    fn deserialize_secret_key(bytes: &[u8]) -> ApiResult<Self::SecretKey> {
        HedgedSecretKey::from_slice(bytes)
    }

    fn serialize_signature(sig: &Self::SignatureData) -> Vec<u8> {
        sig.0.to_vec()
    }

    fn deserialize_signature(bytes: &[u8]) -> ApiResult<Self::SignatureData> {
        HedgedSignature::from_slice(bytes)
    }
}
