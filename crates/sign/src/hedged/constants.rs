//! Size parameters for the hedged Ed25519 construction
//!
//! All sizes are fixed at compile time; the wire format has no length
//! prefixes or padding.

/// Size of an Ed25519 public key in bytes (compressed curve point)
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of an Ed25519 secret key in bytes (the RFC 8032 seed)
pub const SECRET_KEY_SIZE: usize = 32;

/// Size of the hedging nonce in bytes
///
/// Equal to the Ed25519 seed size. Kept as an independent named constant
/// rather than derived from the primitive, so the wire format does not
/// silently follow primitive internals.
pub const NONCE_SIZE: usize = 32;

/// Size of the underlying Ed25519 signature in bytes (R || s)
pub const CORE_SIGNATURE_SIZE: usize = 64;

/// Total size of a hedged signature in bytes
///
/// Layout: `CORE_SIGNATURE_SIZE` bytes of Ed25519 signature over
/// `nonce || message`, followed immediately by `NONCE_SIZE` bytes of nonce.
pub const SIGNATURE_SIZE: usize = CORE_SIGNATURE_SIZE + NONCE_SIZE;
