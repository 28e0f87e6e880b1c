//! Trait definitions for the hedged-ed25519 library

pub mod signature;

pub use signature::{Signature, SignatureDerive};

#[cfg(any(feature = "std", feature = "alloc"))]
pub use signature::SignatureSerialize;
