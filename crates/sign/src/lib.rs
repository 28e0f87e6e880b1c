//! Hedged Ed25519 Signature Scheme
//!
//! This crate implements a hedged variant of Ed25519: every signing call
//! mixes a fresh random nonce into the signed payload and carries that
//! nonce inside the signature, so fault attacks against deterministic
//! signing cannot recover the secret key.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod hedged;

// Re-exports from the hedged scheme
pub use hedged::{HedgedEd25519, HedgedPublicKey, HedgedSecretKey, HedgedSignature};
