//! Public API traits and types for the hedged-ed25519 library
//!
//! This crate provides the public API surface for the hedged-ed25519
//! workspace: trait definitions for signature schemes and the error types
//! used throughout the library.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{Signature, SignatureDerive};

#[cfg(any(feature = "std", feature = "alloc"))]
pub use traits::SignatureSerialize;

// Re-export trait modules for direct access
pub use traits::signature;
