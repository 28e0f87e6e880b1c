//! Error handling for the hedged-ed25519 library

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

// Standard library error conversions
#[cfg(feature = "std")]
impl From<std::array::TryFromSliceError> for Error {
    fn from(_: std::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0, // Unknown expected size
            actual: 0,   // Unknown actual size
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Specialized result type for signature operations
pub type SignatureResult<T> = Result<T>;
