//! Error type definitions for signature operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for signature operations
///
/// A cryptographically invalid signature is never reported through this
/// type; verification returns `Ok(false)` in that case. Errors are reserved
/// for precondition violations (sizes), RNG failures, and failures internal
/// to the underlying primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid signature encoding error
    InvalidSignature {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { .. } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidSignature { .. } => Self::InvalidSignature {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::RandomGenerationError { .. } => Self::RandomGenerationError {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, .. } => {
                write!(f, "Invalid key: {}", context)
            }
            Self::InvalidSignature { context, .. } => {
                write!(f, "Invalid signature: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
            #[cfg(feature = "std")]
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
        }
    }
}
