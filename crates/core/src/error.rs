//! Error types for the Aadhaar core library
//!
//! Only constructive helpers fail with an error. A number that is not a valid
//! Aadhaar is an ordinary outcome, see [`crate::types::Rejection`].

use thiserror::Error;

/// Result type alias for Aadhaar operations
pub type Result<T> = std::result::Result<T, AadhaarError>;

/// Error types that can occur during Aadhaar operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AadhaarError {
    /// Input violates the precondition of a constructive helper
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A character outside 0-9 reached digit conversion
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),
}
