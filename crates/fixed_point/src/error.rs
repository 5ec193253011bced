//! Fixed-point error types

use thiserror::Error;

/// Rejected scale configurations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixedPointError {
    #[error("Invalid scale: {0} (must be 0-31)")]
    InvalidScale(u8),

    #[error("Sigmoid divisor must be non-zero")]
    ZeroDivisor,
}

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, FixedPointError>;
