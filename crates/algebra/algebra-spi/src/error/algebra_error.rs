//! Algebra error types.

use thiserror::Error;

/// Timeseries algebra errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgebraError {
    /// A series violated the strictly-ascending timestamp precondition
    #[error("Value constraint violated: timestamps must be strictly ascending (position {position})")]
    NotAscending { position: usize },

    /// Index and values vectors differ in length
    #[error("Length mismatch: index has {index} entries, values has {values}")]
    LengthMismatch { index: usize, values: usize },

    /// Invalid parameter supplied to an operator or configuration
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl AlgebraError {
    /// Shorthand for [`AlgebraError::InvalidParameter`].
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        AlgebraError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for algebra operations.
pub type Result<T> = std::result::Result<T, AlgebraError>;
