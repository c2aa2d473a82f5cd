//! Error types for nested array operations
//!
//! Only two failure modes exist: an operation that needs a sequence was handed
//! a scalar, or a rank-1 operation was handed a sequence of sequences.
//!
//! # Examples
//!
//! ```
//! use tenrso_ragged::{filter, nested, RaggedError};
//!
//! let matrix = nested!([[1, 2], [3, 4]]);
//! let err = filter(&matrix, |&x| x > 2).unwrap_err();
//! assert!(matches!(err, RaggedError::Dimension { .. }));
//! assert_eq!(err.to_string(), "Only one dimensional matrices supported");
//! ```

use thiserror::Error;

/// Error type for all nested array operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RaggedError {
    /// A sequence was required but a scalar was given
    #[error("Array input expected: `{operation}` requires a sequence")]
    InvalidArgument { operation: &'static str },

    /// A rank-1 sequence was required but some element is itself a sequence
    #[error("Only one dimensional matrices supported")]
    Dimension { operation: &'static str },
}

impl RaggedError {
    /// Create an invalid argument error for `operation`
    pub fn invalid_argument(operation: &'static str) -> Self {
        RaggedError::InvalidArgument { operation }
    }

    /// Create a dimension error for `operation`
    pub fn dimension(operation: &'static str) -> Self {
        RaggedError::Dimension { operation }
    }

    /// Name of the operation that raised the error
    pub fn operation(&self) -> &'static str {
        match self {
            RaggedError::InvalidArgument { operation } | RaggedError::Dimension { operation } => {
                operation
            }
        }
    }
}

/// Result type alias for nested array operations
pub type RaggedResult<T> = Result<T, RaggedError>;
