//! Error types for Sugerir operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Sugerir operations.
///
/// Distinguishes fatal precondition violations (empty training data,
/// dimension mismatches, invalid hyperparameters) from the silent
/// degradation paths the models handle internally (unknown ids,
/// cold-start users), which never surface as errors.
///
/// # Examples
///
/// ```
/// use sugerir::error::SugerirError;
///
/// let err = SugerirError::DimensionMismatch {
///     expected: "18".to_string(),
///     actual: "12".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum SugerirError {
    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Model queried before a successful `fit`.
    NotFitted {
        /// Model name (e.g., "CollaborativeFilter")
        model: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for SugerirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SugerirError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            SugerirError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            SugerirError::NotFitted { model } => {
                write!(f, "{model} is not fitted; call fit() first")
            }
            SugerirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SugerirError {}

impl From<&str> for SugerirError {
    fn from(msg: &str) -> Self {
        SugerirError::Other(msg.to_string())
    }
}

impl From<String> for SugerirError {
    fn from(msg: String) -> Self {
        SugerirError::Other(msg)
    }
}

impl SugerirError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }

    /// Create a not-fitted error for the named model
    #[must_use]
    pub fn not_fitted(model: &str) -> Self {
        Self::NotFitted {
            model: model.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SugerirError>;
