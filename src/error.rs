use std::fmt;

/// Result type for nonlin operations
pub type Result<T> = std::result::Result<T, NonlinError>;

/// Main error type for the nonlin library
///
/// The numeric operations themselves never fail: overflow, underflow and
/// division by zero follow floating-point semantics and produce Inf/NaN.
/// Errors arise only on the configuration surface, when constructing an
/// activation from external input.
#[derive(Debug, Clone)]
pub enum NonlinError {
    /// No activation is registered under the requested name
    UnknownActivation {
        name: String,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },
}

impl fmt::Display for NonlinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonlinError::UnknownActivation { name } => {
                write!(f, "Unknown activation function: {}", name)
            }
            NonlinError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

impl std::error::Error for NonlinError {}

// Helper functions for common error patterns
impl NonlinError {
    pub fn unknown_activation<S: Into<String>>(name: S) -> Self {
        NonlinError::UnknownActivation { name: name.into() }
    }

    pub fn invalid_parameter<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        NonlinError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
