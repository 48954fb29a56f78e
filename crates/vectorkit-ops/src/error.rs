//! Error types for operator evaluation

use thiserror::Error;

/// Error type for operator capability and domain failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpError {
    /// The operator lacks the requested capability (derivative or inverse)
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Input lies outside the operator's domain
    #[error("Domain error: {value} outside [{min}, {max}]")]
    Domain { value: f64, min: f64, max: f64 },
}

/// Result type alias using our OpError type
pub type Result<T> = std::result::Result<T, OpError>;

impl OpError {
    /// Create an error for a missing derivative
    pub fn no_derivative(name: &str) -> Self {
        Self::Unsupported(format!("{name} has no derivative"))
    }

    /// Create an error for a derivative that cannot be recovered from an output
    pub fn no_output_derivative(name: &str) -> Self {
        Self::Unsupported(format!(
            "{name} has no inverse, so its derivative cannot be evaluated from an output"
        ))
    }

    /// Create an error for a missing inverse
    pub fn no_inverse(name: &str) -> Self {
        Self::Unsupported(format!("{name} has no inverse"))
    }
}
