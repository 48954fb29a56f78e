//! Error types for vector operations
//!
//! Provides a unified error type for all vectorkit crates.

use thiserror::Error;
use vectorkit_ops::OpError;

/// Core error type for vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Operands or index sequences of incompatible length
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Checked access outside `[0, length)`
    #[error("Index {index} out of bounds for vector of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Out-of-bounds range: `[offset, offset + length)` does not fit inside
    /// `[0, total]`
    ///
    /// Range requests such as `sub_vector` report this instead of
    /// [`Error::IndexOutOfBounds`]. Use [`Error::is_out_of_bounds`] to match
    /// either.
    #[error("Invalid range: offset {offset}, length {length} on vector of length {total}")]
    InvalidRange {
        offset: usize,
        length: usize,
        total: usize,
    },

    /// Mutation attempted on an immutable vector
    #[error("Immutable: {0}")]
    Immutable(String),

    /// Capability not available for this value
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Target shape is incompatible with the vector
    #[error("Shape mismatch: cannot use shape {shape:?} with vector of length {length}")]
    ShapeMismatch { shape: Vec<usize>, length: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Operator capability or domain failure
    #[error("Operator error: {0}")]
    Operator(#[from] OpError),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for operands of different length
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::DimensionMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }

    /// Create an error for a checked access outside the vector
    pub fn out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Create an error for a range that does not fit
    pub fn invalid_range(offset: usize, length: usize, total: usize) -> Self {
        Self::InvalidRange {
            offset,
            length,
            total,
        }
    }

    /// Create an error for a write to an immutable vector
    pub fn immutable(what: &str) -> Self {
        Self::Immutable(format!("{what} cannot be modified"))
    }

    /// Create an error for an incompatible target shape
    pub fn shape_mismatch(shape: &[usize], length: usize) -> Self {
        Self::ShapeMismatch {
            shape: shape.to_vec(),
            length,
        }
    }

    /// Whether this is an out-of-bounds failure for an element or a range
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. } | Self::InvalidRange { .. })
    }

    /// Create an error for an operation on an empty vector that needs elements
    pub fn empty_vector(operation: &str) -> Self {
        Self::InvalidParameter(format!("{operation} requires a non-empty vector"))
    }
}
