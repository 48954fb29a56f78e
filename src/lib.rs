//! Numeric vector algebra with zero-copy views and differentiable scalar operators
//!
//! This crate re-exports the workspace members under one roof:
//!
//! - [`vectorkit_core`]: the [`Vector`] trait, dense storage, views,
//!   computed and immutable vectors, N-d collaborators
//! - [`vectorkit_ops`]: the [`Operator`] algebra applied elementwise via
//!   [`Vector::apply_op`]
//!
//! # Example
//!
//! ```rust
//! use vectorkit::prelude::*;
//!
//! let v = vector_of(&[3.0, 4.0]);
//! assert_eq!(v.normalise()?, 5.0);
//! assert!(v.is_unit_length());
//!
//! let w = vector_of(&[4.0, 9.0]);
//! w.apply_op(&*ops::sqrt())?;
//! assert_eq!(w.to_vec(), vec![2.0, 3.0]);
//! # Ok::<(), vectorkit::Error>(())
//! ```

pub use vectorkit_core::*;
pub use vectorkit_ops::{OpError, OpRef, Operator};

/// Scalar operators and their constructors
pub mod ops {
    pub use vectorkit_ops::*;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ops;
    pub use vectorkit_core::prelude::*;
    pub use vectorkit_ops::{OpError, OpRef, Operator};
}
