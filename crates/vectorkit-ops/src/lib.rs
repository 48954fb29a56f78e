//! Stateless differentiable scalar operators
//!
//! This crate provides the operator algebra used to transform vectors
//! elementwise. An operator is a pure function `f64 -> f64` carrying
//! optional metadata:
//!
//! - a derivative, available both as a value (`derivative`) and as an
//!   operator of its own (`derivative_op`)
//! - `derivative_for_output`, which evaluates the derivative from a known
//!   output without recomputing the input
//! - an inverse (`apply_inverse`, `inverse`)
//! - domain and range bounds
//!
//! Operators compose rather than inherit: the derivative of `sqrt` is the
//! quotient operator `0.5 / sqrt`, built from [`Constant`] and [`Sqrt`].
//!
//! # Example
//!
//! ```rust
//! use vectorkit_ops::{sqrt, Operator};
//!
//! let op = sqrt();
//! assert_eq!(op.apply(4.0), 2.0);
//! assert_eq!(op.derivative(4.0).unwrap(), 0.25);
//! assert_eq!(op.apply_inverse(2.0).unwrap(), 4.0);
//! ```

pub mod composite;
pub mod error;
pub mod functions;
pub mod traits;

pub use composite::{Compose, Constant, Division, Linear, Product, Sum};
pub use error::{OpError, Result};
pub use functions::{Exp, Identity, Log, Logistic, Sqrt, Square, Tanh};
pub use traits::{Capabilities, OpRef, Operator};

use std::sync::Arc;

// Convenience constructors returning shared handles

pub fn identity() -> OpRef {
    Arc::new(Identity)
}

pub fn constant(value: f64) -> OpRef {
    Arc::new(Constant::new(value))
}

pub fn linear(factor: f64, constant: f64) -> OpRef {
    Arc::new(Linear::new(factor, constant))
}

pub fn negate() -> OpRef {
    Arc::new(Linear::NEGATE)
}

pub fn sqrt() -> OpRef {
    Arc::new(Sqrt)
}

pub fn square() -> OpRef {
    Arc::new(Square)
}

pub fn exp() -> OpRef {
    Arc::new(Exp)
}

pub fn log() -> OpRef {
    Arc::new(Log)
}

pub fn tanh() -> OpRef {
    Arc::new(Tanh)
}

pub fn logistic() -> OpRef {
    Arc::new(Logistic)
}

/// `outer(inner(x))`
pub fn compose(outer: OpRef, inner: OpRef) -> OpRef {
    Arc::new(Compose::new(outer, inner))
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Capabilities, OpError, OpRef, Operator};
    pub use crate::{compose, constant, exp, identity, linear, log, logistic, negate, sqrt, square, tanh};
}
