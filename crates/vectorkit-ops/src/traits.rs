//! The operator contract
//!
//! An [`Operator`] is a stateless scalar function `f64 -> f64` that may also
//! know its derivative and inverse. Capabilities are advertised through
//! [`Capabilities`]; callers check them before asking for a derivative or an
//! inverse, and operators without the capability answer with
//! [`OpError::Unsupported`].

use crate::error::{OpError, Result};
use bitflags::bitflags;
use std::fmt;
use std::sync::Arc;

/// Shared handle to an operator
pub type OpRef = Arc<dyn Operator>;

bitflags! {
    /// Optional capabilities an operator may support
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// `derivative`, `derivative_for_output` and `derivative_op` are available
        const DERIVATIVE = 0b0000_0001;
        /// `apply_inverse` and `inverse` are available
        const INVERSE = 0b0000_0010;
    }
}

/// A pure scalar function with optional derivative and inverse metadata
pub trait Operator: fmt::Debug + Send + Sync {
    /// Short human-readable name, used in error messages
    fn name(&self) -> &'static str;

    /// Evaluate the operator at `x`
    fn apply(&self, x: f64) -> f64;

    /// Capabilities this operator supports
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }

    fn has_derivative(&self) -> bool {
        self.capabilities().contains(Capabilities::DERIVATIVE)
    }

    fn has_inverse(&self) -> bool {
        self.capabilities().contains(Capabilities::INVERSE)
    }

    /// Derivative `dy/dx` evaluated at input `x`
    fn derivative(&self, _x: f64) -> Result<f64> {
        Err(OpError::no_derivative(self.name()))
    }

    /// Derivative `dy/dx` evaluated at the input that produced output `y`
    ///
    /// The default recovers `x` through the inverse. Operators whose
    /// derivative is cheaper to express in terms of the output override this.
    /// An operator with a derivative but no inverse (most sums, products and
    /// quotients) fails here even though `has_derivative()` is true.
    fn derivative_for_output(&self, y: f64) -> Result<f64> {
        if !self.has_derivative() {
            return Err(OpError::no_derivative(self.name()));
        }
        if !self.has_inverse() {
            return Err(OpError::no_output_derivative(self.name()));
        }
        let x = self.apply_inverse(y)?;
        self.derivative(x)
    }

    /// The derivative as an operator in its own right
    fn derivative_op(&self) -> Result<OpRef> {
        Err(OpError::no_derivative(self.name()))
    }

    /// Evaluate the inverse function at `y`
    fn apply_inverse(&self, _y: f64) -> Result<f64> {
        Err(OpError::no_inverse(self.name()))
    }

    /// The inverse as an operator in its own right
    fn inverse(&self) -> Result<OpRef> {
        Err(OpError::no_inverse(self.name()))
    }

    /// Smallest valid input
    fn min_domain(&self) -> f64 {
        f64::NEG_INFINITY
    }

    /// Largest valid input
    fn max_domain(&self) -> f64 {
        f64::INFINITY
    }

    /// Smallest possible output
    fn min_value(&self) -> f64 {
        f64::NEG_INFINITY
    }

    /// Largest possible output
    fn max_value(&self) -> f64 {
        f64::INFINITY
    }

    /// Typical output value, useful as a starting point for initialisation
    fn average_value(&self) -> f64 {
        0.0
    }

    /// Evaluate at `x`, rejecting inputs outside `[min_domain, max_domain]`
    fn apply_checked(&self, x: f64) -> Result<f64> {
        let (min, max) = (self.min_domain(), self.max_domain());
        if x < min || x > max {
            return Err(OpError::Domain { value: x, min, max });
        }
        Ok(self.apply(x))
    }

    /// Apply the operator to every element of a slice in place
    fn apply_slice(&self, data: &mut [f64]) {
        for x in data.iter_mut() {
            *x = self.apply(*x);
        }
    }

    /// Wrap in a shared handle
    fn into_ref(self) -> OpRef
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Plain;

    impl Operator for Plain {
        fn name(&self) -> &'static str {
            "Plain"
        }

        fn apply(&self, x: f64) -> f64 {
            x + 1.0
        }
    }

    #[test]
    fn test_defaults_report_no_capabilities() {
        let op = Plain;
        assert!(!op.has_derivative());
        assert!(!op.has_inverse());
        assert!(matches!(op.derivative(1.0), Err(OpError::Unsupported(_))));
        assert!(matches!(op.derivative_for_output(1.0), Err(OpError::Unsupported(_))));
        assert!(matches!(op.apply_inverse(1.0), Err(OpError::Unsupported(_))));
        assert!(op.derivative_op().is_err());
        assert!(op.inverse().is_err());
    }

    #[test]
    fn test_apply_slice() {
        let mut data = vec![0.0, 1.0, 2.0];
        Plain.apply_slice(&mut data);
        assert_eq!(data, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_apply_checked_unbounded() {
        assert_eq!(Plain.apply_checked(-1e300).unwrap(), -1e300 + 1.0);
    }
}
