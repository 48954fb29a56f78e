//! Elementary differentiable functions

use crate::composite::{Compose, Constant, Division, Linear, Product};
use crate::error::Result;
use crate::traits::{Capabilities, OpRef, Operator};
use std::sync::Arc;

const FULL: Capabilities = Capabilities::DERIVATIVE.union(Capabilities::INVERSE);

/// The identity function
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Operator for Identity {
    fn name(&self) -> &'static str {
        "Identity"
    }

    fn apply(&self, x: f64) -> f64 {
        x
    }

    fn capabilities(&self) -> Capabilities {
        FULL
    }

    fn derivative(&self, _x: f64) -> Result<f64> {
        Ok(1.0)
    }

    fn derivative_for_output(&self, _y: f64) -> Result<f64> {
        Ok(1.0)
    }

    fn derivative_op(&self) -> Result<OpRef> {
        Ok(Arc::new(Constant::ONE))
    }

    fn apply_inverse(&self, y: f64) -> Result<f64> {
        Ok(y)
    }

    fn inverse(&self) -> Result<OpRef> {
        Ok(Arc::new(Identity))
    }
}

/// Square root, defined on `[0, inf)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sqrt;

impl Operator for Sqrt {
    fn name(&self) -> &'static str {
        "Sqrt"
    }

    fn apply(&self, x: f64) -> f64 {
        x.sqrt()
    }

    fn capabilities(&self) -> Capabilities {
        FULL
    }

    fn derivative(&self, x: f64) -> Result<f64> {
        Ok(0.5 / x.sqrt())
    }

    fn derivative_for_output(&self, y: f64) -> Result<f64> {
        Ok(0.5 / y)
    }

    /// `0.5 / sqrt(x)`, expressed as a quotient of operators
    fn derivative_op(&self) -> Result<OpRef> {
        Ok(Arc::new(Division::new(Arc::new(Constant::HALF), Arc::new(Sqrt))))
    }

    fn apply_inverse(&self, y: f64) -> Result<f64> {
        Ok(y * y)
    }

    fn inverse(&self) -> Result<OpRef> {
        Ok(Arc::new(Square))
    }

    fn min_domain(&self) -> f64 {
        0.0
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn average_value(&self) -> f64 {
        1.0
    }
}

/// `x * x`
///
/// Not invertible over its whole domain, so no inverse is advertised even
/// though [`Sqrt`] names this as its inverse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square;

impl Operator for Square {
    fn name(&self) -> &'static str {
        "Square"
    }

    fn apply(&self, x: f64) -> f64 {
        x * x
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::DERIVATIVE
    }

    fn derivative(&self, x: f64) -> Result<f64> {
        Ok(2.0 * x)
    }

    fn derivative_op(&self) -> Result<OpRef> {
        Ok(Arc::new(Linear::new(2.0, 0.0)))
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn average_value(&self) -> f64 {
        1.0
    }
}

/// Natural exponential
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exp;

impl Operator for Exp {
    fn name(&self) -> &'static str {
        "Exp"
    }

    fn apply(&self, x: f64) -> f64 {
        x.exp()
    }

    fn capabilities(&self) -> Capabilities {
        FULL
    }

    fn derivative(&self, x: f64) -> Result<f64> {
        Ok(x.exp())
    }

    fn derivative_for_output(&self, y: f64) -> Result<f64> {
        Ok(y)
    }

    fn derivative_op(&self) -> Result<OpRef> {
        Ok(Arc::new(Exp))
    }

    fn apply_inverse(&self, y: f64) -> Result<f64> {
        Ok(y.ln())
    }

    fn inverse(&self) -> Result<OpRef> {
        Ok(Arc::new(Log))
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn average_value(&self) -> f64 {
        1.0
    }
}

/// Natural logarithm, defined on `[0, inf)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Log;

impl Operator for Log {
    fn name(&self) -> &'static str {
        "Log"
    }

    fn apply(&self, x: f64) -> f64 {
        x.ln()
    }

    fn capabilities(&self) -> Capabilities {
        FULL
    }

    fn derivative(&self, x: f64) -> Result<f64> {
        Ok(1.0 / x)
    }

    fn derivative_for_output(&self, y: f64) -> Result<f64> {
        Ok((-y).exp())
    }

    fn derivative_op(&self) -> Result<OpRef> {
        Ok(Arc::new(Division::new(Arc::new(Constant::ONE), Arc::new(Identity))))
    }

    fn apply_inverse(&self, y: f64) -> Result<f64> {
        Ok(y.exp())
    }

    fn inverse(&self) -> Result<OpRef> {
        Ok(Arc::new(Exp))
    }

    fn min_domain(&self) -> f64 {
        0.0
    }
}

/// Hyperbolic tangent, with range `(-1, 1)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tanh;

impl Operator for Tanh {
    fn name(&self) -> &'static str {
        "Tanh"
    }

    fn apply(&self, x: f64) -> f64 {
        x.tanh()
    }

    fn capabilities(&self) -> Capabilities {
        FULL
    }

    fn derivative(&self, x: f64) -> Result<f64> {
        let t = x.tanh();
        Ok(1.0 - t * t)
    }

    fn derivative_for_output(&self, y: f64) -> Result<f64> {
        Ok(1.0 - y * y)
    }

    /// `1 - tanh(x)^2`
    fn derivative_op(&self) -> Result<OpRef> {
        let squared: OpRef = Arc::new(Compose::new(Arc::new(Square), Arc::new(Tanh)));
        Ok(Arc::new(Compose::new(Arc::new(Linear::new(-1.0, 1.0)), squared)))
    }

    fn apply_inverse(&self, y: f64) -> Result<f64> {
        Ok(y.atanh())
    }

    fn min_value(&self) -> f64 {
        -1.0
    }

    fn max_value(&self) -> f64 {
        1.0
    }
}

/// Logistic sigmoid `1 / (1 + e^-x)`, with range `(0, 1)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Logistic;

impl Logistic {
    #[inline]
    fn logistic(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }
}

impl Operator for Logistic {
    fn name(&self) -> &'static str {
        "Logistic"
    }

    fn apply(&self, x: f64) -> f64 {
        Self::logistic(x)
    }

    fn capabilities(&self) -> Capabilities {
        FULL
    }

    fn derivative(&self, x: f64) -> Result<f64> {
        let y = Self::logistic(x);
        Ok(y * (1.0 - y))
    }

    fn derivative_for_output(&self, y: f64) -> Result<f64> {
        Ok(y * (1.0 - y))
    }

    /// `y * (1 - y)` where `y` is the logistic output
    fn derivative_op(&self) -> Result<OpRef> {
        let one_minus: OpRef = Arc::new(Compose::new(Arc::new(Linear::new(-1.0, 1.0)), Arc::new(Logistic)));
        Ok(Arc::new(Product::new(Arc::new(Logistic), one_minus)))
    }

    fn apply_inverse(&self, y: f64) -> Result<f64> {
        Ok((y / (1.0 - y)).ln())
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        1.0
    }

    fn average_value(&self) -> f64 {
        0.5
    }
}
