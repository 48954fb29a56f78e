//! Constants, affine maps and operator composition
//!
//! Composite operators hold shared handles to their parts and carry no
//! mutable state. Their derivatives are themselves composites built with
//! the sum, product, quotient and chain rules.

use crate::error::{OpError, Result};
use crate::traits::{Capabilities, OpRef, Operator};
use std::sync::Arc;

fn both(a: &OpRef, b: &OpRef) -> Capabilities {
    a.capabilities() & b.capabilities() & Capabilities::DERIVATIVE
}

/// Operator returning the same value for every input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    value: f64,
}

impl Constant {
    pub const ZERO: Constant = Constant { value: 0.0 };
    pub const HALF: Constant = Constant { value: 0.5 };
    pub const ONE: Constant = Constant { value: 1.0 };

    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Operator for Constant {
    fn name(&self) -> &'static str {
        "Constant"
    }

    fn apply(&self, _x: f64) -> f64 {
        self.value
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::DERIVATIVE
    }

    fn derivative(&self, _x: f64) -> Result<f64> {
        Ok(0.0)
    }

    // The input cannot be recovered from the output, but the slope is flat anyway
    fn derivative_for_output(&self, _y: f64) -> Result<f64> {
        Ok(0.0)
    }

    fn derivative_op(&self) -> Result<OpRef> {
        Ok(Arc::new(Constant::ZERO))
    }

    fn min_value(&self) -> f64 {
        self.value
    }

    fn max_value(&self) -> f64 {
        self.value
    }

    fn average_value(&self) -> f64 {
        self.value
    }
}

/// Affine map `x * factor + constant`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    factor: f64,
    constant: f64,
}

impl Linear {
    pub const NEGATE: Linear = Linear { factor: -1.0, constant: 0.0 };

    pub fn new(factor: f64, constant: f64) -> Self {
        Self { factor, constant }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }
}

impl Operator for Linear {
    fn name(&self) -> &'static str {
        "Linear"
    }

    fn apply(&self, x: f64) -> f64 {
        x * self.factor + self.constant
    }

    fn capabilities(&self) -> Capabilities {
        if self.factor == 0.0 {
            Capabilities::DERIVATIVE
        } else {
            Capabilities::DERIVATIVE | Capabilities::INVERSE
        }
    }

    fn derivative(&self, _x: f64) -> Result<f64> {
        Ok(self.factor)
    }

    fn derivative_for_output(&self, _y: f64) -> Result<f64> {
        Ok(self.factor)
    }

    fn derivative_op(&self) -> Result<OpRef> {
        Ok(Arc::new(Constant::new(self.factor)))
    }

    fn apply_inverse(&self, y: f64) -> Result<f64> {
        if self.factor == 0.0 {
            return Err(OpError::no_inverse("Linear with zero factor"));
        }
        Ok((y - self.constant) / self.factor)
    }

    fn inverse(&self) -> Result<OpRef> {
        if self.factor == 0.0 {
            return Err(OpError::no_inverse("Linear with zero factor"));
        }
        let f = 1.0 / self.factor;
        Ok(Arc::new(Linear::new(f, -self.constant * f)))
    }

    fn average_value(&self) -> f64 {
        self.constant
    }
}

/// Pointwise sum `a(x) + b(x)`
#[derive(Debug, Clone)]
pub struct Sum {
    a: OpRef,
    b: OpRef,
}

impl Sum {
    pub fn new(a: OpRef, b: OpRef) -> Self {
        Self { a, b }
    }
}

impl Operator for Sum {
    fn name(&self) -> &'static str {
        "Sum"
    }

    fn apply(&self, x: f64) -> f64 {
        self.a.apply(x) + self.b.apply(x)
    }

    fn capabilities(&self) -> Capabilities {
        both(&self.a, &self.b)
    }

    fn derivative(&self, x: f64) -> Result<f64> {
        Ok(self.a.derivative(x)? + self.b.derivative(x)?)
    }

    fn derivative_op(&self) -> Result<OpRef> {
        Ok(Arc::new(Sum::new(self.a.derivative_op()?, self.b.derivative_op()?)))
    }

    fn min_domain(&self) -> f64 {
        self.a.min_domain().max(self.b.min_domain())
    }

    fn max_domain(&self) -> f64 {
        self.a.max_domain().min(self.b.max_domain())
    }

    fn average_value(&self) -> f64 {
        self.a.average_value() + self.b.average_value()
    }
}

/// Pointwise product `a(x) * b(x)`
#[derive(Debug, Clone)]
pub struct Product {
    a: OpRef,
    b: OpRef,
}

impl Product {
    pub fn new(a: OpRef, b: OpRef) -> Self {
        Self { a, b }
    }
}

impl Operator for Product {
    fn name(&self) -> &'static str {
        "Product"
    }

    fn apply(&self, x: f64) -> f64 {
        self.a.apply(x) * self.b.apply(x)
    }

    fn capabilities(&self) -> Capabilities {
        both(&self.a, &self.b)
    }

    fn derivative(&self, x: f64) -> Result<f64> {
        Ok(self.a.derivative(x)? * self.b.apply(x) + self.a.apply(x) * self.b.derivative(x)?)
    }

    fn derivative_op(&self) -> Result<OpRef> {
        let left: OpRef = Arc::new(Product::new(self.a.derivative_op()?, self.b.clone()));
        let right: OpRef = Arc::new(Product::new(self.a.clone(), self.b.derivative_op()?));
        Ok(Arc::new(Sum::new(left, right)))
    }

    fn min_domain(&self) -> f64 {
        self.a.min_domain().max(self.b.min_domain())
    }

    fn max_domain(&self) -> f64 {
        self.a.max_domain().min(self.b.max_domain())
    }
}

/// Pointwise quotient `a(x) / b(x)`
#[derive(Debug, Clone)]
pub struct Division {
    a: OpRef,
    b: OpRef,
}

impl Division {
    pub fn new(a: OpRef, b: OpRef) -> Self {
        Self { a, b }
    }
}

impl Operator for Division {
    fn name(&self) -> &'static str {
        "Division"
    }

    fn apply(&self, x: f64) -> f64 {
        self.a.apply(x) / self.b.apply(x)
    }

    fn capabilities(&self) -> Capabilities {
        both(&self.a, &self.b)
    }

    fn derivative(&self, x: f64) -> Result<f64> {
        let (a, b) = (self.a.apply(x), self.b.apply(x));
        let (da, db) = (self.a.derivative(x)?, self.b.derivative(x)?);
        Ok((da * b - a * db) / (b * b))
    }

    fn derivative_op(&self) -> Result<OpRef> {
        // (a'b - ab') / b^2
        let da_b: OpRef = Arc::new(Product::new(self.a.derivative_op()?, self.b.clone()));
        let a_db: OpRef = Arc::new(Product::new(self.a.clone(), self.b.derivative_op()?));
        let neg_a_db: OpRef = Arc::new(Compose::new(Arc::new(Linear::NEGATE), a_db));
        let numerator: OpRef = Arc::new(Sum::new(da_b, neg_a_db));
        let denominator: OpRef = Arc::new(Product::new(self.b.clone(), self.b.clone()));
        Ok(Arc::new(Division::new(numerator, denominator)))
    }

    fn min_domain(&self) -> f64 {
        self.a.min_domain().max(self.b.min_domain())
    }

    fn max_domain(&self) -> f64 {
        self.a.max_domain().min(self.b.max_domain())
    }
}

/// Function composition `outer(inner(x))`
#[derive(Debug, Clone)]
pub struct Compose {
    outer: OpRef,
    inner: OpRef,
}

impl Compose {
    pub fn new(outer: OpRef, inner: OpRef) -> Self {
        Self { outer, inner }
    }
}

impl Operator for Compose {
    fn name(&self) -> &'static str {
        "Compose"
    }

    fn apply(&self, x: f64) -> f64 {
        self.outer.apply(self.inner.apply(x))
    }

    fn capabilities(&self) -> Capabilities {
        self.outer.capabilities() & self.inner.capabilities()
    }

    fn derivative(&self, x: f64) -> Result<f64> {
        let y = self.inner.apply(x);
        Ok(self.outer.derivative(y)? * self.inner.derivative(x)?)
    }

    fn derivative_op(&self) -> Result<OpRef> {
        let outer_at_inner: OpRef =
            Arc::new(Compose::new(self.outer.derivative_op()?, self.inner.clone()));
        Ok(Arc::new(Product::new(outer_at_inner, self.inner.derivative_op()?)))
    }

    fn apply_inverse(&self, y: f64) -> Result<f64> {
        self.inner.apply_inverse(self.outer.apply_inverse(y)?)
    }

    fn inverse(&self) -> Result<OpRef> {
        Ok(Arc::new(Compose::new(self.inner.inverse()?, self.outer.inverse()?)))
    }

    fn min_domain(&self) -> f64 {
        self.inner.min_domain()
    }

    fn max_domain(&self) -> f64 {
        self.inner.max_domain()
    }

    fn min_value(&self) -> f64 {
        self.outer.min_value()
    }

    fn max_value(&self) -> f64 {
        self.outer.max_value()
    }

    fn average_value(&self) -> f64 {
        self.outer.apply(self.inner.average_value())
    }
}
