//! Vectors defined by a rule rather than storage
//!
//! A [`ComputedVector`] evaluates a pure `index -> value` rule on every
//! read. It owns no element storage, is always immutable, and is `Send +
//! Sync`, so one instance can be shared across threads freely.
//!
//! # Example
//!
//! ```rust
//! use vectorkit_core::{ComputedVector, Vector};
//!
//! let ones = ComputedVector::constant(3, 1.0);
//! assert_eq!(ones.element_sum(), 3.0);
//! assert!(ones.set(0, 2.0).is_err());
//! ```

use crate::error::{Error, Result};
use crate::traits::{Vector, VectorFlags, VectorRef};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

type Rule = Arc<dyn Fn(usize) -> f64 + Send + Sync>;

/// A read-only vector whose element `i` is `rule(i)`
#[derive(Clone)]
pub struct ComputedVector {
    length: usize,
    rule: Rule,
    label: &'static str,
}

impl ComputedVector {
    /// Wrap an arbitrary pure rule
    pub fn from_fn<F>(length: usize, rule: F) -> Self
    where
        F: Fn(usize) -> f64 + Send + Sync + 'static,
    {
        Self::labelled(length, "from_fn", rule)
    }

    fn labelled<F>(length: usize, label: &'static str, rule: F) -> Self
    where
        F: Fn(usize) -> f64 + Send + Sync + 'static,
    {
        Self {
            length,
            rule: Arc::new(rule),
            label,
        }
    }

    /// Every element equals `value`
    pub fn constant(length: usize, value: f64) -> Self {
        Self::labelled(length, "constant", move |_| value)
    }

    /// `0, 1, 2, ...`
    pub fn range(length: usize) -> Self {
        Self::labelled(length, "range", |i| i as f64)
    }

    /// Unit vector along `axis`
    pub fn axis(length: usize, axis: usize) -> Result<Self> {
        if axis >= length {
            return Err(Error::out_of_bounds(axis, length));
        }
        Ok(Self::labelled(length, "axis", move |i| if i == axis { 1.0 } else { 0.0 }))
    }
}

impl fmt::Debug for ComputedVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComputedVector")
            .field("length", &self.length)
            .field("rule", &self.label)
            .finish()
    }
}

impl Vector for ComputedVector {
    #[inline]
    fn len(&self) -> usize {
        self.length
    }

    #[inline]
    fn get_unchecked(&self, i: usize) -> f64 {
        assert!(i < self.length, "index {i} out of bounds for ComputedVector of length {}", self.length);
        (self.rule)(i)
    }

    fn set_unchecked(&self, _i: usize, _value: f64) {
        panic!("ComputedVector cannot be modified")
    }

    fn flags(&self) -> VectorFlags {
        VectorFlags::empty()
    }

    /// Shares the rule; nothing is copied
    fn exact_clone(&self) -> VectorRef {
        Rc::new(self.clone())
    }
}
