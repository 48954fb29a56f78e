//! The shared zero-length vector

use crate::traits::{Vector, VectorFlags, VectorRef};
use std::rc::Rc;

/// The zero-length vector
///
/// Returned for every zero-length sub-range. With no elements to protect it
/// is vacuously fully mutable, so bulk writes of nothing succeed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyVector;

impl EmptyVector {
    pub fn shared() -> VectorRef {
        Rc::new(EmptyVector)
    }
}

impl Vector for EmptyVector {
    fn len(&self) -> usize {
        0
    }

    fn get_unchecked(&self, i: usize) -> f64 {
        panic!("index {i} out of bounds for empty vector")
    }

    fn set_unchecked(&self, i: usize, _value: f64) {
        panic!("index {i} out of bounds for empty vector")
    }

    fn flags(&self) -> VectorFlags {
        VectorFlags::OWNED
    }

    fn exact_clone(&self) -> VectorRef {
        Self::shared()
    }
}
