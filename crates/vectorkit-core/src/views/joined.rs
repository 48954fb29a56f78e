//! Concatenation views
//!
//! A [`JoinedView`] presents two vectors end to end without copying either.

use crate::error::Result;
use crate::ext::VectorExt;
use crate::traits::{Vector, VectorFlags, VectorRef};
use std::rc::Rc;

/// Logical concatenation of two vectors
///
/// Elements `[0, left.len())` map to `left`, the rest to `right`. Both
/// sides stay live: writes through the join land in the original vectors.
#[derive(Debug, Clone)]
pub struct JoinedView {
    left: VectorRef,
    right: VectorRef,
    split: usize,
}

impl JoinedView {
    pub fn new(left: VectorRef, right: VectorRef) -> Self {
        let split = left.len();
        log::trace!("join {}({}) + {}({})", left.name(), split, right.name(), right.len());
        Self { left, right, split }
    }

    pub fn left(&self) -> &VectorRef {
        &self.left
    }

    pub fn right(&self) -> &VectorRef {
        &self.right
    }
}

impl Vector for JoinedView {
    fn len(&self) -> usize {
        self.split + self.right.len()
    }

    #[inline]
    fn get_unchecked(&self, i: usize) -> f64 {
        if i < self.split {
            self.left.get_unchecked(i)
        } else {
            self.right.get_unchecked(i - self.split)
        }
    }

    #[inline]
    fn set_unchecked(&self, i: usize, value: f64) {
        if i < self.split {
            self.left.set_unchecked(i, value)
        } else {
            self.right.set_unchecked(i - self.split, value)
        }
    }

    fn flags(&self) -> VectorFlags {
        let shared = self.left.flags() & self.right.flags();
        (shared & (VectorFlags::MUTABLE | VectorFlags::FULLY_MUTABLE)) | VectorFlags::VIEW
    }

    fn exact_clone(&self) -> VectorRef {
        Rc::new(Self::new(self.left.exact_clone(), self.right.exact_clone()))
    }

    /// Windows lying wholly on one side resolve to that side
    fn window(&self, offset: usize, length: usize) -> Option<VectorRef> {
        if offset + length <= self.split {
            self.left.sub_vector(offset, length).ok()
        } else if offset >= self.split {
            self.right.sub_vector(offset - self.split, length).ok()
        } else {
            None
        }
    }

    fn fill(&self, value: f64) -> Result<()> {
        self.ensure_mutable()?;
        self.left.fill(value)?;
        self.right.fill(value)
    }

    fn element_sum(&self) -> f64 {
        self.left.element_sum() + self.right.element_sum()
    }

    fn magnitude_squared(&self) -> f64 {
        self.left.magnitude_squared() + self.right.magnitude_squared()
    }
}
