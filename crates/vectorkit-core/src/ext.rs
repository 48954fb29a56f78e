//! Handle-level operations
//!
//! Operations that return a vector sharing (or deliberately not sharing)
//! the receiver's storage need the receiver as a [`VectorRef`], so they
//! live on this extension trait rather than on [`Vector`] itself.

use crate::array::{BroadcastArray, NdArray, ReshapedArray};
use crate::error::Result;
use crate::immutable::ImmutableVector;
use crate::traits::{Vector, VectorRef};
use crate::views::{EmptyVector, JoinedView, WindowView};
use std::rc::Rc;

pub trait VectorExt {
    /// Alias `[offset, offset + length)`
    ///
    /// The whole range returns the same handle and a zero-length range
    /// returns an [`EmptyVector`]. A range outside `[0, len()]` fails with
    /// the out-of-bounds [`Error::InvalidRange`](crate::Error::InvalidRange).
    fn sub_vector(&self, offset: usize, length: usize) -> Result<VectorRef>;

    /// Logical concatenation; an empty side returns the other handle
    fn join(&self, other: &VectorRef) -> VectorRef;

    /// Alias rotated left by `shift` positions, so element `i` of the
    /// result is element `(i + shift) mod len` of the receiver
    fn rotate_view(&self, shift: isize) -> VectorRef;

    /// The same handle if fully mutable, otherwise an owning copy
    fn mutable(&self) -> VectorRef;

    /// The same handle if not mutable, otherwise a read-only snapshot
    fn immutable(&self) -> VectorRef;

    /// Repeat along leading dimensions; the trailing dimension must equal `len()`
    fn broadcast(&self, shape: &[usize]) -> Result<BroadcastArray>;

    /// Broadcast to the shape of another array
    fn broadcast_like(&self, target: &dyn NdArray) -> Result<BroadcastArray>;

    /// Row-major N-dimensional view over the same elements
    fn reshape(&self, shape: &[usize]) -> Result<ReshapedArray>;

    /// A vector is already a vector
    fn as_vector(&self) -> VectorRef;
}

/// Window over a validated proper sub-range
fn window_of(v: &VectorRef, offset: usize, length: usize) -> VectorRef {
    v.window(offset, length)
        .unwrap_or_else(|| Rc::new(WindowView::new_unchecked(Rc::clone(v), offset, length)))
}

impl VectorExt for VectorRef {
    fn sub_vector(&self, offset: usize, length: usize) -> Result<VectorRef> {
        self.check_range(offset, length)?;
        if length == self.len() {
            return Ok(Rc::clone(self));
        }
        if length == 0 {
            return Ok(EmptyVector::shared());
        }
        Ok(window_of(self, offset, length))
    }

    fn join(&self, other: &VectorRef) -> VectorRef {
        if self.is_empty() {
            return Rc::clone(other);
        }
        if other.is_empty() {
            return Rc::clone(self);
        }
        Rc::new(JoinedView::new(Rc::clone(self), Rc::clone(other)))
    }

    fn rotate_view(&self, shift: isize) -> VectorRef {
        let n = self.len();
        if n == 0 {
            return Rc::clone(self);
        }
        let s = shift.rem_euclid(n as isize) as usize;
        if s == 0 {
            return Rc::clone(self);
        }
        window_of(self, s, n - s).join(&window_of(self, 0, s))
    }

    fn mutable(&self) -> VectorRef {
        if self.is_fully_mutable() {
            return Rc::clone(self);
        }
        log::debug!("copying {} of length {} for mutable access", self.name(), self.len());
        self.clone_vector()
    }

    fn immutable(&self) -> VectorRef {
        if !self.is_mutable() {
            return Rc::clone(self);
        }
        log::debug!("snapshotting {} of length {} for immutable access", self.name(), self.len());
        Rc::new(ImmutableVector::snapshot(&**self))
    }

    fn broadcast(&self, shape: &[usize]) -> Result<BroadcastArray> {
        BroadcastArray::new(Rc::clone(self), shape)
    }

    fn broadcast_like(&self, target: &dyn NdArray) -> Result<BroadcastArray> {
        self.broadcast(&target.shape())
    }

    fn reshape(&self, shape: &[usize]) -> Result<ReshapedArray> {
        ReshapedArray::new(Rc::clone(self), shape)
    }

    fn as_vector(&self) -> VectorRef {
        Rc::clone(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::computed::ComputedVector;
    use crate::dense::DenseVector;
    use crate::error::Error;

    fn dense(values: &[f64]) -> VectorRef {
        Rc::new(DenseVector::from_slice(values))
    }

    #[test]
    fn test_sub_vector_special_cases() {
        let v = dense(&[1.0, 2.0, 3.0]);
        assert!(Rc::ptr_eq(&v.sub_vector(0, 3).unwrap(), &v));

        let e = v.sub_vector(2, 0).unwrap();
        assert!(e.is_empty());
        assert!(!e.is_view());

        let w = v.sub_vector(1, 2).unwrap();
        assert!(w.is_view());
        assert_eq!(w.to_vec(), vec![2.0, 3.0]);

        assert!(matches!(v.sub_vector(2, 2), Err(Error::InvalidRange { .. })));
        assert!(v.sub_vector(2, 2).unwrap_err().is_out_of_bounds());
        assert!(v.sub_vector(usize::MAX, 2).unwrap_err().is_out_of_bounds());
        assert!(v.sub_vector(4, 0).is_err());
    }

    #[test]
    fn test_join_with_empty_returns_other() {
        let v = dense(&[1.0]);
        let e = EmptyVector::shared();
        assert!(Rc::ptr_eq(&v.join(&e), &v));
        assert!(Rc::ptr_eq(&e.join(&v), &v));
    }

    #[test]
    fn test_rotate_view() {
        let v = dense(&[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(v.rotate_view(1).to_vec(), vec![1.0, 2.0, 3.0, 0.0]);
        assert_eq!(v.rotate_view(-1).to_vec(), vec![3.0, 0.0, 1.0, 2.0]);
        assert_eq!(v.rotate_view(6).to_vec(), vec![2.0, 3.0, 0.0, 1.0]);
        assert!(Rc::ptr_eq(&v.rotate_view(4), &v));

        let r = v.rotate_view(1);
        r.set(3, 100.0).unwrap();
        assert_eq!(v.get(0).unwrap(), 100.0);

        let empty = EmptyVector::shared();
        assert!(Rc::ptr_eq(&empty.rotate_view(3), &empty));
    }

    #[test]
    fn test_sub_vector_of_rotation_resolves_to_owner_window() {
        let v = dense(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let r = v.rotate_view(2);
        let tail = r.sub_vector(3, 2).unwrap();
        assert_eq!(tail.to_vec(), vec![0.0, 1.0]);
        assert!(tail.contiguous().is_some());
    }

    #[test]
    fn test_mutable_and_immutable() {
        let v = dense(&[1.0, 2.0]);
        assert!(Rc::ptr_eq(&v.mutable(), &v));

        let frozen = v.immutable();
        assert!(!frozen.is_mutable());
        v.set(0, 5.0).unwrap();
        assert_eq!(frozen.get(0).unwrap(), 1.0);
        assert!(Rc::ptr_eq(&frozen.immutable(), &frozen));

        let thawed = frozen.mutable();
        assert!(thawed.is_fully_mutable());
        thawed.set(1, 0.0).unwrap();
        assert_eq!(frozen.get(1).unwrap(), 2.0);
    }

    #[test]
    fn test_broadcast_and_reshape() {
        let v = dense(&[1.0, 2.0, 3.0, 4.0]);
        let b = v.broadcast(&[3, 4]).unwrap();
        assert_eq!(b.get_at(&[2, 3]).unwrap(), 4.0);
        assert!(v.broadcast(&[4, 3]).is_err());

        let m = v.reshape(&[2, 2]).unwrap();
        let like = v.broadcast_like(&ReshapedArray::new(dense(&[0.0; 8]), &[2, 4]).unwrap()).unwrap();
        assert_eq!(like.shape(), vec![2, 4]);
        assert_eq!(m.get_at(&[1, 1]).unwrap(), 4.0);
        assert!(matches!(v.reshape(&[3, 2]), Err(Error::ShapeMismatch { .. })));
        assert!(Rc::ptr_eq(&v.as_vector(), &v));
    }

    #[test]
    fn test_views_over_computed_vectors_are_read_only() {
        let c: VectorRef = Rc::new(ComputedVector::range(4));
        let w = c.sub_vector(1, 2).unwrap();
        assert!(!w.is_mutable());
        assert!(matches!(w.set(0, 1.0), Err(Error::Immutable(_))));
        assert!(Rc::ptr_eq(&w.immutable(), &w));
    }
}
