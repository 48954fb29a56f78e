//! Contiguous sub-range views
//!
//! A [`WindowView`] aliases part of another vector. Reads and writes go
//! straight to the owner, offset by the window start.

use crate::dense::DenseVector;
use crate::error::{Error, Result};
use crate::traits::{Vector, VectorFlags, VectorRef};
use std::cell::Cell;
use std::rc::Rc;

/// A contiguous window `[offset, offset + length)` over another vector
///
/// Windows over windows re-target the outermost owner, so element access
/// never chains through more than one level.
#[derive(Debug, Clone)]
pub struct WindowView {
    owner: VectorRef,
    offset: usize,
    length: usize,
}

impl WindowView {
    /// Create a window, validating that the range fits inside `owner`
    pub fn new(owner: VectorRef, offset: usize, length: usize) -> Result<Self> {
        owner.check_range(offset, length)?;
        Ok(Self::new_unchecked(owner, offset, length))
    }

    pub(crate) fn new_unchecked(owner: VectorRef, offset: usize, length: usize) -> Self {
        log::trace!(
            "window [{offset}, {}) over {} of length {}",
            offset + length,
            owner.name(),
            owner.len()
        );
        Self {
            owner,
            offset,
            length,
        }
    }

    /// The vector this window reads from and writes to
    pub fn owner(&self) -> &VectorRef {
        &self.owner
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Vector for WindowView {
    #[inline]
    fn len(&self) -> usize {
        self.length
    }

    #[inline]
    fn get_unchecked(&self, i: usize) -> f64 {
        assert!(i < self.length, "index {i} out of bounds for window of length {}", self.length);
        self.owner.get_unchecked(self.offset + i)
    }

    #[inline]
    fn set_unchecked(&self, i: usize, value: f64) {
        assert!(i < self.length, "index {i} out of bounds for window of length {}", self.length);
        self.owner.set_unchecked(self.offset + i, value)
    }

    fn flags(&self) -> VectorFlags {
        let inherited = self.owner.flags() & (VectorFlags::MUTABLE | VectorFlags::FULLY_MUTABLE);
        inherited | VectorFlags::VIEW
    }

    /// A window over a private copy of just this range
    ///
    /// Read-only owners cannot change underneath the window, so the clone
    /// shares them instead.
    fn exact_clone(&self) -> VectorRef {
        if !self.owner.is_mutable() {
            return Rc::new(self.clone());
        }
        let copy: VectorRef = Rc::new(DenseVector::from_vec(self.to_vec()));
        Rc::new(Self::new_unchecked(copy, 0, self.length))
    }

    fn contiguous(&self) -> Option<&[Cell<f64>]> {
        self.owner
            .contiguous()
            .map(|cells| &cells[self.offset..self.offset + self.length])
    }

    fn window(&self, offset: usize, length: usize) -> Option<VectorRef> {
        Some(Rc::new(Self::new_unchecked(
            Rc::clone(&self.owner),
            self.offset + offset,
            length,
        )))
    }

    fn fill(&self, value: f64) -> Result<()> {
        self.ensure_mutable()?;
        self.owner.fill_range(self.offset, self.length, value)
    }

    fn set_values(&self, values: &[f64]) -> Result<()> {
        if values.len() != self.length {
            return Err(Error::size_mismatch(self.length, values.len(), "set_values"));
        }
        self.owner.set_range(self.offset, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::computed::ComputedVector;
    use crate::index::Index;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn owner() -> VectorRef {
        Rc::new(DenseVector::from_slice(&[0.0, 1.0, 2.0, 3.0, 4.0]))
    }

    #[test]
    fn test_window_reads_and_writes_through() {
        let base = owner();
        let w = WindowView::new(Rc::clone(&base), 1, 3).unwrap();
        assert_eq!(w.to_vec(), vec![1.0, 2.0, 3.0]);

        w.set(0, 10.0).unwrap();
        assert_eq!(base.get(1).unwrap(), 10.0);

        base.set(3, 30.0).unwrap();
        assert_eq!(w.get(2).unwrap(), 30.0);

        assert!(w.set(3, 0.0).is_err());
    }

    #[test]
    fn test_window_range_validation() {
        assert!(matches!(
            WindowView::new(owner(), 3, 3),
            Err(Error::InvalidRange { offset: 3, length: 3, total: 5 })
        ));
        assert!(WindowView::new(owner(), 5, 0).is_ok());
    }

    #[test]
    fn test_flags_inherit_mutability() {
        let w = WindowView::new(owner(), 0, 2).unwrap();
        assert!(w.is_view());
        assert!(w.is_mutable());

        let computed: VectorRef = Rc::new(ComputedVector::range(5));
        let w = WindowView::new(computed, 1, 2).unwrap();
        assert!(w.is_view());
        assert!(!w.is_mutable());
        assert_eq!(w.to_vec(), vec![1.0, 2.0]);
        assert!(w.fill(0.0).is_err());
    }

    #[test]
    fn test_nested_window_targets_owner() {
        let base = owner();
        let outer = WindowView::new(Rc::clone(&base), 1, 4).unwrap();
        let inner = outer.window(1, 2).unwrap();
        assert_eq!(inner.to_vec(), vec![2.0, 3.0]);
        assert_eq!(inner.contiguous().map(|c| c.len()), Some(2));

        inner.fill(-1.0).unwrap();
        assert_eq!(base.to_vec(), vec![0.0, 1.0, -1.0, -1.0, 4.0]);
    }

    #[test]
    fn test_exact_clone_detaches() {
        let base = owner();
        let w = WindowView::new(Rc::clone(&base), 2, 2).unwrap();
        let c = w.exact_clone();
        c.set(0, 99.0).unwrap();
        assert_eq!(base.get(2).unwrap(), 2.0);
        assert!(c.is_view());
        assert_eq!(c.to_vec(), vec![99.0, 3.0]);
    }

    #[test]
    fn test_exact_clone_copies_only_the_range() {
        let base: VectorRef = Rc::new(DenseVector::zeros(1000));
        let w = WindowView::new(Rc::clone(&base), 10, 3).unwrap();
        w.set_values(&[1.0, 2.0, 3.0]).unwrap();

        let c = w.exact_clone();
        assert_eq!(c.to_vec(), vec![1.0, 2.0, 3.0]);
        assert!(c.is_fully_mutable());
        assert_eq!(c.contiguous().map(|cells| cells.len()), Some(3));
    }

    #[test]
    fn test_exact_clone_shares_read_only_owner() {
        let computed: VectorRef = Rc::new(ComputedVector::range(5));
        let w = WindowView::new(computed, 1, 3).unwrap();
        let c = w.exact_clone();
        assert!(c.is_view());
        assert!(!c.is_mutable());
        assert_eq!(c.to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_unchecked_access_stays_inside_the_window() {
        let base: VectorRef = Rc::new(DenseVector::zeros(6));
        let w = WindowView::new(Rc::clone(&base), 0, 2).unwrap();

        let write = catch_unwind(AssertUnwindSafe(|| w.set_unchecked(4, 1.0)));
        assert!(write.is_err());
        let read = catch_unwind(AssertUnwindSafe(|| w.get_unchecked(2)));
        assert!(read.is_err());
        assert_eq!(base.to_vec(), vec![0.0; 6]);
    }

    #[test]
    fn test_scatter_past_the_window_leaves_owner_untouched() {
        let base: VectorRef = Rc::new(DenseVector::zeros(6));
        let w = WindowView::new(Rc::clone(&base), 0, 2).unwrap();
        let source = DenseVector::from_slice(&[1.0]);

        let scatter = catch_unwind(AssertUnwindSafe(|| {
            let _ = w.add_multiple_scatter(&source, &Index::new(vec![4]), 1.0);
        }));
        assert!(scatter.is_err());
        assert_eq!(base.to_vec(), vec![0.0; 6]);
    }

    #[test]
    fn test_set_values_length_checked() {
        let base = owner();
        let w = WindowView::new(Rc::clone(&base), 0, 2).unwrap();
        assert!(w.set_values(&[1.0, 2.0, 3.0]).is_err());
        w.set_values(&[7.0, 8.0]).unwrap();
        assert_eq!(base.to_vec(), vec![7.0, 8.0, 2.0, 3.0, 4.0]);
    }
}
