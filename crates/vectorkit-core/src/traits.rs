//! The core vector trait
//!
//! [`Vector`] is the single capability interface shared by every vector
//! variant: owning storage, windowed and joined views, computed vectors and
//! immutable snapshots. Implementors provide only length, unchecked element
//! access, capability flags and `exact_clone`; every other operation has a
//! default implementation expressed in terms of those, so a new storage
//! layout gets the full algebra immediately.
//!
//! Leaf types may override hot paths (bulk copy, dot product, sums) for
//! performance without changing observable behaviour. Fast paths consult
//! [`Vector::contiguous`] rather than inspecting concrete types.
//!
//! # Error discipline
//!
//! Mutating operations validate operand lengths and receiver mutability
//! before writing anything, so a failed call leaves the receiver untouched.
//! The `*_unchecked` accessors skip bounds checks; out-of-range indices are
//! a hard failure (panic), never a recoverable error.

use crate::array::NdArray;
use crate::config;
use crate::dense::DenseVector;
use crate::error::{Error, Result};
use crate::index::Index;
use bitflags::bitflags;
use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use vectorkit_ops::Operator;

/// Shared handle to any vector
pub type VectorRef = Rc<dyn Vector>;

bitflags! {
    /// Structural properties of a vector variant
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VectorFlags: u8 {
        /// Elements can be written
        const MUTABLE = 0b0000_0001;
        /// Every element can hold any `f64` value
        const FULLY_MUTABLE = 0b0000_0010;
        /// Aliases another vector's storage instead of owning it
        const VIEW = 0b0000_0100;
    }
}

impl VectorFlags {
    /// Flags of a plain owning, writable vector
    pub const OWNED: VectorFlags = VectorFlags::MUTABLE.union(VectorFlags::FULLY_MUTABLE);
}

/// A fixed-length sequence of `f64` values
pub trait Vector: fmt::Debug {
    // ------------------------------------------------------------------
    // Required
    // ------------------------------------------------------------------

    /// Number of elements; fixed for the lifetime of the vector
    fn len(&self) -> usize;

    /// Read element `i` without a bounds check
    ///
    /// Out-of-range indices panic or return an unspecified element.
    fn get_unchecked(&self, i: usize) -> f64;

    /// Write element `i` without bounds or mutability checks
    ///
    /// Immutable variants panic.
    fn set_unchecked(&self, i: usize, value: f64);

    /// Structural capability flags
    fn flags(&self) -> VectorFlags;

    /// A copy of the same concrete type
    ///
    /// Immutable variants may share their underlying data.
    fn exact_clone(&self) -> VectorRef;

    // ------------------------------------------------------------------
    // Capability hooks
    // ------------------------------------------------------------------

    /// Direct access to contiguous backing storage, when there is any
    fn contiguous(&self) -> Option<&[Cell<f64>]> {
        None
    }

    /// Build a window over `[offset, offset + length)` that targets this
    /// vector's own backing vectors directly
    ///
    /// Called only with validated, proper sub-ranges. Returning `None`
    /// makes the caller wrap the handle in a `WindowView`.
    fn window(&self, _offset: usize, _length: usize) -> Option<VectorRef> {
        None
    }

    /// Short type name, used in error messages
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Wrap in a shared handle
    fn into_ref(self) -> VectorRef
    where
        Self: Sized + 'static,
    {
        Rc::new(self)
    }

    // ------------------------------------------------------------------
    // Access and capability queries
    // ------------------------------------------------------------------

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_mutable(&self) -> bool {
        self.flags().contains(VectorFlags::MUTABLE)
    }

    fn is_fully_mutable(&self) -> bool {
        self.flags().contains(VectorFlags::FULLY_MUTABLE)
    }

    fn is_view(&self) -> bool {
        self.flags().contains(VectorFlags::VIEW)
    }

    /// Fail with [`Error::Immutable`] unless the vector is writable
    fn ensure_mutable(&self) -> Result<()> {
        if self.is_mutable() {
            Ok(())
        } else {
            Err(Error::immutable(self.name()))
        }
    }

    /// Fail with [`Error::DimensionMismatch`] unless `actual == len()`
    fn check_length(&self, actual: usize, context: &str) -> Result<()> {
        if actual == self.len() {
            Ok(())
        } else {
            Err(Error::size_mismatch(self.len(), actual, context))
        }
    }

    /// Fail with [`Error::InvalidRange`] unless the range fits inside the vector
    fn check_range(&self, offset: usize, length: usize) -> Result<()> {
        match offset.checked_add(length) {
            Some(end) if end <= self.len() => Ok(()),
            _ => Err(Error::invalid_range(offset, length, self.len())),
        }
    }

    /// Bounds-checked read
    fn get(&self, i: usize) -> Result<f64> {
        if i >= self.len() {
            return Err(Error::out_of_bounds(i, self.len()));
        }
        Ok(self.get_unchecked(i))
    }

    /// Bounds- and mutability-checked write
    fn set(&self, i: usize, value: f64) -> Result<()> {
        if i >= self.len() {
            return Err(Error::out_of_bounds(i, self.len()));
        }
        self.ensure_mutable()?;
        self.set_unchecked(i, value);
        Ok(())
    }

    /// Add `value` to element `i`
    fn add_at(&self, i: usize, value: f64) -> Result<()> {
        let current = self.get(i)?;
        self.set(i, current + value)
    }

    // ------------------------------------------------------------------
    // Bulk assignment
    // ------------------------------------------------------------------

    fn fill(&self, value: f64) -> Result<()> {
        self.ensure_mutable()?;
        for i in 0..self.len() {
            self.set_unchecked(i, value);
        }
        Ok(())
    }

    fn fill_range(&self, offset: usize, length: usize, value: f64) -> Result<()> {
        self.check_range(offset, length)?;
        self.ensure_mutable()?;
        for i in offset..offset + length {
            self.set_unchecked(i, value);
        }
        Ok(())
    }

    /// Copy every element from a raw buffer of the same length
    fn set_values(&self, values: &[f64]) -> Result<()> {
        self.check_length(values.len(), "set_values")?;
        self.ensure_mutable()?;
        for (i, &v) in values.iter().enumerate() {
            self.set_unchecked(i, v);
        }
        Ok(())
    }

    /// Copy every element from another vector of the same length
    fn set_from(&self, src: &dyn Vector) -> Result<()> {
        self.check_length(src.len(), "set_from")?;
        self.ensure_mutable()?;
        for i in 0..self.len() {
            self.set_unchecked(i, src.get_unchecked(i));
        }
        Ok(())
    }

    /// Copy `len()` elements from `src`, starting at `src_offset`
    fn set_from_offset(&self, src: &dyn Vector, src_offset: usize) -> Result<()> {
        src.check_range(src_offset, self.len())?;
        self.ensure_mutable()?;
        for i in 0..self.len() {
            self.set_unchecked(i, src.get_unchecked(src_offset + i));
        }
        Ok(())
    }

    /// Overwrite `[offset, offset + data.len())` from a raw buffer
    fn set_range(&self, offset: usize, data: &[f64]) -> Result<()> {
        self.check_range(offset, data.len())?;
        self.ensure_mutable()?;
        for (i, &v) in data.iter().enumerate() {
            self.set_unchecked(offset + i, v);
        }
        Ok(())
    }

    /// Gather: `self[i] = source[indexes[i]]`
    ///
    /// Panics before writing if any index value is outside `source`.
    fn set_indexed(&self, source: &dyn Vector, indexes: &Index) -> Result<()> {
        self.check_length(indexes.len(), "set_indexed")?;
        self.ensure_mutable()?;
        indexes.assert_within(source.len(), "set_indexed");
        for (i, j) in indexes.iter().enumerate() {
            self.set_unchecked(i, source.get_unchecked(j));
        }
        Ok(())
    }

    /// Assign from a one-dimensional array, or broadcast a zero-dimensional one
    fn set_array(&self, a: &dyn NdArray) -> Result<()> {
        match a.shape().as_slice() {
            [] => self.fill(a.get_at(&[])?),
            [n] if *n == self.len() => self.set_values(&a.to_flat_vec()),
            shape => Err(Error::shape_mismatch(shape, self.len())),
        }
    }

    /// Copy all elements into a buffer of the same length
    fn copy_to(&self, dest: &mut [f64]) -> Result<()> {
        self.check_length(dest.len(), "copy_to")?;
        for (i, d) in dest.iter_mut().enumerate() {
            *d = self.get_unchecked(i);
        }
        Ok(())
    }

    fn to_vec(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.get_unchecked(i)).collect()
    }

    // ------------------------------------------------------------------
    // Clamping
    // ------------------------------------------------------------------

    fn clamp(&self, min: f64, max: f64) -> Result<()> {
        self.ensure_mutable()?;
        for i in 0..self.len() {
            let v = self.get_unchecked(i);
            if v < min {
                self.set_unchecked(i, min);
            } else if v > max {
                self.set_unchecked(i, max);
            }
        }
        Ok(())
    }

    fn clamp_min(&self, min: f64) -> Result<()> {
        self.clamp(min, f64::INFINITY)
    }

    fn clamp_max(&self, max: f64) -> Result<()> {
        self.clamp(f64::NEG_INFINITY, max)
    }

    // ------------------------------------------------------------------
    // Elementwise arithmetic
    // ------------------------------------------------------------------

    /// Apply `f(self[i], other[i])` to every element
    #[doc(hidden)]
    fn zip_assign(&self, other: &dyn Vector, context: &str, f: &dyn Fn(f64, f64) -> f64) -> Result<()> {
        self.check_length(other.len(), context)?;
        self.ensure_mutable()?;
        for i in 0..self.len() {
            self.set_unchecked(i, f(self.get_unchecked(i), other.get_unchecked(i)));
        }
        Ok(())
    }

    /// Apply `f(self[i], values[i])` to every element
    #[doc(hidden)]
    fn zip_assign_slice(&self, values: &[f64], context: &str, f: &dyn Fn(f64, f64) -> f64) -> Result<()> {
        self.check_length(values.len(), context)?;
        self.ensure_mutable()?;
        for (i, &v) in values.iter().enumerate() {
            self.set_unchecked(i, f(self.get_unchecked(i), v));
        }
        Ok(())
    }

    /// Apply `f(self[i])` to every element
    #[doc(hidden)]
    fn map_assign(&self, f: &dyn Fn(f64) -> f64) -> Result<()> {
        self.ensure_mutable()?;
        for i in 0..self.len() {
            self.set_unchecked(i, f(self.get_unchecked(i)));
        }
        Ok(())
    }

    fn add(&self, other: &dyn Vector) -> Result<()> {
        self.zip_assign(other, "add", &|a, b| a + b)
    }

    fn add_scalar(&self, constant: f64) -> Result<()> {
        self.map_assign(&|a| a + constant)
    }

    fn add_slice(&self, values: &[f64]) -> Result<()> {
        self.zip_assign_slice(values, "add_slice", &|a, b| a + b)
    }

    /// Add a one-dimensional array, or broadcast a zero-dimensional one
    fn add_array(&self, a: &dyn NdArray) -> Result<()> {
        match a.shape().as_slice() {
            [] => self.add_scalar(a.get_at(&[])?),
            [n] if *n == self.len() => self.add_slice(&a.to_flat_vec()),
            shape => Err(Error::shape_mismatch(shape, self.len())),
        }
    }

    /// Add `other` into `[offset, offset + other.len())`
    fn add_at_offset(&self, offset: usize, other: &dyn Vector) -> Result<()> {
        self.check_range(offset, other.len())?;
        self.ensure_mutable()?;
        for i in 0..other.len() {
            let j = offset + i;
            self.set_unchecked(j, self.get_unchecked(j) + other.get_unchecked(i));
        }
        Ok(())
    }

    /// `self += other * factor`
    fn add_multiple(&self, other: &dyn Vector, factor: f64) -> Result<()> {
        self.zip_assign(other, "add_multiple", &|a, b| a + b * factor)
    }

    /// `self += a * b * factor`, elementwise
    fn add_product(&self, a: &dyn Vector, b: &dyn Vector, factor: f64) -> Result<()> {
        self.check_length(a.len(), "add_product")?;
        self.check_length(b.len(), "add_product")?;
        self.ensure_mutable()?;
        for i in 0..self.len() {
            let v = self.get_unchecked(i) + a.get_unchecked(i) * b.get_unchecked(i) * factor;
            self.set_unchecked(i, v);
        }
        Ok(())
    }

    /// Weighted average update: `self = self * (1 - factor) + other * factor`
    fn add_weighted(&self, other: &dyn Vector, factor: f64) -> Result<()> {
        self.zip_assign(other, "add_weighted", &|a, b| a * (1.0 - factor) + b * factor)
    }

    fn sub(&self, other: &dyn Vector) -> Result<()> {
        self.zip_assign(other, "sub", &|a, b| a - b)
    }

    fn sub_scalar(&self, constant: f64) -> Result<()> {
        self.add_scalar(-constant)
    }

    fn sub_slice(&self, values: &[f64]) -> Result<()> {
        self.zip_assign_slice(values, "sub_slice", &|a, b| a - b)
    }

    /// `self -= other * factor`
    fn sub_multiple(&self, other: &dyn Vector, factor: f64) -> Result<()> {
        self.add_multiple(other, -factor)
    }

    fn multiply(&self, other: &dyn Vector) -> Result<()> {
        self.zip_assign(other, "multiply", &|a, b| a * b)
    }

    fn multiply_scalar(&self, factor: f64) -> Result<()> {
        self.map_assign(&|a| a * factor)
    }

    fn multiply_slice(&self, values: &[f64]) -> Result<()> {
        self.zip_assign_slice(values, "multiply_slice", &|a, b| a * b)
    }

    fn divide(&self, other: &dyn Vector) -> Result<()> {
        self.zip_assign(other, "divide", &|a, b| a / b)
    }

    fn divide_scalar(&self, factor: f64) -> Result<()> {
        self.map_assign(&|a| a / factor)
    }

    fn divide_slice(&self, values: &[f64]) -> Result<()> {
        self.zip_assign_slice(values, "divide_slice", &|a, b| a / b)
    }

    /// `self = self * factor + constant`
    fn scale_add(&self, factor: f64, constant: f64) -> Result<()> {
        self.map_assign(&|a| a * factor + constant)
    }

    fn negate(&self) -> Result<()> {
        self.multiply_scalar(-1.0)
    }

    fn abs(&self) -> Result<()> {
        self.map_assign(&f64::abs)
    }

    fn square(&self) -> Result<()> {
        self.map_assign(&|a| a * a)
    }

    fn signum(&self) -> Result<()> {
        self.map_assign(&|a| if a == 0.0 { 0.0 } else { a.signum() })
    }

    fn pow(&self, exponent: f64) -> Result<()> {
        self.map_assign(&|a| a.powf(exponent))
    }

    /// Apply an operator to every element
    fn apply_op(&self, op: &dyn Operator) -> Result<()> {
        self.map_assign(&|a| op.apply(a))
    }

    /// `self = v * alpha + self * (1 - alpha)`; `alpha` outside `[0, 1]` extrapolates
    fn interpolate(&self, v: &dyn Vector, alpha: f64) -> Result<()> {
        self.add_weighted(v, alpha)
    }

    /// `self = a * (1 - alpha) + b * alpha`
    ///
    /// Either operand may be the receiver itself.
    fn interpolate_between(&self, a: &dyn Vector, b: &dyn Vector, alpha: f64) -> Result<()> {
        self.check_length(a.len(), "interpolate_between")?;
        self.check_length(b.len(), "interpolate_between")?;
        self.ensure_mutable()?;
        for i in 0..self.len() {
            let (x, y) = (a.get_unchecked(i), b.get_unchecked(i));
            self.set_unchecked(i, x * (1.0 - alpha) + y * alpha);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Reductions
    // ------------------------------------------------------------------

    fn element_sum(&self) -> f64 {
        (0..self.len()).map(|i| self.get_unchecked(i)).sum()
    }

    /// Largest element; `-inf` for an empty vector
    fn element_max(&self) -> f64 {
        (0..self.len())
            .map(|i| self.get_unchecked(i))
            .fold(f64::NEG_INFINITY, |m, v| if v > m { v } else { m })
    }

    /// Smallest element; `+inf` for an empty vector
    fn element_min(&self) -> f64 {
        (0..self.len())
            .map(|i| self.get_unchecked(i))
            .fold(f64::INFINITY, |m, v| if v < m { v } else { m })
    }

    fn magnitude_squared(&self) -> f64 {
        (0..self.len())
            .map(|i| {
                let x = self.get_unchecked(i);
                x * x
            })
            .sum()
    }

    fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Largest absolute value; `0.0` for an empty vector
    fn max_abs_element(&self) -> f64 {
        (0..self.len())
            .map(|i| self.get_unchecked(i).abs())
            .fold(0.0, |m, v| if v > m { v } else { m })
    }

    /// Position of the first element that beats all others under `better`
    #[doc(hidden)]
    fn best_index(&self, operation: &str, key: &dyn Fn(f64) -> f64, better: &dyn Fn(f64, f64) -> bool) -> Result<usize> {
        if self.is_empty() {
            return Err(Error::empty_vector(operation));
        }
        let mut best_i = 0;
        let mut best = key(self.get_unchecked(0));
        for i in 1..self.len() {
            let v = key(self.get_unchecked(i));
            if better(v, best) {
                best_i = i;
                best = v;
            }
        }
        Ok(best_i)
    }

    /// Index of the largest absolute value; ties resolve to the lowest index
    fn max_abs_element_index(&self) -> Result<usize> {
        self.best_index("max_abs_element_index", &f64::abs, &|v, best| v > best)
    }

    /// Index of the largest element; ties resolve to the lowest index
    fn max_element_index(&self) -> Result<usize> {
        self.best_index("max_element_index", &|v| v, &|v, best| v > best)
    }

    /// Index of the smallest element; ties resolve to the lowest index
    fn min_element_index(&self) -> Result<usize> {
        self.best_index("min_element_index", &|v| v, &|v, best| v < best)
    }

    fn non_zero_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.get_unchecked(i) != 0.0).count()
    }

    fn zero_count(&self) -> usize {
        self.len() - self.non_zero_count()
    }

    fn is_zero(&self) -> bool {
        (0..self.len()).all(|i| self.get_unchecked(i) == 0.0)
    }

    /// Whether the magnitude is 1 within the configured tolerance
    fn is_unit_length(&self) -> bool {
        (self.magnitude_squared() - 1.0).abs() < config::epsilon()
    }

    // ------------------------------------------------------------------
    // Products, norms and distances
    // ------------------------------------------------------------------

    /// Sum of pairwise products; `0.0` for empty vectors
    fn dot_product(&self, other: &dyn Vector) -> Result<f64> {
        self.check_length(other.len(), "dot_product")?;
        Ok((0..self.len())
            .map(|i| self.get_unchecked(i) * other.get_unchecked(i))
            .sum())
    }

    fn dot_product_slice(&self, values: &[f64]) -> Result<f64> {
        self.check_length(values.len(), "dot_product_slice")?;
        Ok(values
            .iter()
            .enumerate()
            .map(|(i, &v)| self.get_unchecked(i) * v)
            .sum())
    }

    /// `sum(self[indexes[i]] * v[i])`
    ///
    /// Panics if any index value is outside this vector.
    fn dot_product_indexed(&self, v: &dyn Vector, indexes: &Index) -> Result<f64> {
        if indexes.len() != v.len() {
            return Err(Error::size_mismatch(v.len(), indexes.len(), "dot_product_indexed"));
        }
        indexes.assert_within(self.len(), "dot_product_indexed");
        Ok(indexes
            .iter()
            .enumerate()
            .map(|(i, j)| self.get_unchecked(j) * v.get_unchecked(i))
            .sum())
    }

    /// In-place cross product; both vectors must have length 3
    fn cross_product(&self, a: &dyn Vector) -> Result<()> {
        if self.len() != 3 {
            return Err(Error::size_mismatch(3, self.len(), "cross_product"));
        }
        if a.len() != 3 {
            return Err(Error::size_mismatch(3, a.len(), "cross_product"));
        }
        self.ensure_mutable()?;
        let (x, y, z) = (self.get_unchecked(0), self.get_unchecked(1), self.get_unchecked(2));
        let (x2, y2, z2) = (a.get_unchecked(0), a.get_unchecked(1), a.get_unchecked(2));
        self.set_unchecked(0, y * z2 - z * y2);
        self.set_unchecked(1, z * x2 - x * z2);
        self.set_unchecked(2, x * y2 - y * x2);
        Ok(())
    }

    fn distance_squared(&self, other: &dyn Vector) -> Result<f64> {
        self.check_length(other.len(), "distance_squared")?;
        Ok((0..self.len())
            .map(|i| {
                let d = self.get_unchecked(i) - other.get_unchecked(i);
                d * d
            })
            .sum())
    }

    fn distance(&self, other: &dyn Vector) -> Result<f64> {
        Ok(self.distance_squared(other)?.sqrt())
    }

    fn distance_l1(&self, other: &dyn Vector) -> Result<f64> {
        self.check_length(other.len(), "distance_l1")?;
        Ok((0..self.len())
            .map(|i| (self.get_unchecked(i) - other.get_unchecked(i)).abs())
            .sum())
    }

    fn distance_linf(&self, other: &dyn Vector) -> Result<f64> {
        self.check_length(other.len(), "distance_linf")?;
        Ok((0..self.len())
            .map(|i| (self.get_unchecked(i) - other.get_unchecked(i)).abs())
            .fold(0.0, f64::max))
    }

    /// Angle between two vectors in radians
    fn angle(&self, other: &dyn Vector) -> Result<f64> {
        let dot = self.dot_product(other)?;
        Ok((dot / (self.magnitude() * other.magnitude())).acos())
    }

    // ------------------------------------------------------------------
    // Normalisation
    // ------------------------------------------------------------------

    /// Scale to unit magnitude and return the previous magnitude
    ///
    /// A zero vector is left unchanged and `0.0` is returned.
    fn normalise(&self) -> Result<f64> {
        self.ensure_mutable()?;
        let d = self.magnitude();
        if d > 0.0 {
            self.multiply_scalar(1.0 / d)?;
        }
        Ok(d)
    }

    /// Scale so the largest absolute element is 1, returning its previous value
    fn normalise_max_abs_element(&self) -> Result<f64> {
        self.ensure_mutable()?;
        let scale = self.max_abs_element();
        if scale != 0.0 {
            self.multiply_scalar(1.0 / scale)?;
        }
        Ok(scale)
    }

    /// Scale to `target` magnitude and return the previous magnitude
    ///
    /// A zero vector is left unchanged.
    fn scale_to_magnitude(&self, target: f64) -> Result<f64> {
        self.ensure_mutable()?;
        let old = self.magnitude();
        if old > 0.0 {
            self.multiply_scalar(target / old)?;
        }
        Ok(old)
    }

    // ------------------------------------------------------------------
    // Scatter / gather
    // ------------------------------------------------------------------

    /// Scatter: `self[source_to_dest[i]] += source[i] * factor`
    ///
    /// The index length must equal the source length. An index value outside
    /// this vector panics before any element is written.
    fn add_multiple_scatter(&self, source: &dyn Vector, source_to_dest: &Index, factor: f64) -> Result<()> {
        if source_to_dest.len() != source.len() {
            return Err(Error::size_mismatch(source.len(), source_to_dest.len(), "add_multiple_scatter"));
        }
        self.ensure_mutable()?;
        source_to_dest.assert_within(self.len(), "add_multiple_scatter");
        for (i, j) in source_to_dest.iter().enumerate() {
            self.set_unchecked(j, self.get_unchecked(j) + source.get_unchecked(i) * factor);
        }
        Ok(())
    }

    /// Gather: `self[i] += source[dest_to_source[i]] * factor`
    ///
    /// The index length must equal this vector's length. An index value
    /// outside the source panics before any element is written.
    fn add_multiple_gather(&self, dest_to_source: &Index, source: &dyn Vector, factor: f64) -> Result<()> {
        self.check_length(dest_to_source.len(), "add_multiple_gather")?;
        self.ensure_mutable()?;
        dest_to_source.assert_within(source.len(), "add_multiple_gather");
        for (i, j) in dest_to_source.iter().enumerate() {
            self.set_unchecked(i, self.get_unchecked(i) + source.get_unchecked(j) * factor);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------

    /// Exact elementwise equality; vectors of different length are unequal
    fn equals(&self, other: &dyn Vector) -> bool {
        self.len() == other.len() && (0..self.len()).all(|i| self.get_unchecked(i) == other.get_unchecked(i))
    }

    /// Exact equality against a raw buffer
    fn equals_slice(&self, values: &[f64]) -> bool {
        self.len() == values.len() && values.iter().enumerate().all(|(i, &v)| self.get_unchecked(i) == v)
    }

    /// Approximate equality using the configured default tolerance
    fn epsilon_equals(&self, other: &dyn Vector) -> Result<bool> {
        self.epsilon_equals_with(other, config::epsilon())
    }

    /// `|self[i] - other[i]| <= tolerance` for every element
    fn epsilon_equals_with(&self, other: &dyn Vector, tolerance: f64) -> Result<bool> {
        self.check_length(other.len(), "epsilon_equals")?;
        Ok((0..self.len()).all(|i| (self.get_unchecked(i) - other.get_unchecked(i)).abs() <= tolerance))
    }

    /// Lexicographic ordering of two vectors of equal length
    fn compare(&self, other: &dyn Vector) -> Result<Ordering> {
        self.check_length(other.len(), "compare")?;
        for i in 0..self.len() {
            let diff = self.get_unchecked(i) - other.get_unchecked(i);
            if diff < 0.0 {
                return Ok(Ordering::Less);
            }
            if diff > 0.0 {
                return Ok(Ordering::Greater);
            }
        }
        Ok(Ordering::Equal)
    }

    // ------------------------------------------------------------------
    // Copies
    // ------------------------------------------------------------------

    /// An owning, fully mutable deep copy
    fn to_dense(&self) -> DenseVector {
        DenseVector::from_vec(self.to_vec())
    }

    /// An owning, fully mutable deep copy of unspecified concrete type
    fn clone_vector(&self) -> VectorRef {
        Rc::new(self.to_dense())
    }
}

impl fmt::Display for dyn Vector + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.len() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{:?}", self.get_unchecked(i))?;
        }
        write!(f, "]")
    }
}
