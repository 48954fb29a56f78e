//! N-dimensional collaborators
//!
//! Vectors are one-dimensional [`NdArray`]s. Two adapters lift a vector into
//! more dimensions without copying:
//!
//! - [`BroadcastArray`] repeats the vector along leading dimensions (read-only)
//! - [`ReshapedArray`] reinterprets the vector's elements in row-major order
//!
//! A zero-dimensional array (shape `[]`) holds a single scalar.

use crate::error::{Error, Result};
use crate::traits::{Vector, VectorRef};
use std::fmt;
use std::rc::Rc;

/// Shape-aware element access
pub trait NdArray: fmt::Debug {
    /// Extent of each dimension, outermost first
    fn shape(&self) -> Vec<usize>;

    fn dimensionality(&self) -> usize {
        self.shape().len()
    }

    /// Total number of elements, saturating at `usize::MAX`
    fn element_count(&self) -> usize {
        let shape = self.shape();
        checked_element_count(&shape).unwrap_or(usize::MAX)
    }

    /// Checked read at a full coordinate
    fn get_at(&self, coords: &[usize]) -> Result<f64>;

    /// Checked write at a full coordinate
    fn set_at(&self, coords: &[usize], value: f64) -> Result<()>;

    /// All elements in row-major order
    fn to_flat_vec(&self) -> Vec<f64>;
}

/// Product of the extents, or `None` when it does not fit in `usize`
///
/// Any zero extent makes the count zero regardless of the others.
pub fn checked_element_count(shape: &[usize]) -> Option<usize> {
    if shape.contains(&0) {
        return Some(0);
    }
    shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

/// Row-major linear position of `coords` within `shape`
pub fn linear_index(shape: &[usize], coords: &[usize]) -> Result<usize> {
    if coords.len() != shape.len() {
        return Err(Error::Unsupported(format!(
            "{} coordinates for a {}-dimensional array",
            coords.len(),
            shape.len()
        )));
    }
    if let Some((&c, &d)) = coords.iter().zip(shape).find(|&(&c, &d)| c >= d) {
        return Err(Error::out_of_bounds(c, d));
    }
    coords
        .iter()
        .zip(shape)
        .try_fold(0usize, |linear, (&c, &d)| linear.checked_mul(d)?.checked_add(c))
        .ok_or_else(|| Error::shape_mismatch(shape, usize::MAX))
}

impl<V: Vector + ?Sized> NdArray for V {
    fn shape(&self) -> Vec<usize> {
        vec![self.len()]
    }

    fn dimensionality(&self) -> usize {
        1
    }

    fn element_count(&self) -> usize {
        self.len()
    }

    fn get_at(&self, coords: &[usize]) -> Result<f64> {
        match coords {
            [i] => self.get(*i),
            _ => Err(Error::Unsupported(format!(
                "{} coordinates on a 1-dimensional vector",
                coords.len()
            ))),
        }
    }

    fn set_at(&self, coords: &[usize], value: f64) -> Result<()> {
        match coords {
            [i] => self.set(*i, value),
            _ => Err(Error::Unsupported(format!(
                "{} coordinates on a 1-dimensional vector",
                coords.len()
            ))),
        }
    }

    fn to_flat_vec(&self) -> Vec<f64> {
        self.to_vec()
    }
}

/// A vector repeated along leading dimensions
///
/// The trailing dimension equals the vector's length. Every leading
/// coordinate reads the same underlying elements, so writes are rejected.
#[derive(Debug, Clone)]
pub struct BroadcastArray {
    source: VectorRef,
    shape: Vec<usize>,
}

impl BroadcastArray {
    /// Fails unless the trailing extent equals `source.len()` and the total
    /// element count fits in `usize`
    pub fn new(source: VectorRef, shape: &[usize]) -> Result<Self> {
        match shape.last() {
            Some(&trailing) if trailing == source.len() && checked_element_count(shape).is_some() => {
                Ok(Self {
                    source,
                    shape: shape.to_vec(),
                })
            }
            _ => Err(Error::shape_mismatch(shape, source.len())),
        }
    }

    /// The repeated vector
    pub fn source(&self) -> &VectorRef {
        &self.source
    }
}

impl NdArray for BroadcastArray {
    fn shape(&self) -> Vec<usize> {
        self.shape.clone()
    }

    fn get_at(&self, coords: &[usize]) -> Result<f64> {
        linear_index(&self.shape, coords)?;
        Ok(self.source.get_unchecked(coords[coords.len() - 1]))
    }

    fn set_at(&self, _coords: &[usize], _value: f64) -> Result<()> {
        Err(Error::immutable("BroadcastArray"))
    }

    fn to_flat_vec(&self) -> Vec<f64> {
        let row = self.source.to_vec();
        if row.is_empty() {
            return row;
        }
        let leading = &self.shape[..self.shape.len() - 1];
        row.repeat(checked_element_count(leading).unwrap_or(0))
    }
}

/// A vector's elements viewed with an N-dimensional row-major shape
///
/// Reads and writes go straight to the source vector.
#[derive(Debug, Clone)]
pub struct ReshapedArray {
    source: VectorRef,
    shape: Vec<usize>,
}

impl ReshapedArray {
    pub fn new(source: VectorRef, shape: &[usize]) -> Result<Self> {
        if checked_element_count(shape) != Some(source.len()) {
            return Err(Error::shape_mismatch(shape, source.len()));
        }
        Ok(Self {
            source,
            shape: shape.to_vec(),
        })
    }

    /// The underlying elements as a vector, sharing storage
    pub fn as_vector(&self) -> VectorRef {
        Rc::clone(&self.source)
    }
}

impl NdArray for ReshapedArray {
    fn shape(&self) -> Vec<usize> {
        self.shape.clone()
    }

    fn get_at(&self, coords: &[usize]) -> Result<f64> {
        let i = linear_index(&self.shape, coords)?;
        self.source.get(i)
    }

    fn set_at(&self, coords: &[usize], value: f64) -> Result<()> {
        let i = linear_index(&self.shape, coords)?;
        self.source.set(i, value)
    }

    fn to_flat_vec(&self) -> Vec<f64> {
        self.source.to_vec()
    }
}
