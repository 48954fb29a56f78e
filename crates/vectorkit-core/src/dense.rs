//! Owning contiguous storage
//!
//! [`DenseVector`] is the canonical mutable vector. Elements live in a
//! boxed slice of `Cell<f64>`, so every view sharing the vector through a
//! [`VectorRef`] can read and write it without exclusive borrows.

use crate::error::Result;
use crate::traits::{Vector, VectorFlags, VectorRef};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// An owning, fully mutable, contiguous vector
#[derive(Clone, Default)]
pub struct DenseVector {
    data: Box<[Cell<f64>]>,
}

impl DenseVector {
    /// A zero-filled vector of the given length
    pub fn zeros(length: usize) -> Self {
        Self::filled(length, 0.0)
    }

    /// A vector with every element set to `value`
    pub fn filled(length: usize, value: f64) -> Self {
        Self {
            data: (0..length).map(|_| Cell::new(value)).collect(),
        }
    }

    pub fn from_slice(values: &[f64]) -> Self {
        values.iter().copied().collect()
    }

    pub fn from_vec(values: Vec<f64>) -> Self {
        values.into_iter().collect()
    }

    /// Deep copy of any vector
    pub fn copy_of(source: &dyn Vector) -> Self {
        match source.contiguous() {
            Some(cells) => Self {
                data: cells.to_vec().into_boxed_slice(),
            },
            None => Self::from_vec(source.to_vec()),
        }
    }

    /// Backing storage
    pub fn as_cells(&self) -> &[Cell<f64>] {
        &self.data
    }
}

impl FromIterator<f64> for DenseVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().map(Cell::new).collect(),
        }
    }
}

impl From<Vec<f64>> for DenseVector {
    fn from(values: Vec<f64>) -> Self {
        Self::from_vec(values)
    }
}

impl From<&[f64]> for DenseVector {
    fn from(values: &[f64]) -> Self {
        Self::from_slice(values)
    }
}

impl fmt::Debug for DenseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseVector")
            .field("data", &self.to_vec())
            .finish()
    }
}

impl Vector for DenseVector {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn get_unchecked(&self, i: usize) -> f64 {
        self.data[i].get()
    }

    #[inline]
    fn set_unchecked(&self, i: usize, value: f64) {
        self.data[i].set(value)
    }

    fn flags(&self) -> VectorFlags {
        VectorFlags::OWNED
    }

    fn exact_clone(&self) -> VectorRef {
        Rc::new(self.clone())
    }

    fn contiguous(&self) -> Option<&[Cell<f64>]> {
        Some(&self.data)
    }

    // Fast paths over the backing slice

    fn fill(&self, value: f64) -> Result<()> {
        self.data.iter().for_each(|c| c.set(value));
        Ok(())
    }

    fn set_from(&self, src: &dyn Vector) -> Result<()> {
        self.check_length(src.len(), "set_from")?;
        match src.contiguous() {
            Some(cells) => {
                for (dst, s) in self.data.iter().zip(cells) {
                    dst.set(s.get());
                }
            }
            None => {
                for (i, dst) in self.data.iter().enumerate() {
                    dst.set(src.get_unchecked(i));
                }
            }
        }
        Ok(())
    }

    fn add_multiple(&self, other: &dyn Vector, factor: f64) -> Result<()> {
        self.check_length(other.len(), "add_multiple")?;
        match other.contiguous() {
            Some(cells) => {
                for (dst, s) in self.data.iter().zip(cells) {
                    dst.set(dst.get() + s.get() * factor);
                }
            }
            None => {
                for (i, dst) in self.data.iter().enumerate() {
                    dst.set(dst.get() + other.get_unchecked(i) * factor);
                }
            }
        }
        Ok(())
    }

    fn element_sum(&self) -> f64 {
        self.data.iter().map(Cell::get).sum()
    }

    fn magnitude_squared(&self) -> f64 {
        self.data.iter().map(|c| c.get() * c.get()).sum()
    }

    fn dot_product(&self, other: &dyn Vector) -> Result<f64> {
        self.check_length(other.len(), "dot_product")?;
        Ok(match other.contiguous() {
            Some(cells) => self
                .data
                .iter()
                .zip(cells)
                .map(|(a, b)| a.get() * b.get())
                .sum(),
            None => self
                .data
                .iter()
                .enumerate()
                .map(|(i, a)| a.get() * other.get_unchecked(i))
                .sum(),
        })
    }

    fn to_vec(&self) -> Vec<f64> {
        self.data.iter().map(Cell::get).collect()
    }
}
