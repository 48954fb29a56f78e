//! Immutable integer index sequences used for gather and scatter

use crate::error::{Error, Result};
use std::ops::Deref;
use std::sync::Arc;

/// An immutable ordered sequence of element positions
///
/// Cloning is cheap; clones share the same positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Index {
    data: Arc<[usize]>,
}

impl Index {
    pub fn new(positions: Vec<usize>) -> Self {
        Self {
            data: positions.into(),
        }
    }

    /// `0, 1, ..., n - 1`
    pub fn identity(n: usize) -> Self {
        (0..n).collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Position `i`; panics when `i >= len()`
    #[inline]
    pub fn get(&self, i: usize) -> usize {
        self.data[i]
    }

    pub fn get_checked(&self, i: usize) -> Result<usize> {
        self.data
            .get(i)
            .copied()
            .ok_or_else(|| Error::out_of_bounds(i, self.len()))
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.data.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.data
    }

    /// Largest position, if any
    pub fn max_position(&self) -> Option<usize> {
        self.iter().max()
    }

    /// Panic unless every position addresses an element of a vector of `length`
    ///
    /// Indirected operations call this once before touching any element, so
    /// an invalid position fails the whole operation instead of part of it.
    pub fn assert_within(&self, length: usize, operation: &str) {
        if let Some(max) = self.max_position() {
            assert!(
                max < length,
                "{operation}: position {max} out of bounds for vector of length {length}"
            );
        }
    }

    /// Whether every position in `0..len()` appears exactly once
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.len()];
        for j in self.iter() {
            match seen.get_mut(j) {
                Some(s) if !*s => *s = true,
                _ => return false,
            }
        }
        true
    }
}

impl Deref for Index {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.data
    }
}

impl From<Vec<usize>> for Index {
    fn from(positions: Vec<usize>) -> Self {
        Self::new(positions)
    }
}

impl From<&[usize]> for Index {
    fn from(positions: &[usize]) -> Self {
        Self {
            data: positions.into(),
        }
    }
}

impl FromIterator<usize> for Index {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
