//! Read-only snapshots

use crate::traits::{Vector, VectorFlags, VectorRef};
use std::rc::Rc;
use std::sync::Arc;

/// A read-only vector over a defensive snapshot of its source
///
/// Later writes to the source are not observed. Clones share the snapshot,
/// and the type is `Send + Sync`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImmutableVector {
    data: Arc<[f64]>,
}

impl ImmutableVector {
    /// Snapshot the current contents of any vector
    pub fn snapshot(source: &dyn Vector) -> Self {
        Self {
            data: source.to_vec().into(),
        }
    }

    pub fn from_slice(values: &[f64]) -> Self {
        Self { data: values.into() }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl From<Vec<f64>> for ImmutableVector {
    fn from(values: Vec<f64>) -> Self {
        Self { data: values.into() }
    }
}

impl Vector for ImmutableVector {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn get_unchecked(&self, i: usize) -> f64 {
        self.data[i]
    }

    fn set_unchecked(&self, _i: usize, _value: f64) {
        panic!("ImmutableVector cannot be modified")
    }

    fn flags(&self) -> VectorFlags {
        VectorFlags::empty()
    }

    fn exact_clone(&self) -> VectorRef {
        Rc::new(self.clone())
    }

    fn element_sum(&self) -> f64 {
        self.data.iter().sum()
    }

    fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }
}
