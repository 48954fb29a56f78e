//! Core vector trait, zero-copy views and computed vectors
//!
//! This crate provides the numeric vector kernel: a single [`Vector`]
//! capability trait with a full set of default algorithms, plus the
//! variants that implement it.
//!
//! # Architecture Overview
//!
//! - **Storage**: [`DenseVector`] owns contiguous cells
//! - **Views**: [`WindowView`] and [`JoinedView`] alias other vectors; writes
//!   through a view are visible through its owner and vice versa
//! - **Read-only variants**: [`ComputedVector`] evaluates a rule on demand,
//!   [`ImmutableVector`] holds a snapshot
//! - **N-d collaborators**: [`NdArray`], [`BroadcastArray`], [`ReshapedArray`]
//!
//! Vectors are shared through [`VectorRef`] (`Rc<dyn Vector>`); operations
//! that produce new handles (`sub_vector`, `join`, `rotate_view`, ...) live
//! on [`VectorExt`].
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use vectorkit_core::{DenseVector, Vector, VectorExt, VectorRef};
//!
//! let v: VectorRef = Rc::new(DenseVector::from_slice(&[1.0, 2.0, 3.0, 4.0]));
//! let middle = v.sub_vector(1, 2)?;
//! middle.fill(0.0)?;
//!
//! assert_eq!(v.to_vec(), vec![1.0, 0.0, 0.0, 4.0]);
//! assert_eq!(v.rotate_view(1).to_string(), "[0.0,0.0,4.0,1.0]");
//! # Ok::<(), vectorkit_core::Error>(())
//! ```

pub mod array;
pub mod computed;
pub mod config;
pub mod dense;
pub mod error;
pub mod ext;
pub mod immutable;
pub mod index;
pub mod traits;
pub mod views;

// Re-export core types
pub use array::{checked_element_count, BroadcastArray, NdArray, ReshapedArray};
pub use computed::ComputedVector;
pub use config::Config;
pub use dense::DenseVector;
pub use error::{Error, Result};
pub use ext::VectorExt;
pub use immutable::ImmutableVector;
pub use index::Index;
pub use traits::{Vector, VectorFlags, VectorRef};
pub use views::{EmptyVector, JoinedView, WindowView};

use std::rc::Rc;

/// Wrap a raw buffer as a shared dense vector
pub fn vector_of(values: &[f64]) -> VectorRef {
    Rc::new(DenseVector::from_slice(values))
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        vector_of, ComputedVector, DenseVector, Error, ImmutableVector, Index, NdArray, Result,
        Vector, VectorExt, VectorFlags, VectorRef,
    };
}
