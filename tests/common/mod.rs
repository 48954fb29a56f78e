//! Shared utilities for integration tests

#![allow(dead_code)]

use proptest::prelude::*;
use vectorkit::prelude::*;

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-9;

/// Finite values small enough that sums of products stay well conditioned
pub fn element() -> impl Strategy<Value = f64> {
    -1e3..1e3f64
}

pub fn values(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(element(), 0..=max_len)
}

/// Two buffers of the same length
pub fn value_pair(max_len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (0..=max_len).prop_flat_map(|n| {
        (
            prop::collection::vec(element(), n),
            prop::collection::vec(element(), n),
        )
    })
}

/// Present a buffer as a non-contiguous vector
pub fn as_joined(values: &[f64]) -> VectorRef {
    let split = values.len() / 2;
    vector_of(&values[..split]).join(&vector_of(&values[split..]))
}
