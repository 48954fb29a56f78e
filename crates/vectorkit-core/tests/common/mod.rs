//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use std::rc::Rc;
use vectorkit_core::{ComputedVector, DenseVector, ImmutableVector, Vector, VectorExt, VectorRef};

pub const EPSILON: f64 = 1e-10;

/// Vector lengths that exercise empty, singleton and split edge cases
pub fn edge_case_lengths() -> Vec<usize> {
    vec![0, 1, 2, 3, 4, 7, 8, 16, 31, 100]
}

/// Generate test data with specific patterns
pub fn generate_test_data(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 + 0.1).collect()
}

/// Generate complementary test data for binary operations
pub fn generate_test_data_complement(len: usize) -> Vec<f64> {
    (0..len).map(|i| (len - i) as f64 + 0.2).collect()
}

pub fn dense(values: &[f64]) -> VectorRef {
    Rc::new(DenseVector::from_slice(values))
}

/// The same values presented through every vector variant
pub fn all_variants(values: &[f64]) -> Vec<(&'static str, VectorRef)> {
    let n = values.len();
    let mut padded = vec![-1.0];
    padded.extend_from_slice(values);
    padded.push(-1.0);
    let owned = values.to_vec();

    let window = dense(&padded)
        .sub_vector(1, n)
        .expect("window fits inside padded buffer");
    let split = n / 2;
    let joined = dense(&values[..split]).join(&dense(&values[split..]));

    vec![
        ("dense", dense(values)),
        ("window", window),
        ("joined", joined),
        ("computed", ComputedVector::from_fn(n, move |i| owned[i]).into_ref()),
        ("immutable", ImmutableVector::from_slice(values).into_ref()),
    ]
}

/// Assert two vectors hold the same values within tolerance
pub fn assert_vectors_equal(actual: &dyn Vector, expected: &[f64], context: &str) {
    assert_eq!(actual.len(), expected.len(), "length mismatch for {}", context);
    for (i, &e) in expected.iter().enumerate() {
        let a = actual.get_unchecked(i);
        assert!(
            (a - e).abs() <= EPSILON * e.abs().max(1.0),
            "{}: element {} is {}, expected {}",
            context,
            i,
            a,
            e
        );
    }
}
