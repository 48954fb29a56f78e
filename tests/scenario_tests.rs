//! Worked examples of the public API

mod common;

use common::*;
use vectorkit::prelude::*;

#[test]
fn test_dot_product() {
    let a = vector_of(&[1.0, 2.0, 3.0]);
    let b = vector_of(&[4.0, 5.0, 6.0]);
    assert_eq!(a.dot_product(&*b).unwrap(), 32.0);
}

#[test]
fn test_sub_vector_write_through() {
    let owner = vector_of(&[1.0, 2.0, 3.0, 4.0]);
    let w = owner.sub_vector(1, 2).unwrap();
    assert_eq!(w.to_vec(), vec![2.0, 3.0]);

    w.set(0, 9.0).unwrap();
    assert_eq!(owner.to_vec(), vec![1.0, 9.0, 3.0, 4.0]);
}

#[test]
fn test_cross_product() {
    let v = vector_of(&[1.0, 0.0, 0.0]);
    v.cross_product(&*vector_of(&[0.0, 1.0, 0.0])).unwrap();
    assert_eq!(v.to_vec(), vec![0.0, 0.0, 1.0]);
}

#[test]
fn test_normalise() {
    let v = vector_of(&[3.0, 4.0]);
    assert_eq!(v.normalise().unwrap(), 5.0);
    assert_relative_eq!(v.get(0).unwrap(), 0.6, epsilon = EPSILON);
    assert_relative_eq!(v.get(1).unwrap(), 0.8, epsilon = EPSILON);

    let zero = vector_of(&[0.0, 0.0]);
    assert_eq!(zero.normalise().unwrap(), 0.0);
    assert!(zero.is_zero());
}

#[test]
fn test_sqrt_operator() {
    let op = ops::sqrt();
    assert_eq!(op.apply(4.0), 2.0);
    assert_eq!(op.derivative(4.0).unwrap(), 0.25);
    assert_eq!(op.apply_inverse(2.0).unwrap(), 4.0);
    assert_eq!(op.derivative_op().unwrap().apply(4.0), 0.25);
}

#[test]
fn test_join() {
    let j = vector_of(&[1.0, 2.0]).join(&vector_of(&[3.0, 4.0]));
    assert_eq!(j.len(), 4);
    assert_eq!(j.get(2).unwrap(), 3.0);
}

#[test]
fn test_errors_do_not_mutate() {
    let v = vector_of(&[1.0, 2.0, 3.0]);
    let short = vector_of(&[1.0]);

    let err = v.add(&*short).unwrap_err();
    assert_eq!(err.to_string(), "Dimension mismatch in add: expected 3, got 1");
    assert!(matches!(v.get(3), Err(Error::IndexOutOfBounds { index: 3, length: 3 })));
    assert!(matches!(v.sub_vector(2, 5), Err(Error::InvalidRange { .. })));
    assert!(matches!(v.broadcast(&[2, 2]), Err(Error::ShapeMismatch { .. })));
    assert!(matches!(v.get_at(&[0, 0]), Err(Error::Unsupported(_))));
    assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0]);

    let frozen = v.immutable();
    assert!(matches!(frozen.fill(0.0), Err(Error::Immutable(_))));
}

#[test]
fn test_operator_errors_convert() {
    fn invert_all(v: &VectorRef, op: &OpRef) -> vectorkit::Result<()> {
        let inverse = op.inverse()?;
        v.apply_op(&*inverse)
    }

    let v = vector_of(&[1.0, 4.0]);
    assert!(matches!(invert_all(&v, &ops::square()), Err(Error::Operator(OpError::Unsupported(_)))));

    invert_all(&v, &ops::sqrt()).unwrap();
    assert_eq!(v.to_vec(), vec![1.0, 16.0]);
}
