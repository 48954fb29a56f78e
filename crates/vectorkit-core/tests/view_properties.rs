//! Property-based tests for view aliasing
//!
//! Windows, nested windows and rotations must read and write exactly the
//! owner elements they map to, whatever the range.

use proptest::prelude::*;
use std::rc::Rc;
use vectorkit_core::prelude::*;
use vectorkit_core::WindowView;

fn element() -> impl Strategy<Value = f64> {
    -1e3..1e3f64
}

/// A buffer together with a valid `(offset, length)` window into it
fn values_with_window(max_len: usize) -> impl Strategy<Value = (Vec<f64>, usize, usize)> {
    (1..=max_len).prop_flat_map(|n| {
        (prop::collection::vec(element(), n), 0..n).prop_flat_map(move |(data, offset)| {
            (Just(data), Just(offset), 1..=n - offset)
        })
    })
}

proptest! {
    #[test]
    fn prop_window_aliases_owner((data, offset, length) in values_with_window(48), x in element(), y in element()) {
        let owner = vector_of(&data);
        let w = owner.sub_vector(offset, length).unwrap();

        let i = length / 2;
        w.set(i, x).unwrap();
        prop_assert_eq!(owner.get(offset + i).unwrap(), x);

        owner.set(offset + i, y).unwrap();
        prop_assert_eq!(w.get(i).unwrap(), y);

        for j in 0..length {
            prop_assert_eq!(w.get(j).unwrap(), owner.get(offset + j).unwrap());
        }
    }

    #[test]
    fn prop_nested_window_maps_to_owner(
        (data, offset, length) in values_with_window(48),
        inner_offset in 0usize..48,
        inner_length in 0usize..48,
        x in element(),
    ) {
        let owner = vector_of(&data);
        let outer = WindowView::new(Rc::clone(&owner), offset, length).unwrap();
        let inner_offset = inner_offset % length;
        let inner_length = 1 + inner_length % (length - inner_offset);
        let inner = outer.window(inner_offset, inner_length).unwrap();

        prop_assert_eq!(inner.len(), inner_length);
        let start = offset + inner_offset;
        prop_assert!(inner.equals_slice(&data[start..start + inner_length]));

        inner.set(inner_length - 1, x).unwrap();
        prop_assert_eq!(owner.get(start + inner_length - 1).unwrap(), x);
        prop_assert_eq!(outer.get(inner_offset + inner_length - 1).unwrap(), x);
    }

    #[test]
    fn prop_writes_through_rotation_land_in_owner(data in prop::collection::vec(element(), 1..32), shift in -64isize..64, x in element()) {
        let owner = vector_of(&data);
        let n = data.len();
        let r = owner.rotate_view(shift);
        let i = n / 2;
        r.set(i, x).unwrap();

        let target = (i as isize + shift).rem_euclid(n as isize) as usize;
        prop_assert_eq!(owner.get(target).unwrap(), x);
        prop_assert_eq!(owner.zero_count(), r.zero_count());
    }

    #[test]
    fn prop_window_exact_clone_is_detached((data, offset, length) in values_with_window(48), x in element()) {
        let owner = vector_of(&data);
        let w = owner.sub_vector(offset, length).unwrap();
        let c = w.exact_clone();
        prop_assert!(c.equals(&*w));

        c.fill(x).unwrap();
        prop_assert!(owner.equals_slice(&data));
    }
}
