//! Benchmarks comparing contiguous fast paths against generic element access

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::rc::Rc;
use vectorkit_core::{ComputedVector, DenseVector, Index, Vector, VectorExt, VectorRef};

/// Generate test data with specific patterns
fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size).map(|i| (i as f64 * 0.1).sin() * 100.0).collect()
}

/// Generate scattered positions for gather and scatter
fn generate_indices(n: usize, data_size: usize) -> Index {
    (0..n).map(|i| (i * 7 + 3) % data_size).collect()
}

/// The same data behind each storage layout
fn layouts(size: usize) -> Vec<(&'static str, VectorRef)> {
    let data = generate_test_data(size);
    let dense: VectorRef = Rc::new(DenseVector::from_slice(&data));
    let mut padded = vec![0.0];
    padded.extend_from_slice(&data);
    let window = Rc::new(DenseVector::from(padded)) as VectorRef;
    let half = size / 2;
    let rotated: VectorRef = Rc::new(DenseVector::from_slice(&data));
    vec![
        ("dense", Rc::clone(&dense)),
        ("window", window.sub_vector(1, size).unwrap_or(dense)),
        ("rotated", rotated.rotate_view(half as isize)),
        ("computed", ComputedVector::from_fn(size, move |i| data[i]).into_ref()),
    ]
}

fn bench_dot_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_product");

    for &size in &[100, 10_000, 100_000] {
        let target = DenseVector::from_slice(&generate_test_data(size));
        for (name, v) in layouts(size) {
            group.bench_with_input(BenchmarkId::new(name, size), &v, |b, v| {
                b.iter(|| black_box(target.dot_product(&**v)))
            });
        }
    }

    group.finish();
}

fn bench_add_multiple(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_multiple");

    for &size in &[100, 10_000, 100_000] {
        let target = DenseVector::zeros(size);
        for (name, v) in layouts(size) {
            group.bench_with_input(BenchmarkId::new(name, size), &v, |b, v| {
                b.iter(|| black_box(target.add_multiple(&**v, 0.5)))
            });
        }
    }

    group.finish();
}

fn bench_element_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("element_sum");

    for &size in &[100, 10_000, 100_000] {
        for (name, v) in layouts(size) {
            group.bench_with_input(BenchmarkId::new(name, size), &v, |b, v| {
                b.iter(|| black_box(v.element_sum()))
            });
        }
    }

    group.finish();
}

fn bench_scatter_gather(c: &mut Criterion) {
    let mut group = c.benchmark_group("scatter_gather");

    let data_size = 100_000;
    let target = DenseVector::zeros(data_size);
    for &n in &[10, 100, 1000] {
        let indices = generate_indices(n, data_size);
        let source = DenseVector::from_slice(&generate_test_data(n));

        group.bench_with_input(BenchmarkId::new("scatter", n), &indices, |b, ix| {
            b.iter(|| black_box(target.add_multiple_scatter(&source, ix, 1.0)))
        });

        group.bench_with_input(BenchmarkId::new("gather", n), &indices, |b, ix| {
            b.iter(|| black_box(source.add_multiple_gather(ix, &target, 1.0)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dot_product,
    bench_add_multiple,
    bench_element_sum,
    bench_scatter_gather
);
criterion_main!(benches);
