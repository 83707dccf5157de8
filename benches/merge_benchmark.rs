//! Merge and Throughput Benchmarks
//!
//! Compares an explicit merge against pushing one queue's elements into the
//! other, and measures plain push/pop throughput for every queue kind.
//!
//! ## Running
//!
//! ```bash
//! # Run everything
//! cargo bench --bench merge_benchmark
//!
//! # Only the merge comparisons
//! cargo bench --bench merge_benchmark -- 'merge/'
//!
//! # Only one queue kind
//! cargo bench --bench merge_benchmark -- 'BinomialPQueue'
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_mergeable_heaps::binary::BinaryMinHeap;
use rust_mergeable_heaps::binomial::BinomialHeap;
use rust_mergeable_heaps::{MergeableHeap, PriorityQueue, QueueKind};
use std::hint::black_box;

const MERGE_SIZES: [usize; 3] = [1 << 8, 1 << 12, 1 << 16];
const THROUGHPUT_SIZE: usize = 1 << 12;

fn random_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen()).collect()
}

fn build<H: MergeableHeap<u64>>(values: &[u64]) -> H {
    let mut heap = H::new();
    for value in values {
        heap.push(*value);
    }
    heap
}

/// Merge against repeated insertion of the smaller operand
fn bench_merge_vs_insert<H: MergeableHeap<u64>>(c: &mut Criterion, label: &str) {
    let mut group = c.benchmark_group(format!("merge/{}", label));

    for &size in &MERGE_SIZES {
        let left = random_values(size, 1);
        let right = random_values(size, 2);
        let size_label = format!("2^{}", size.trailing_zeros());

        group.bench_with_input(BenchmarkId::new("merge", &size_label), &size, |b, _| {
            b.iter_batched(
                || (build::<H>(&left), build::<H>(&right)),
                |(one, two)| black_box(one.merge(two)),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("insert", &size_label), &size, |b, _| {
            b.iter_batched(
                || build::<H>(&left),
                |mut heap| {
                    for value in &right {
                        heap.push(*value);
                    }
                    black_box(heap)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_binary_merge(c: &mut Criterion) {
    bench_merge_vs_insert::<BinaryMinHeap<u64>>(c, "binary");
}

fn bench_binomial_merge(c: &mut Criterion) {
    bench_merge_vs_insert::<BinomialHeap<u64>>(c, "binomial");
}

/// Fill then drain through the facade for each kind
fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    group.sample_size(20);
    let values = random_values(THROUGHPUT_SIZE, 3);

    for kind in QueueKind::ALL {
        group.bench_with_input(BenchmarkId::new(kind.name(), THROUGHPUT_SIZE), &kind, |b, &kind| {
            b.iter(|| {
                let mut queue = PriorityQueue::new(kind);
                for value in &values {
                    queue.enqueue(*value);
                }
                while let Ok(value) = queue.extract_min() {
                    black_box(value);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_binary_merge, bench_binomial_merge, bench_push_pop);
criterion_main!(benches);
