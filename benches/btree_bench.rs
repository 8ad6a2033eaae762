//! Micro benchmarks for the in-memory B-tree.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use degree_btree::BTree;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const KEY_COUNT: u64 = 16_384;
const DEGREES: [usize; 4] = [2, 4, 16, 64];

fn shuffled_keys() -> Vec<u64> {
    let mut keys: Vec<u64> = (0..KEY_COUNT).collect();
    keys.shuffle(&mut ChaCha8Rng::seed_from_u64(0xB7EE_D00D));
    keys
}

fn filled_tree(min_degree: usize, keys: &[u64]) -> BTree<u64> {
    let mut tree = BTree::new(min_degree).unwrap();
    for key in keys {
        tree.insert(*key).unwrap();
    }
    tree
}

fn micro_btree(c: &mut Criterion) {
    let keys = shuffled_keys();
    let mut group = c.benchmark_group("micro/btree");
    group.throughput(Throughput::Elements(KEY_COUNT));

    for t in DEGREES {
        group.bench_with_input(BenchmarkId::new("sequential_insert", t), &t, |b, &t| {
            b.iter_batched(
                || BTree::<u64>::new(t).unwrap(),
                |mut tree| {
                    for key in 0..KEY_COUNT {
                        tree.insert(key).unwrap();
                    }
                    black_box(tree.height());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("random_insert", t), &t, |b, &t| {
            b.iter_batched(
                || BTree::<u64>::new(t).unwrap(),
                |mut tree| {
                    for key in &keys {
                        tree.insert(*key).unwrap();
                    }
                    black_box(tree.height());
                },
                BatchSize::SmallInput,
            );
        });

        let tree = filled_tree(t, &keys);
        group.bench_with_input(BenchmarkId::new("contains", t), &t, |b, _| {
            b.iter(|| {
                for key in &keys {
                    black_box(tree.contains(key));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("random_delete", t), &t, |b, &t| {
            b.iter_batched(
                || filled_tree(t, &keys),
                |mut tree| {
                    for key in keys.iter().rev() {
                        tree.delete(key).unwrap();
                    }
                    black_box(tree.is_empty());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, micro_btree);
criterion_main!(benches);
