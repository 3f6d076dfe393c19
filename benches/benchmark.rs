use criterion::{black_box, criterion_group, criterion_main, Criterion};

#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

fn criterion_benchmark(criterion: &mut Criterion) {
    let inputs: Vec<i32> = std::iter::repeat_with(rand::random).take(100).collect();

    let mut bench = criterion.benchmark_group("insert-small");
    bench.bench_function("std", |bench| {
        bench.iter(|| {
            let mut set = std::collections::BTreeSet::new();
            for &n in &inputs {
                let n = black_box(n);
                black_box(set.insert(n));
            }
        })
    });
    bench.bench_function("custom", |bench| {
        bench.iter(|| {
            let mut set = avl::AvlTree::new();
            for &n in &inputs {
                let n = black_box(n);
                let _ = black_box(set.insert(n));
            }
        })
    });
    drop(bench);

    let mut bench = criterion.benchmark_group("insert-delete-small");
    bench.bench_function("std", |bench| {
        bench.iter(|| {
            let mut set = std::collections::BTreeSet::new();
            for &n in &inputs {
                let n = black_box(n);
                black_box(set.insert(n));
            }
            for &n in &inputs {
                black_box(set.remove(&n));
            }
            assert!(set.is_empty());
        })
    });
    bench.bench_function("custom", |bench| {
        bench.iter(|| {
            let mut set = avl::AvlTree::new();
            for &n in &inputs {
                let n = black_box(n);
                let _ = black_box(set.insert(n));
            }
            for &n in &inputs {
                let _ = black_box(set.delete(&n));
            }
            assert!(set.is_empty());
        })
    });
    drop(bench);

    let mut stdset = std::collections::BTreeSet::new();
    let mut customset = avl::AvlTree::new();

    for &n in &inputs {
        stdset.insert(n);
        let _ = customset.insert(n);
    }

    let mut bench = criterion.benchmark_group("search-small");
    bench.bench_function("std", |bench| {
        bench.iter(|| {
            for &n in &inputs {
                let n = black_box(n);
                black_box(stdset.get(&n));
                black_box(stdset.get(&n.wrapping_add(1)));
            }
        })
    });
    bench.bench_function("custom", |bench| {
        bench.iter(|| {
            for &n in &inputs {
                let n = black_box(n);
                black_box(customset.search(&n));
                black_box(customset.search(&n.wrapping_add(1)));
            }
        })
    });
    drop(bench);

    let inputs: Vec<i32> = std::iter::repeat_with(rand::random)
        .take(1024 * 100)
        .collect();

    let mut bench = criterion.benchmark_group("insert");
    bench.bench_function("std", |bench| {
        bench.iter(|| {
            let mut set = std::collections::BTreeSet::new();
            for &n in &inputs {
                let n = black_box(n);
                black_box(set.insert(n));
            }
        })
    });
    bench.bench_function("custom", |bench| {
        bench.iter(|| {
            let mut set = avl::AvlTree::new();
            for &n in &inputs {
                let n = black_box(n);
                let _ = black_box(set.insert(n));
            }
        })
    });
    drop(bench);

    let mut bench = criterion.benchmark_group("insert-delete");
    bench.bench_function("std", |bench| {
        bench.iter(|| {
            let mut set = std::collections::BTreeSet::new();
            for &n in &inputs {
                let n = black_box(n);
                black_box(set.insert(n));
            }
            for &n in &inputs {
                black_box(set.remove(&n));
            }
            assert!(set.is_empty());
        })
    });
    bench.bench_function("custom", |bench| {
        bench.iter(|| {
            let mut set = avl::AvlTree::new();
            for &n in &inputs {
                let n = black_box(n);
                let _ = black_box(set.insert(n));
            }
            for &n in &inputs {
                let _ = black_box(set.delete(&n));
            }
            assert!(set.is_empty());
        })
    });
    drop(bench);

    let mut stdset = std::collections::BTreeSet::new();
    let mut customset = avl::AvlTree::new();

    for &n in &inputs {
        stdset.insert(n);
        let _ = customset.insert(n);
    }

    let mut bench = criterion.benchmark_group("search");
    bench.bench_function("std", |bench| {
        bench.iter(|| {
            for &n in &inputs {
                let n = black_box(n);
                black_box(stdset.get(&n));
                black_box(stdset.get(&n.wrapping_add(1)));
            }
        })
    });
    bench.bench_function("custom", |bench| {
        bench.iter(|| {
            for &n in &inputs {
                let n = black_box(n);
                black_box(customset.search(&n));
                black_box(customset.search(&n.wrapping_add(1)));
            }
        })
    });
    drop(bench);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
