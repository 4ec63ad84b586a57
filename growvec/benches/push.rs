use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use growvec::GrowVec;

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");
    for n in [16usize, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("std_vec", n), &n, |b, &n| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..n {
                    v.push(black_box(i));
                }
                v
            })
        });
        group.bench_with_input(BenchmarkId::new("growvec", n), &n, |b, &n| {
            b.iter(|| {
                let mut v = GrowVec::new();
                for i in 0..n {
                    v.push_back(black_box(i));
                }
                v
            })
        });
    }
    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    c.bench_function("growvec_insert_front", |b| {
        b.iter(|| {
            let mut v = GrowVec::new();
            for i in 0..1000 {
                v.insert(v.begin(), black_box(i));
            }
            v
        })
    });
}

fn bench_iter(c: &mut Criterion) {
    let v: GrowVec<i64> = (0..1000).collect();
    c.bench_function("growvec_iter", |b| {
        b.iter(|| {
            let mut sum = 0;
            for &x in black_box(&v) {
                sum += x;
            }
            sum
        })
    });
}

criterion_group!(benches, bench_push_back, bench_insert_front, bench_iter);
criterion_main!(benches);
