use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kmeanspp::distance::scalar;
use rand::Rng;

fn generate_random_point(dim: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn bench_l2_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("l2");

    for dim in [2, 16, 128, 512, 1024].iter() {
        let a = generate_random_point(*dim);
        let b = generate_random_point(*dim);

        group.throughput(Throughput::Bytes((*dim * 8 * 2) as u64)); // 2 points, f64 = 8 bytes

        group.bench_with_input(BenchmarkId::new("scalar", dim), dim, |bencher, _| {
            bencher.iter(|| scalar::l2_scalar(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

fn bench_min_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_distances");
    group.sample_size(50);

    let dim = 64;
    let centroids: Vec<Vec<f64>> = (0..16).map(|_| generate_random_point(dim)).collect();

    for num_points in [100, 1000, 10000].iter() {
        let points: Vec<Vec<f64>> = (0..*num_points).map(|_| generate_random_point(dim)).collect();

        group.throughput(Throughput::Elements(*num_points as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", num_points),
            &points,
            |bencher, pts| {
                bencher.iter(|| kmeanspp::min_distances(black_box(pts), black_box(&centroids)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", num_points),
            &points,
            |bencher, pts| {
                bencher.iter(|| {
                    kmeanspp::min_distances_parallel(black_box(pts), black_box(&centroids))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_l2_distance, bench_min_distances);
criterion_main!(benches);
