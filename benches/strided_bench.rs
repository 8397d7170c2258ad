use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_complex::Complex64;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;
use strided_base::{
    daxpy, daxpy_ndarray, ddot, reinterpret, unary_ndarray, zaxpy, Complex128Array,
};

const SIZES: [usize; 3] = [1_000, 100_000, 1_000_000];

fn random_vec(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.sample(StandardNormal)).collect()
}

fn bench_unary(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut group = c.benchmark_group("unary_abs");
    for n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        let x = random_vec(&mut rng, 2 * n);
        let mut y = vec![0.0; 2 * n];

        group.bench_with_input(BenchmarkId::new("contiguous", n), &n, |b, &n| {
            b.iter(|| {
                unary_ndarray(n as isize, &x, 1, 0, &mut y, 1, 0, f64::abs);
                black_box(&y);
            })
        });

        group.bench_with_input(BenchmarkId::new("stride2", n), &n, |b, &n| {
            b.iter(|| {
                unary_ndarray(n as isize, &x, 2, 0, &mut y, 2, 0, f64::abs);
                black_box(&y);
            })
        });

        group.bench_with_input(BenchmarkId::new("reversed", n), &n, |b, &n| {
            b.iter(|| {
                unary_ndarray(n as isize, &x, -1, n - 1, &mut y, 1, 0, f64::abs);
                black_box(&y);
            })
        });
    }
    group.finish();
}

fn bench_axpy(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut group = c.benchmark_group("axpy");
    for n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        let x = random_vec(&mut rng, n);
        let mut y = random_vec(&mut rng, n);

        group.bench_with_input(BenchmarkId::new("daxpy", n), &n, |b, &n| {
            b.iter(|| {
                daxpy(n as isize, black_box(1e-9), &x, 1, &mut y, 1);
            })
        });

        group.bench_with_input(BenchmarkId::new("daxpy_negative", n), &n, |b, &n| {
            b.iter(|| {
                daxpy_ndarray(n as isize, black_box(1e-9), &x, -1, n - 1, &mut y, 1, 0);
            })
        });

        group.bench_with_input(BenchmarkId::new("ddot", n), &n, |b, &n| {
            b.iter(|| black_box(ddot(n as isize, &x, 1, &y, 1)))
        });
    }
    group.finish();
}

fn bench_accessor_path(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let mut group = c.benchmark_group("zaxpy");
    for n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        let x: Vec<Complex64> = (0..n)
            .map(|_| Complex64::new(rng.sample(StandardNormal), rng.sample(StandardNormal)))
            .collect();
        let mut y = x.clone();
        let alpha = Complex64::new(1e-9, -1e-9);

        group.bench_with_input(BenchmarkId::new("boxed", n), &n, |b, &n| {
            b.iter(|| {
                zaxpy(n as isize, alpha, &x[..], 1, &mut y[..], 1);
            })
        });

        let xparts = reinterpret(&x).to_vec();
        let mut yparts = xparts.clone();
        group.bench_with_input(BenchmarkId::new("interleaved", n), &n, |b, &n| {
            b.iter(|| {
                let (Ok(xa), Ok(mut ya)) = (
                    Complex128Array::new(&xparts[..]),
                    Complex128Array::new(&mut yparts[..]),
                ) else {
                    panic!("interleaved buffers must have even length");
                };
                zaxpy(n as isize, alpha, &xa, 1, &mut ya, 1);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_unary, bench_axpy, bench_accessor_path);
criterion_main!(benches);
