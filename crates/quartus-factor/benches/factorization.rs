//! Benchmarks for the F_p factorization pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use quartus_factor::{factor_with, squarefree_factorization, SplitOptions};
use quartus_integers::Integer;
use quartus_poly::ModPoly;

fn poly(coeffs: &[i64], p: i64) -> ModPoly {
    ModPoly::new(
        coeffs.iter().map(|&n| Integer::new(n)).collect(),
        Integer::new(p),
    )
}

/// Product of x + c for c in 0..k over F_p.
fn split_poly(k: i64, p: i64) -> ModPoly {
    (0..k).fold(ModPoly::one(Integer::new(p)), |acc, c| {
        acc.mul(&poly(&[c, 1], p))
    })
}

fn bench_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("factor");

    let f_small = split_poly(4, 101);
    group.bench_function("four_linear_factors_f101", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            black_box(factor_with(&f_small, &mut rng, &SplitOptions::default()).unwrap())
        })
    });

    let f_larger = split_poly(8, 1009);
    group.bench_function("eight_linear_factors_f1009", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            black_box(factor_with(&f_larger, &mut rng, &SplitOptions::default()).unwrap())
        })
    });

    // Large prime modulus exercises the big-integer paths
    let p = "1000000007";
    let big_p = Integer::from_str_radix(p, 10).unwrap();
    let a = ModPoly::new(vec![Integer::new(1), Integer::new(1)], big_p.clone());
    let b2 = ModPoly::new(vec![Integer::new(2), Integer::new(1)], big_p);
    let f_big = a.mul(&b2);
    group.bench_function("two_linear_factors_big_prime", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            black_box(factor_with(&f_big, &mut rng, &SplitOptions::default()).unwrap())
        })
    });

    group.finish();
}

fn bench_squarefree(c: &mut Criterion) {
    let mut group = c.benchmark_group("squarefree");

    // (x + 1)^2 (x + 2)^3 (x + 3) over F_101
    let b1 = poly(&[1, 1], 101);
    let b2 = poly(&[2, 1], 101);
    let b3 = poly(&[3, 1], 101);
    let f = b1
        .mul(&b1)
        .mul(&b2)
        .mul(&b2)
        .mul(&b2)
        .mul(&b3);

    group.bench_function("mixed_multiplicities_f101", |b| {
        b.iter(|| black_box(squarefree_factorization(&f).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_factor, bench_squarefree);
criterion_main!(benches);
