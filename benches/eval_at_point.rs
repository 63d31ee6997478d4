use criterion::{black_box, Criterion};
use plonk_poly::core::fields::bb31::{BabyBear, P};
use plonk_poly::core::poly::Polynomial;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn eval_at_point(c: &mut Criterion) {
    const LOG_SIZE: u32 = 16;
    let rng = &mut StdRng::seed_from_u64(0);
    let evals = Polynomial::lagrange(
        (0..1 << LOG_SIZE)
            .map(|_| BabyBear::from_u32_unchecked(rng.gen::<u32>() % P))
            .collect(),
    );
    let poly = evals.ifft().unwrap();
    let x = BabyBear::from_u32_unchecked(rng.gen::<u32>() % P);

    c.bench_function("barycentric_eval 2^16", |b| {
        b.iter(|| black_box(evals.barycentric_eval(black_box(x)).unwrap()))
    });
    c.bench_function("coeff_eval 2^16", |b| {
        b.iter(|| black_box(poly.coeff_eval(black_box(x)).unwrap()))
    });
}

criterion::criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = eval_at_point);
criterion::criterion_main!(benches);
