use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elgamal_lab::discrete_log::discrete_log;
use elgamal_lab::modular::mod_exp;

fn bench_discrete_log(c: &mut Criterion) {
    // 1_000_003 is prime; the solver runs ~1000 giant steps plus the scan.
    let p = 1_000_003;
    let alpha = 5;
    let beta = mod_exp(alpha, 912_211, p).unwrap();

    c.bench_function("bsgs_discrete_log_1e6", |b| {
        b.iter(|| discrete_log(black_box(alpha), black_box(beta), black_box(p)))
    });
}

criterion_group!(benches, bench_discrete_log);
criterion_main!(benches);
