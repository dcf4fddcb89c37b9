use std::hint::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use nc_common::dna_salt_correction;
use nc_common::water_molarity;
use nc_common::reference_dna;

fn correction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("thermo");
    group.bench_function("water_molarity", |b| {
        b.iter(|| water_molarity(black_box(310.15)))
    });
    group.bench_function("dna_salt_correction", |b| {
        b.iter(|| dna_salt_correction(black_box(310.15), black_box(0.5), black_box(0.01), false))
    });
    group.bench_function("dna_salt_correction_long_helix", |b| {
        b.iter(|| dna_salt_correction(black_box(310.15), black_box(0.5), black_box(0.01), true))
    });
    group.finish();

    let mut group = c.benchmark_group("reference");
    for len in [50, 500, 3000] {
        group.bench_function(format!("reference_dna_l{}", len), |b| {
            b.iter(|| reference_dna(black_box(len)).map(str::len))
        });
    }
    group.finish();
}

criterion_group!(benches, correction_benchmark);
criterion_main!(benches);
