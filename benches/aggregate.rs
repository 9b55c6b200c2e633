// benches/aggregate.rs
//
// Aggregation over a generated 12-round fight. Run with `cargo bench`.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use boxstats::aggregate::{aggregate, fight_totals, select_rounds, RoundFilter};
use boxstats::gen;

fn bench_aggregate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let records = gen::generate_with(&mut rng, "A", "B", 12);

    c.bench_function("aggregate 12 rounds", |b| {
        b.iter(|| aggregate(black_box(&records), black_box("A"), black_box("B")))
    });

    c.bench_function("select round subset", |b| {
        b.iter(|| select_rounds(black_box(&records), RoundFilter::Round(7)))
    });

    c.bench_function("fight totals", |b| {
        b.iter(|| fight_totals(black_box(&records)))
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
