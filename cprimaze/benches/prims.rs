use cprimaze::{
    algorithms::{generate_seeded, solve},
    dims::Pos,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const ROWS: usize = 101;
const COLS: usize = 101;

pub fn prims_generate(c: &mut Criterion) {
    c.bench_function("prims_generate", |b| {
        b.iter(|| generate_seeded(black_box(ROWS), black_box(COLS), black_box(63)))
    });
}

pub fn best_first_solve(c: &mut Criterion) {
    let grid = generate_seeded(ROWS, COLS, 63);
    let end = Pos(ROWS as i32, COLS as i32);

    c.bench_function("best_first_solve", |b| {
        b.iter(|| solve(black_box(&grid), Pos(1, 1), black_box(end)).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = prims_generate, best_first_solve}
criterion_main!(benches);
