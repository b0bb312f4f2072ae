use criterion::{criterion_group, criterion_main, Criterion};

use recs::write::WriteMode;

fn sample_input(num_records: usize) -> String {
    let mut out = String::from("%rec: Person\n%key: email\n%type: age int\n\n");
    for i in 0..num_records {
        out.push_str(&format!(
            "name: Person {i}\nemail: person{i}@example.com\nage: {}\nbio: a short note\n+ continued onto a second line\n\n",
            i % 90,
        ));
    }
    out
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let small = sample_input(10);
    let large = sample_input(1_000);

    c.bench_function("parse small database", |b| {
        b.iter(|| recs::from_str(&small, "bench").unwrap())
    });

    c.bench_function("parse large database", |b| {
        b.iter(|| recs::from_str(&large, "bench").unwrap())
    });

    let small_db = recs::from_str(&small, "bench").unwrap();
    let large_db = recs::from_str(&large, "bench").unwrap();

    c.bench_function("write small database (normal)", |b| {
        b.iter(|| recs::to_string_with_mode(&small_db, WriteMode::Normal))
    });

    c.bench_function("write large database (normal)", |b| {
        b.iter(|| recs::to_string_with_mode(&large_db, WriteMode::Normal))
    });

    c.bench_function("write large database (sexp)", |b| {
        b.iter(|| recs::to_string_with_mode(&large_db, WriteMode::Sexp))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
