use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tibcal_base::{
    from_month_count, has_leap_month, jdn_to_tibetan, moon_equ, sun_equ, tibetan_to_jdn,
    to_month_count, true_date, western_year,
};

fn equation_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("equations");
    group.bench_function("moon_equ", |b| {
        b.iter(|| moon_equ(black_box(15), black_box(14866)))
    });
    group.bench_function("sun_equ", |b| {
        b.iter(|| sun_equ(black_box(15), black_box(14866)))
    });
    group.bench_function("true_date", |b| {
        b.iter(|| true_date(black_box(15), black_box(14866)))
    });
    group.finish();
}

fn month_count_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("month_count");
    group.bench_function("from_month_count", |b| {
        b.iter(|| from_month_count(black_box(14866)))
    });
    group.bench_function("to_month_count", |b| {
        b.iter(|| to_month_count(black_box(2135), black_box(3), black_box(true)))
    });
    group.bench_function("has_leap_month", |b| {
        b.iter(|| has_leap_month(black_box(2135), black_box(3)))
    });
    group.finish();
}

fn conversion_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    group.bench_function("tibetan_to_jdn", |b| {
        b.iter(|| tibetan_to_jdn(black_box(2151), 1, false, black_box(1)))
    });
    group.bench_function("jdn_to_tibetan", |b| {
        b.iter(|| jdn_to_tibetan(black_box(2_460_351)))
    });
    group.bench_function("western_year", |b| b.iter(|| western_year(black_box(2024))));
    group.finish();
}

criterion_group!(benches, equation_bench, month_count_bench, conversion_bench);
criterion_main!(benches);
