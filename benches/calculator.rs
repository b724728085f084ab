use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cpto_demo::{Calculator, Report};

fn bench_operations(c: &mut Criterion) {
    c.bench_function("calculate_area", |b| {
        let mut calc = Calculator::new();
        b.iter(|| black_box(calc.calculate_area(black_box(5.0))));
    });

    c.bench_function("calculate_square", |b| {
        let mut calc = Calculator::new();
        let mut out = 0.0;
        b.iter(|| {
            calc.calculate_square(black_box(7.0), &mut out);
            black_box(out)
        });
    });
}

fn bench_report(c: &mut Criterion) {
    c.bench_function("report_build", |b| b.iter(|| black_box(Report::build())));

    c.bench_function("report_render_text", |b| {
        let report = Report::build();
        b.iter(|| black_box(report.to_string()));
    });
}

criterion_group!(benches, bench_operations, bench_report);
criterion_main!(benches);
