//! Criterion benchmarks for finmgr_core calculations
//!
//! Run with: cargo bench -p finmgr_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use finmgr_core::calculate_loans;
use finmgr_core::comparison::compare_schedules;
use finmgr_core::model::Loan;

fn bench_schedule_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule_generation");

    for term in [12, 60, 360] {
        let loan = Loan::new(250_000.0, 6.5, term);
        group.bench_with_input(BenchmarkId::from_parameter(term), &loan, |b, loan| {
            b.iter(|| black_box(loan).calculate())
        });
    }

    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    let original = Loan::new(300_000.0, 7.0, 360).calculate().unwrap();
    let candidate = Loan::new(300_000.0, 5.5, 180).calculate().unwrap();

    c.bench_function("compare_360_vs_180", |b| {
        b.iter(|| {
            compare_schedules(
                black_box(&original.payment_schedule),
                black_box(&candidate.payment_schedule),
            )
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let loans: Vec<Loan> = (0..256)
        .map(|k| Loan::new(10_000.0 + k as f64 * 1_000.0, 3.0 + (k % 8) as f64, 360))
        .collect();

    c.bench_function("calculate_loans_256x360", |b| {
        b.iter(|| calculate_loans(black_box(&loans)))
    });
}

criterion_group!(benches, bench_schedule_generation, bench_comparison, bench_batch);
criterion_main!(benches);
