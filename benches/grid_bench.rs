// Benchmark for calendar grid generation and clock hit-testing
// Measures the work done on every frame while a picker is open

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use egui::Pos2;
use rust_pickers::services::calendar::{month_grid, year_grid};
use rust_pickers::services::clock::geometry::{angle_to_value, point_at, position_angle};
use rust_pickers::services::clock::minute_options;

fn bench_month_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("month_grid");

    for months in [1, 12, 120].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(months), months, |b, &months| {
            b.iter(|| {
                for index in 0..months {
                    let year = 2024 + index / 12;
                    let month = (index % 12 + 1) as u32;
                    black_box(month_grid(black_box(year), black_box(month)));
                }
            });
        });
    }

    group.finish();
}

fn bench_year_grid(c: &mut Criterion) {
    c.bench_function("year_grid", |b| {
        b.iter(|| year_grid(black_box(112)));
    });
}

fn bench_minute_hit_test(c: &mut Criterion) {
    let center = Pos2::new(115.0, 115.0);
    let mut group = c.benchmark_group("minute_hit_test");

    for interval in [None, Some(5), Some(15)].iter() {
        let options = minute_options(*interval);
        let label = interval.map_or("all".to_string(), |i| i.to_string());
        group.bench_function(label, |b| {
            b.iter(|| {
                for minute in 0..60 {
                    let point = point_at(center, 87.0, position_angle(minute as f32, 60));
                    black_box(angle_to_value(black_box(point), center, &options, 60));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_month_grid, bench_year_grid, bench_minute_hit_test);
criterion_main!(benches);
