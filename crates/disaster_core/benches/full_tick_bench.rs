//! Criterion benchmark: one full `FixedUpdate` with disasters running.
//!
//! Builds a `TestCity` of the requested size, queues a mix of concurrent
//! disasters, lets the trigger requests drain, then times single ticks of
//! the whole schedule (tick counter, param sync, trigger intake, disaster
//! update and notifications).
//!
//! Run with: cargo bench -p disaster_core --bench full_tick_bench --features bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use disaster_core::buildings::{Building, CommercialZoning, Occupant};
use disaster_core::disasters::DisasterType;
use disaster_core::test_harness::TestCity;

fn create_benchmark_city(size: usize) -> TestCity {
    let mut city = TestCity::with_size(size, size).with_seed(7);
    for y in 0..size {
        for x in 0..size {
            city = match (x + y) % 4 {
                0 => city.with_building(x, y, Building::residential(vec![Occupant::default(); 4])),
                1 => city.with_building(x, y, Building::commercial(CommercialZoning::Factory)),
                2 => city.with_trees(x, y, 3),
                _ => city.with_road(x, y),
            };
        }
    }

    let mid = (size / 2) as i32;
    // Long durations so nothing ends while measuring.
    city.trigger(DisasterType::Earthquake, 0.6, 100_000, mid, mid, 12.0);
    city.trigger(DisasterType::PowerGridFailure, 0.8, 100_000, mid / 2, mid / 2, 8.0);
    city.trigger(DisasterType::IndustrialAccident, 0.5, 100_000, mid + mid / 2, mid, 6.0);
    city.trigger(DisasterType::Fire, 0.9, 100_000, mid, mid + mid / 2, 2.0);
    city.tick(1);
    city
}

fn bench_full_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_tick_with_disasters");
    group.sample_size(20);

    for size in [64usize, 128, 256] {
        let mut city = create_benchmark_city(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| city.tick(1));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_tick);
criterion_main!(benches);
