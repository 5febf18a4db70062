use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use sun_times::almanac::{self, SolarCoordinates, approximate_time};
use sun_times::{CalendarDate, Event, SunEventRequest, Zenith, compute_event};

fn benchmark_single_event(c: &mut Criterion) {
    let date = CalendarDate::new(2024, 6, 21).unwrap();
    let lat = 36.72016;
    let lon = -4.42034;

    c.bench_function("compute_event_single", |b| {
        b.iter(|| {
            compute_event(
                black_box(Event::Set),
                black_box(&date),
                black_box(lat),
                black_box(lon),
                black_box(Zenith::OFFICIAL_DEGREES),
            )
        })
    });

    c.bench_function("solar_coordinates_single", |b| {
        let t = approximate_time(Event::Set, &date, lon);
        b.iter(|| SolarCoordinates::from_approximate_time(black_box(t)))
    });

    // polar night exits at the hour-angle check
    c.bench_function("compute_event_polar_night", |b| {
        let midwinter = CalendarDate::new(2024, 12, 21).unwrap();
        b.iter(|| {
            compute_event(
                black_box(Event::Rise),
                black_box(&midwinter),
                black_box(78.0),
                black_box(15.0),
                black_box(Zenith::OFFICIAL_DEGREES),
            )
        })
    });
}

fn benchmark_year_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("year_sweep");
    let dates: Vec<CalendarDate> = (1..=365)
        .map(|ordinal| CalendarDate::from_ordinal(2023, ordinal).unwrap())
        .collect();

    for zenith in [Zenith::Official, Zenith::Civil, Zenith::Astronomical] {
        group.throughput(Throughput::Elements(dates.len() as u64 * 2));
        group.bench_with_input(
            BenchmarkId::new("sun_times", zenith.degrees()),
            &zenith,
            |b, &zenith| {
                b.iter(|| {
                    for date in &dates {
                        black_box(almanac::sun_times(
                            black_box(date),
                            black_box(59.3293),
                            black_box(18.0686),
                            zenith,
                        ));
                    }
                })
            },
        );
    }

    group.finish();
}

fn benchmark_coordinate_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate_sweep");
    let date = CalendarDate::new(2024, 3, 20).unwrap();

    for &step in &[10, 5, 2] {
        let coordinates: Vec<(f64, f64)> = (-80..=80)
            .step_by(step)
            .flat_map(|lat| {
                (-180..180)
                    .step_by(step)
                    .map(move |lon| (f64::from(lat), f64::from(lon)))
            })
            .collect();

        group.throughput(Throughput::Elements(coordinates.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("sunrise", format!("{step}deg")),
            &coordinates,
            |b, coordinates| {
                b.iter(|| {
                    for &(lat, lon) in coordinates {
                        black_box(SunEventRequest::new(Event::Rise, &date, lat, lon).calculate());
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_event,
    benchmark_year_sweep,
    benchmark_coordinate_sweep
);
criterion_main!(benches);
