use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use unitui::{domain::format::format_conversion, ConversionRequest, TABLE};

fn benchmark(c: &mut Criterion) {
    c.bench_function("convert-scalar", |b| {
        b.iter(|| {
            TABLE.convert(
                black_box(1500.0),
                black_box("Length"),
                black_box("Feet"),
                black_box("Miles"),
            )
        })
    });

    c.bench_function("convert-formula", |b| {
        b.iter(|| {
            TABLE.convert(
                black_box(98.6),
                black_box("Temperature"),
                black_box("Fahrenheit"),
                black_box("Kelvin"),
            )
        })
    });

    c.bench_function("convert-not-found", |b| {
        b.iter(|| {
            TABLE.convert(
                black_box(5.0),
                black_box("Length"),
                black_box("Meters"),
                black_box("Liters"),
            )
        })
    });

    let request = ConversionRequest::new("Weight", "Pounds", "Kilograms", 2.0);
    c.bench_function("apply-and-format", |b| {
        b.iter(|| {
            let request = black_box(&request);
            TABLE
                .apply(request)
                .map(|result| format_conversion(request, result, 2))
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
