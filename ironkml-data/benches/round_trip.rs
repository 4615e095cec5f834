//! Extended data read/write benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use ironkml_core::{KmlObject, WriterConfig, parse_element};
use ironkml_data::{Data, ExtendedData, Schema, SchemaData};
use std::hint::black_box;

fn sample_extended_data() -> ExtendedData {
    let mut extended_data = ExtendedData::default();
    for i in 0..16 {
        extended_data.push(Data::new(format!("name{i}"), format!("{i}")));
        extended_data.push(
            SchemaData::with_data("#s1", vec![("color", "red"), ("size", "large")])
                .expect("valid schema data"),
        );
    }
    extended_data
}

fn benchmark_extended_data_write(c: &mut Criterion) {
    let extended_data = sample_extended_data();
    let config = WriterConfig::compact();

    c.bench_function("extended_data_write", |b| {
        b.iter(|| black_box(&extended_data).to_xml_string(&config))
    });
}

fn benchmark_extended_data_read(c: &mut Criterion) {
    let xml = sample_extended_data()
        .to_xml_string(&WriterConfig::compact())
        .expect("valid xml");
    let element = parse_element(&xml).expect("valid xml");

    c.bench_function("extended_data_parse", |b| {
        b.iter(|| parse_element(black_box(&xml)))
    });

    c.bench_function("extended_data_read_element", |b| {
        let mut extended_data = ExtendedData::default();
        b.iter(|| extended_data.read_element(black_box(&element)))
    });
}

fn benchmark_schema_append(c: &mut Criterion) {
    c.bench_function("schema_append_field", |b| {
        b.iter(|| {
            let mut schema = Schema::new("s").expect("valid id");
            for _ in 0..32 {
                schema
                    .append_field(black_box("double"), "value", None)
                    .expect("valid field");
            }
            schema
        })
    });
}

criterion_group!(
    benches,
    benchmark_extended_data_write,
    benchmark_extended_data_read,
    benchmark_schema_append,
);
criterion_main!(benches);
