use crate::util::generate_records;
use crate::SCENARIOS;
use criterion::{black_box, criterion_group, BenchmarkId, Criterion};
use file_handler::{create_handler, supported_formats};
use tempfile::TempDir;

fn bench_saving(c: &mut Criterion) {
    let dir = TempDir::new().expect("Benchmark setup: unable to create temp dir");
    for format in supported_formats() {
        let handler = create_handler(format).expect("Benchmark setup: unable to create handler");
        let path = dir.path().join(format!("records.{}", format));
        let mut group = c.benchmark_group(format!("Handler::save [{}]", format));
        for num_elements in SCENARIOS {
            let records = generate_records(num_elements);
            group.throughput(criterion::Throughput::Elements(num_elements));
            group.bench_with_input(
                BenchmarkId::from_parameter(num_elements), &records,
                |b, records| b.iter(|| {
                    handler.save(&path, black_box(records)).expect("Benchmark: unable to save records")
                }),
            );
        }
        group.finish();
    }
}

criterion_group!(benches, bench_saving);
