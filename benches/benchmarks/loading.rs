use crate::util::generate_records;
use crate::SCENARIOS;
use criterion::{black_box, criterion_group, BenchmarkId, Criterion};
use file_handler::{create_handler, supported_formats};
use tempfile::TempDir;

fn bench_loading(c: &mut Criterion) {
    let dir = TempDir::new().expect("Benchmark setup: unable to create temp dir");
    for format in supported_formats() {
        let handler = create_handler(format).expect("Benchmark setup: unable to create handler");
        let mut group = c.benchmark_group(format!("Handler::load [{}]", format));
        for num_elements in SCENARIOS {
            let path = dir.path().join(format!("records_{}.{}", num_elements, format));
            handler
                .save(&path, &generate_records(num_elements))
                .expect("Benchmark setup: unable to save records");
            group.throughput(criterion::Throughput::Elements(num_elements));
            group.bench_with_input(
                BenchmarkId::from_parameter(num_elements), &path,
                |b, path| b.iter(|| {
                    handler.load(black_box(path)).expect("Benchmark: unable to load records")
                }),
            );
        }
        group.finish();
    }
}

criterion_group!(benches, bench_loading);
