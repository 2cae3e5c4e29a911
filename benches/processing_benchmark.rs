use brc_aggregator::generators::TestcaseGenerator;
use brc_aggregator::models::Record;
use brc_aggregator::processors::Aggregator;
use brc_aggregator::readers::RecordReader;
use brc_aggregator::writers::SummaryWriter;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_test_input(rows: usize) -> String {
    TestcaseGenerator::new(42).render(rows)
}

fn benchmark_record_parse(c: &mut Criterion) {
    c.bench_function("record_parse", |b| {
        b.iter(|| Record::parse(black_box("Sangli-Miraj-&-Kupwad;-12.3"), 1))
    });
}

fn benchmark_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for rows in [10_000, 100_000] {
        let input = create_test_input(rows);
        group.bench_with_input(BenchmarkId::new("ingest_and_finalize", rows), &input, |b, input| {
            b.iter(|| {
                let mut aggregator = Aggregator::new();
                aggregator
                    .ingest_all(RecordReader::from_reader(input.as_bytes()), None)
                    .unwrap();
                black_box(aggregator.finalize())
            })
        });
    }

    group.finish();
}

fn benchmark_summary_render(c: &mut Criterion) {
    let mut aggregator = Aggregator::new();
    aggregator
        .ingest_all(RecordReader::from_reader(create_test_input(10_000).as_bytes()), None)
        .unwrap();
    let summaries = aggregator.finalize();
    let writer = SummaryWriter::new();

    c.bench_function("summary_render", |b| {
        b.iter(|| black_box(writer.render(black_box(&summaries))))
    });
}

criterion_group!(
    benches,
    benchmark_record_parse,
    benchmark_aggregation,
    benchmark_summary_render
);
criterion_main!(benches);
