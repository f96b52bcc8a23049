//! Performance benchmarks for the leave lookup engine.
//!
//! The extractor dominates query latency once sources are fetched, so the
//! suite measures extraction alone and the full in-memory search pipeline
//! over synthetic reports of increasing size.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use leave_engine::config::ReportSource;
use leave_engine::error::EngineResult;
use leave_engine::fetch::ReportFetcher;
use leave_engine::pipeline::{extract_records, run_search};

/// Builds a synthetic report with the given number of employee records,
/// interleaved with noise lines the extractor must skip.
fn create_report(record_count: usize) -> String {
    const SURNAMES: [&str; 5] = ["Smith J", "Jones", "Heshe L", "Brown T", "Wilson"];

    let mut report = String::from("Leave Report for period 2511\n\n");
    for i in 0..record_count {
        report.push_str(&format!(
            "MAN 25TH PPA{:05} {} Annual 1\n",
            i,
            SURNAMES[i % SURNAMES.len()]
        ));
        report.push_str("Annual 1 5.00 2.50 0.00 0.00 1.00\n");
        if i % 2 == 0 {
            report.push_str("Sick Leave 1 3.00 0.50\n");
        }
        report.push_str("--------\n");
    }
    report
}

struct InMemoryFetcher {
    report: String,
}

impl ReportFetcher for InMemoryFetcher {
    fn fetch(&self, _source: &ReportSource) -> EngineResult<String> {
        Ok(self.report.clone())
    }
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_records");
    for record_count in [10usize, 100, 1000] {
        let report = create_report(record_count);
        group.throughput(Throughput::Elements(record_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(record_count),
            &report,
            |b, report| b.iter(|| extract_records(black_box(report))),
        );
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let sources = [ReportSource {
        id: "001LVE2511.csv".to_string(),
        url: "http://reports.example.com/001LVE2511.csv".to_string(),
    }];
    let fetcher = InMemoryFetcher {
        report: create_report(1000),
    };

    c.bench_function("run_search_1000_records", |b| {
        b.iter(|| run_search(black_box("smith"), &sources, &fetcher))
    });
}

criterion_group!(benches, bench_extraction, bench_search);
criterion_main!(benches);
