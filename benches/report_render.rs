#![cfg_attr(not(feature = "perf-ci"), allow(dead_code))]

#[cfg(not(feature = "perf-ci"))]
compile_error!("report_render bench requires --features perf-ci");

#[cfg(feature = "perf-ci")]
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
#[cfg(feature = "perf-ci")]
use stat_cli_core::{render_to_string, renderer_for};
#[cfg(feature = "perf-ci")]
use stat_config::ReportFormat;
#[cfg(feature = "perf-ci")]
use stat_core::{Report, ReportOptions, Sample};
#[cfg(feature = "perf-ci")]
use std::hint::black_box;

#[cfg(feature = "perf-ci")]
fn bench_report_render(c: &mut Criterion) {
    let n = std::env::var("STATLAB_BENCH_VALUES")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1000);
    let text = (0..n)
        .map(|i| ((i * 31) % 97).to_string())
        .collect::<Vec<_>>()
        .join(",");
    let sample: Sample = text.parse().expect("bench input");
    let report = Report::build(sample, &ReportOptions::default()).expect("bench report");

    let mut group = c.benchmark_group("report_render");
    group.throughput(Throughput::Elements(n as u64));
    for format in [ReportFormat::Table, ReportFormat::Json, ReportFormat::Lesson] {
        let renderer = renderer_for(format, 2);
        group.bench_function(BenchmarkId::new(format.to_string(), n), |b| {
            b.iter(|| {
                let out = render_to_string(renderer.as_ref(), &report).expect("render");
                black_box(out);
            })
        });
    }
    group.finish();
}

#[cfg(feature = "perf-ci")]
criterion_group!(benches, bench_report_render);
#[cfg(feature = "perf-ci")]
criterion_main!(benches);
