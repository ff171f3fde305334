//! Benchmarks for the proofreading pipeline and text analysis.

use arabic_proofreader::{ProofreadingPipeline, TextAnalysis};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const PARAGRAPH: &str = "في النهاية تم تحليل البيانات بشكل كتير دقيق، ويتم عرض النتائج في الجدول \
                         و لكن بصراحة الموضوع يحتاج بحث إضافي (Smith 2020 ص 5). ";

fn bench_pipeline(c: &mut Criterion) {
    let pipeline = ProofreadingPipeline::new();
    let mut group = c.benchmark_group("pipeline");

    for repeats in [1usize, 10, 100] {
        let text = PARAGRAPH.repeat(repeats);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &text, |b, text| {
            b.iter(|| pipeline.process(black_box(text)))
        });
    }

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let text = PARAGRAPH.repeat(100);
    c.bench_function("analyze_100_paragraphs", |b| {
        b.iter(|| TextAnalysis::analyze(black_box(&text)))
    });
}

criterion_group!(benches, bench_pipeline, bench_analysis);
criterion_main!(benches);
