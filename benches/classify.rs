//! Classification throughput benchmarks
//!
//! Run: cargo bench -- classify

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::fs;
use tempfile::TempDir;
use warden::{AuditOptions, AuditTreeUseCase, Classifier, LocalVaultWriter, NullObserver};

/// Mail-like filler that matches no built-in keyword
fn filler(len: usize) -> String {
    "Dear friend, the weather was mild and the garden is green. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_classify_content(c: &mut Criterion) {
    let classifier = Classifier::with_default_keywords().unwrap();
    let mut group = c.benchmark_group("classify");

    for size in [1024usize, 64 * 1024, 1024 * 1024] {
        let neutral = filler(size);
        let signal = format!("{}Durban Princess", filler(size));

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("neutral", size), &neutral, |b, text| {
            b.iter(|| classifier.classify(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("signal_at_end", size), &signal, |b, text| {
            b.iter(|| classifier.classify(black_box(text)))
        });
    }

    group.finish();
}

fn bench_audit_tree(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("export");
    for i in 0..200 {
        let folder = source.join(format!("folder{}", i % 10));
        fs::create_dir_all(&folder).unwrap();
        let body = match i % 3 {
            0 => format!("{} Provenance", filler(4096)),
            1 => format!("{} Unsubscribe", filler(4096)),
            _ => filler(4096),
        };
        fs::write(folder.join(format!("mail{}.eml", i)), body).unwrap();
    }

    let mut group = c.benchmark_group("audit_tree");
    group.sample_size(10);

    for (name, options) in [
        ("sequential", AuditOptions::default()),
        ("parallel", AuditOptions::default().parallel()),
    ] {
        let use_case = AuditTreeUseCase::new(
            std::sync::Arc::new(Classifier::with_default_keywords().unwrap()),
            warden::LossyTextReader::new(),
            options,
        );
        let dest = dir.path().join(name);
        group.bench_function(name, |b| {
            b.iter(|| {
                use_case
                    .execute::<LocalVaultWriter>(&source, &dest, &NullObserver)
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify_content, bench_audit_tree);
criterion_main!(benches);
