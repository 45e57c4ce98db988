use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use unitext::normalize::{to_nfc, to_nfd};

fn mixed_corpus(repeats: usize) -> Vec<char> {
    let sample = "Gr\u{00FC}\u{00DF}e aus der Stra\u{00DF}e, e\u{0301}tude, \
                  \u{1112}\u{1161}\u{11AB}\u{AD6D}\u{C5B4}, \
                  \u{039F}\u{0394}\u{03A5}\u{03A3}\u{03A3}\u{0395}\u{03A5}\u{03A3} \
                  q\u{0307}\u{0323} \u{FB01}nal ";
    sample.chars().cycle().take(sample.chars().count() * repeats).collect()
}

fn bench_normalize(c: &mut Criterion) {
    let input = mixed_corpus(64);

    let mut group = c.benchmark_group("normalize_mixed_corpus");
    group.bench_function("to_nfd", |b| {
        b.iter(|| {
            let out = to_nfd(black_box(&input));
            black_box(out.len());
        });
    });
    group.bench_function("to_nfc", |b| {
        b.iter(|| {
            let out = to_nfc(black_box(&input));
            black_box(out.len());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
