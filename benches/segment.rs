use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use unitext::segment::{grapheme, word};

fn article(repeats: usize) -> Vec<char> {
    let sample = "The quick (\u{201C}brown\u{201D}) fox can\u{2019}t jump 32.3 feet. \
                  \u{1F469}\u{200D}\u{1F4BB} wrote e\u{0301}tudes in \u{AD6D}\u{C5B4}. ";
    sample.chars().cycle().take(sample.chars().count() * repeats).collect()
}

fn bench_segment(c: &mut Criterion) {
    let input = article(64);

    let mut group = c.benchmark_group("segment_article");
    group.bench_function("grapheme_count", |b| {
        b.iter(|| {
            black_box(grapheme::grapheme_count(black_box(&input)));
        });
    });
    group.bench_function("word_count", |b| {
        b.iter(|| {
            black_box(word::word_count(black_box(&input)));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_segment);
criterion_main!(benches);
