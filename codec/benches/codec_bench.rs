use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seedphrase_codec::{derive_seed, encode, MnemonicValidator, WordIndex};
use seedphrase_wordlists::Language;

fn encode_bench(c: &mut Criterion) {
    let entropy = [0x5Au8; 32];

    c.bench_function("encode_24_words_english", |b| {
        b.iter(|| encode(black_box(&entropy), &Language::English))
    });
}

fn index_build_bench(c: &mut Criterion) {
    c.bench_function("word_index_build_japanese", |b| {
        b.iter(|| WordIndex::build(black_box(&Language::Japanese)))
    });
}

fn validate_bench(c: &mut Criterion) {
    let validator = MnemonicValidator::new(&Language::English);
    let phrase = encode(&[0x5Au8; 32], &Language::English).unwrap();

    c.bench_function("validate_24_words_english", |b| {
        b.iter(|| validator.validate(black_box(&phrase)))
    });

    let japanese = MnemonicValidator::new(&Language::Japanese);
    let phrase = encode(&[0x5Au8; 32], &Language::Japanese).unwrap();

    c.bench_function("validate_24_words_japanese", |b| {
        b.iter(|| japanese.validate(black_box(&phrase)))
    });
}

fn seed_bench(c: &mut Criterion) {
    let phrase = encode(&[0x5Au8; 16], &Language::English).unwrap();

    c.bench_function("derive_seed_12_words", |b| {
        b.iter(|| derive_seed(black_box(&phrase), black_box("TREZOR")))
    });
}

criterion_group!(
    benches,
    encode_bench,
    index_build_bench,
    validate_bench,
    seed_bench,
);
criterion_main!(benches);
