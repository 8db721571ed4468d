use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huffcode::{build_code, count_frequencies, decode, encode, HuffmanTree};

fn sample(len: usize) -> Vec<u8> {
    // Skewed toward low symbols so codes vary in length.
    (0..len).map(|i| ((i * 31) % 97 % (1 + i % 23)) as u8).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_build");
    let alphabet: Vec<(u8, u64)> = (0..=255u8).map(|s| (s, 1 + (s as u64 * 7919) % 1000)).collect();

    group.bench_function("tree_256", |b| {
        b.iter(|| HuffmanTree::build(black_box(&alphabet)).unwrap())
    });
    group.bench_function("build_code_256", |b| {
        b.iter(|| build_code(black_box(&alphabet)).unwrap())
    });
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_codec");
    let input = sample(10_000);
    let (tree, table) = build_code(&count_frequencies(&input)).unwrap();

    group.bench_function("encode", |b| {
        b.iter(|| encode(black_box(&input), &table).unwrap())
    });

    let bits = encode(&input, &table).unwrap();
    group.bench_function("decode", |b| {
        b.iter(|| decode(&tree, black_box(&bits)).unwrap())
    });
}

criterion_group!(benches, bench_build, bench_codec);
criterion_main!(benches);
