use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fasta_parser::io::fasta;
use fasta_parser::Seq;

fn make_dna(len: usize) -> String {
    let bases = ['A', 'C', 'G', 'T'];
    let mut seq = String::with_capacity(len);
    let mut x: u32 = 42;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    seq
}

fn make_fasta(records: usize, len: usize) -> String {
    let mut text = String::new();
    for i in 0..records {
        text.push_str(&format!(">rec{} bench\n", i));
        for line in make_dna(len).as_bytes().chunks(60) {
            text.push_str(std::str::from_utf8(line).unwrap());
            text.push('\n');
        }
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = make_fasta(100, 1_000);

    c.bench_function("parse_100x1kb", |b| {
        b.iter(|| {
            let n = fasta::parse_str(black_box(&text)).filter(Result::is_ok).count();
            black_box(n);
        })
    });
}

fn bench_gc_content(c: &mut Criterion) {
    let seq = Seq::new(&make_dna(10_000), "bench").unwrap();

    c.bench_function("gc_content_10kb", |b| {
        b.iter(|| {
            black_box(black_box(&seq).gc_content().unwrap());
        })
    });
}

fn bench_translate(c: &mut Criterion) {
    let seq = Seq::new(&make_dna(9_999), "bench").unwrap();

    c.bench_function("translate_10kb", |b| {
        b.iter(|| {
            black_box(black_box(&seq).translate().unwrap());
        })
    });
}

fn bench_find_orfs(c: &mut Criterion) {
    let seq = Seq::new(&make_dna(10_000), "bench").unwrap();

    c.bench_function("find_orfs_10kb", |b| {
        b.iter(|| {
            black_box(black_box(&seq).find_orfs(30).unwrap());
        })
    });
}

fn bench_reverse_complement(c: &mut Criterion) {
    let seq = Seq::new(&make_dna(10_000), "bench").unwrap();

    c.bench_function("reverse_complement_10kb", |b| {
        b.iter(|| {
            black_box(black_box(&seq).reverse_complement().unwrap());
        })
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_gc_content,
    bench_translate,
    bench_find_orfs,
    bench_reverse_complement
);
criterion_main!(benches);
