use std::hint::black_box;

use bchfec::{Bch, BchParams};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const WORDS: usize = 4096;

struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(0xDA942042E4DD58B5).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

fn generate_words(k: usize) -> Vec<u32> {
    let mut lcg = Lcg(0x123456789ABCDEF0);
    let mask = (1u32 << k) - 1;
    (0..WORDS).map(|_| lcg.next_u32() & mask).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(WORDS as u64));

    for (n, k, poly) in [(15, 7, 0x13), (31, 21, 0x25), (31, 16, 0x25)] {
        let bch = Bch::new(n, k, poly);
        let words = generate_words(k);
        group.bench_with_input(BenchmarkId::new("bch", format!("{n}_{k}")), &words, |b, words| {
            b.iter(|| {
                let mut acc = 0u32;
                for &w in words {
                    acc ^= bch.encode(black_box(w));
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_init(c: &mut Criterion) {
    c.bench_function("init_bch_31_21", |b| {
        b.iter(|| Bch::try_new(black_box(BchParams::pager())))
    });
}

criterion_group!(benches, bench_encode, bench_init);
criterion_main!(benches);
