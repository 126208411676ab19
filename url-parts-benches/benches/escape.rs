use criterion::{black_box, criterion_group, criterion_main, Criterion};

use url_parts::escape::{escape, unescape, Encoding};

pub fn criterion_benchmark(c: &mut Criterion) {
    let plain = "/foo1/foo2/foo3/foo4/foo5/foo6/foo7/foo8";
    let special = "/f\u{F6}\u{F6} b\u{E4}r/?#[]@!$&'()*+,;=%/\u{263A}";

    c.bench_function("escape path (unchanged)", |b| {
        b.iter(|| escape(black_box(plain), Encoding::Path))
    });

    c.bench_function("escape path (specials)", |b| {
        b.iter(|| escape(black_box(special), Encoding::Path))
    });

    c.bench_function("escape query (specials)", |b| {
        b.iter(|| escape(black_box(special), Encoding::QueryComponent))
    });

    let escaped = escape(special, Encoding::QueryComponent).into_owned();
    c.bench_function("unescape query", |b| {
        b.iter(|| unescape(black_box(&escaped), Encoding::QueryComponent).expect("should be valid"))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
