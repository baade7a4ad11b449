// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rate_watch::{config::consts::PRICE_LOCATOR, core::html, fetch};

const PAGE: &str = include_str!("../tests/fixtures/price_page.html");

fn bench_extract(c: &mut Criterion) {
    let sel = html::compile(PRICE_LOCATOR).unwrap();

    c.bench_function("compile_locator", |b| {
        b.iter(|| html::compile(black_box(PRICE_LOCATOR)).is_ok())
    });

    c.bench_function("extract_price", |b| {
        b.iter(|| {
            let v = fetch::extract(black_box(PAGE), &sel);
            black_box(v.is_ok())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
