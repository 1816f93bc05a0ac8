extern crate criterion;

use criterion::{criterion_group, criterion_main, Criterion};

use darkscope_lib::{scope, ScopeClass};

fn bench_large_stylesheet(c: &mut Criterion) {
    let mut big_css = String::with_capacity(10_000_000);
    big_css.push_str(":root {\n  --bg: #000;\n}\n");
    for i in 0..100_000 {
        big_css.push_str(&format!(
            ".card-{i}, .panel-{i} > a:hover {{\n  color: #fff;\n}}\n"
        ));
    }

    let class = ScopeClass::default();
    c.bench_function("large_stylesheet", |b| b.iter(|| scope(&big_css, &class)));
}

fn bench_media_heavy(c: &mut Criterion) {
    let mut media_css = String::new();
    for i in 0..10_000 {
        media_css.push_str(&format!(
            "@media (min-width: {i}px) {{\n  body.w{i}, ::selection {{\n    margin: 0;\n  }}\n}}\n"
        ));
    }

    let class = ScopeClass::default();
    c.bench_function("media_heavy", |b| b.iter(|| scope(&media_css, &class)));
}

criterion_group!(benches, bench_large_stylesheet, bench_media_heavy);
criterion_main!(benches);
