use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use singlish_core::converter::{analyze, render_text};
use singlish_core::mapper::map_token;

static INPUTS: &[(&str, &str)] = &[
    ("short", "mama"),
    ("medium", "mama gedhara yanavaa, oyaa enavaadha?"),
    (
        "long",
        "karuNaakaralaa mata podi udhavvak karanna puluvandha? \
         magee laptop eka slow, eeka repair karaganna oone. \
         api heta Galle valata trip ekak yamu.",
    ),
    (
        "mixed",
        "Zoom meeting eka 7.30 AM, link eka www.google.com <br>mata OTP eka message ekakin enavaa 😊",
    ),
];

fn bench_render_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("converter/render_text");
    for &(label, input) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, input.len()), &input, |b, &input| {
            b.iter(|| render_text(input));
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("converter/analyze");
    for &(label, input) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, input.len()), &input, |b, &input| {
            b.iter(|| analyze(input));
        });
    }
    group.finish();
}

fn bench_map_token(c: &mut Criterion) {
    let mut group = c.benchmark_group("converter/map_token");
    for &word in &["mama", "koththuvak", "karuNaakaralaa", "puluvandha"] {
        group.bench_with_input(BenchmarkId::new("word", word), &word, |b, &word| {
            b.iter(|| map_token(word));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render_text, bench_analyze, bench_map_token);
criterion_main!(benches);
