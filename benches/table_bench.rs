// Criterion benchmark suite: table lookups and grapheme segmentation.
//
// Run: cargo bench
// Specific group: cargo bench -- lookup
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use graphoni::classify::{classify, Overrides, Sources};
use graphoni::encode::encode;
use graphoni::table::Table;
use graphoni::ucd::{CharEntry, CodeRange, PropertyRun};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn run(first: u32, last: u32, value: &str) -> PropertyRun {
    PropertyRun {
        range: CodeRange { first, last },
        value: value.to_string(),
    }
}

fn build_sources() -> Sources {
    let mut sources = Sources::default();
    for cp in (0x00..=0x1F).chain(0x7F..=0x9F) {
        sources.unicode_data.push(CharEntry {
            code: cp,
            name: "<control>".to_string(),
            category: "Cc".to_string(),
        });
    }
    for (first, last) in [(0x20, 0x7E), (0xA0, 0x2FF), (0x400, 0x4FF)] {
        for code in first..=last {
            sources.unicode_data.push(CharEntry {
                code,
                name: String::new(),
                category: "Ll".to_string(),
            });
        }
    }
    for code in 0x4E00..=0x9FFF {
        sources.unicode_data.push(CharEntry {
            code,
            name: String::new(),
            category: "Lo".to_string(),
        });
    }
    for code in 0x300..=0x36F {
        sources.unicode_data.push(CharEntry {
            code,
            name: String::new(),
            category: "Mn".to_string(),
        });
    }
    sources.east_asian_width.push(run(0x1100, 0x115F, "W"));
    sources.east_asian_width.push(run(0x4E00, 0x9FFF, "W"));
    sources.east_asian_width.push(run(0x1F300, 0x1F64F, "W"));
    sources.grapheme_breaks.push(run(0x0D, 0x0D, "CR"));
    sources.grapheme_breaks.push(run(0x0A, 0x0A, "LF"));
    sources.grapheme_breaks.push(run(0x00, 0x09, "Control"));
    sources.grapheme_breaks.push(run(0x300, 0x36F, "Extend"));
    sources.grapheme_breaks.push(run(0x200D, 0x200D, "ZWJ"));
    sources.grapheme_breaks.push(run(0x1F1E6, 0x1F1FF, "Regional_Indicator"));
    sources.emoji.push(run(0x1F300, 0x1F64F, "Extended_Pictographic"));
    sources
}

fn build_table() -> Table {
    let records = classify(&build_sources(), &Overrides::default())
        .unwrap()
        .into_records();
    Table::build(&encode(&records)).unwrap()
}

fn sample_text(repeats: usize) -> String {
    let chunk = "The quick brown fox caf\u{E9} \u{4E2D}\u{6587}\u{8A9E} \
                 e\u{301}l\u{E8}ve \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466} \
                 \u{1F1FA}\u{1F1F8} line\r\n";
    chunk.repeat(repeats)
}

// ---------------------------------------------------------------------------
// 1. build -- classify and expand the streams
// ---------------------------------------------------------------------------

fn bench_build(c: &mut Criterion) {
    let sources = build_sources();
    let records = classify(&sources, &Overrides::default())
        .unwrap()
        .into_records();
    let data = encode(&records);

    let mut group = c.benchmark_group("build");
    group.sample_size(20);
    group.bench_function("classify", |b| {
        b.iter(|| {
            let classification = classify(black_box(&sources), &Overrides::default()).unwrap();
            black_box(classification.records().len());
        });
    });
    group.bench_function("encode", |b| {
        b.iter(|| {
            let data = encode(black_box(&records));
            black_box(data.catalog.len());
        });
    });
    group.bench_function("expand", |b| {
        b.iter(|| {
            let table = Table::build(black_box(&data)).unwrap();
            black_box(&table);
        });
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. lookup -- single records across the planes
// ---------------------------------------------------------------------------

fn bench_lookup(c: &mut Criterion) {
    let table = build_table();
    let cases: &[(&str, u32)] = &[
        ("ascii", 0x41),
        ("latin1", 0xE9),
        ("cjk", 0x4E2D),
        ("emoji", 0x1F600),
        ("unassigned", 0xE0200),
        ("beyond", 0x20_0000),
    ];

    let mut group = c.benchmark_group("lookup");
    for (name, cp) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), cp, |b, &cp| {
            b.iter(|| black_box(table.lookup(black_box(cp))));
        });
    }
    group.bench_function("bmp_sweep", |b| {
        b.iter(|| {
            let mut columns = 0usize;
            for cp in 0u32..0x1_0000 {
                columns += table.lookup(cp).width.columns();
            }
            black_box(columns)
        });
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// 3. segment -- cluster iteration and width measurement
// ---------------------------------------------------------------------------

fn bench_segment(c: &mut Criterion) {
    let table = build_table();
    let text_1k = sample_text(12);
    let text_16k = sample_text(190);

    let mut group = c.benchmark_group("segment");
    for (name, text) in [("1k", &text_1k), ("16k", &text_16k)] {
        group.bench_with_input(BenchmarkId::new("graphemes", name), text, |b, text| {
            b.iter(|| black_box(table.graphemes(black_box(text)).count()));
        });
        group.bench_with_input(BenchmarkId::new("text_width", name), text, |b, text| {
            b.iter(|| black_box(table.text_width(black_box(text))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_lookup, bench_segment);
criterion_main!(benches);
