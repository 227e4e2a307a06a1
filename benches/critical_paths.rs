//! Criterion benchmarks for tileimg critical paths
//!
//! - Range: tile argument parsing
//! - Renderer: background fill plus tile painting
//! - Output: PNG encoding

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tileimg::color::ColorTable;
use tileimg::grid::GridSpec;
use tileimg::output::write_png;
use tileimg::renderer::{render_tiles, Style};
use tileimg::tile::parse_tiles;

/// One tile argument per cell of a `size x size` grid, cycling colors.
fn make_args(size: u32) -> Vec<String> {
    const COLORS: [&str; 4] = ["red", "green", "blue", "75,0,0"];
    (0..size * size)
        .map(|i| format!("{}:{},{}", COLORS[(i % 4) as usize], i % size, i / size))
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let colors = ColorTable::builtin();
    let mut group = c.benchmark_group("parse_tiles");

    for size in [4u32, 16, 64] {
        let args = make_args(size);
        group.throughput(Throughput::Elements(args.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &args, |b, args| {
            b.iter(|| parse_tiles(black_box(args), &colors).unwrap())
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let colors = ColorTable::builtin();
    let style = Style::default();
    let mut group = c.benchmark_group("render_tiles");

    for (px, size) in [(200u32, 4u32), (1024, 16), (2048, 64)] {
        let grid = GridSpec { columns: size, rows: size, width: px, height: px, pad: 2 };
        let tiles = parse_tiles(&make_args(size), &colors).unwrap();
        group.throughput(Throughput::Elements(u64::from(px) * u64::from(px)));
        group.bench_with_input(BenchmarkId::from_parameter(px), &tiles, |b, tiles| {
            b.iter(|| render_tiles(black_box(&grid), &style, black_box(tiles)))
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let colors = ColorTable::builtin();
    let grid = GridSpec { columns: 16, rows: 16, width: 1024, height: 1024, pad: 2 };
    let tiles = parse_tiles(&make_args(16), &colors).unwrap();
    let canvas = render_tiles(&grid, &Style::default(), &tiles);

    c.bench_function("write_png_1024", |b| {
        b.iter(|| {
            let mut bytes = Vec::new();
            write_png(black_box(canvas.image()), &mut bytes).unwrap();
            bytes
        })
    });
}

criterion_group!(benches, bench_parse, bench_render, bench_encode);
criterion_main!(benches);
