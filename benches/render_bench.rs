use sparkchart::api::{ChartOptions, RecordingHost, create_chart};
use sparkchart::core::{
    BarScale, PieHole, ValueBounds, Viewport, parse_series, project_bars, project_pie,
};
use sparkchart::render::SvgRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_series(len: usize) -> String {
    (0..len)
        .map(|i| {
            let t = i as f64;
            format!("{:.2}", (t * 0.37).sin() * 50.0 + t * 0.01)
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn bench_parse_series_10k(c: &mut Criterion) {
    let raw = sample_series(10_000);

    c.bench_function("parse_series_10k", |b| {
        b.iter(|| {
            let _ = parse_series(black_box(&raw), ',');
        })
    });
}

fn bench_bar_projection_10k(c: &mut Criterion) {
    let values = parse_series(&sample_series(10_000), ',');
    let bounds = ValueBounds::resolve(&values, Some(0.0), None);
    let scale = BarScale::new(1920.0, 64.0, values.len(), bounds);

    c.bench_function("bar_projection_10k", |b| {
        b.iter(|| {
            let _ = project_bars(black_box(&values), black_box(scale), black_box(0.1));
        })
    });
}

fn bench_pie_projection_64(c: &mut Criterion) {
    let values: Vec<f64> = (1..=64).map(f64::from).collect();

    c.bench_function("pie_projection_64", |b| {
        b.iter(|| {
            let _ = project_pie(black_box(&values), Viewport::new(256, 256), PieHole::Fixed(64.0));
        })
    });
}

fn bench_line_chart_draw_to_svg_2k(c: &mut Criterion) {
    let mut chart = create_chart(
        RecordingHost::new(),
        "line",
        sample_series(2_000),
        ChartOptions::new().with_delimiter(',').with_size(800, 120),
    );

    c.bench_function("line_chart_draw_to_svg_2k", |b| {
        b.iter(|| {
            chart.draw().expect("draw should succeed");
            let surface = chart.surface().expect("surface after draw");
            let _ = black_box(SvgRenderer::render_to_string(surface));
        })
    });
}

criterion_group!(
    benches,
    bench_parse_series_10k,
    bench_bar_projection_10k,
    bench_pie_projection_64,
    bench_line_chart_draw_to_svg_2k
);
criterion_main!(benches);
