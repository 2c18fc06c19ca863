use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use sparkchart::api::{
    BarRenderer, Chart, ChartOptions, ChartRenderer, RecordingHost, Registry, create_chart,
};
use sparkchart::core::ChartScales;
use sparkchart::render::{Color, RectPrimitive, Shape, Surface};
use sparkchart::{ChartError, ChartResult};

/// One 1x1 dot per value along the bottom edge.
struct DotRenderer;

impl ChartRenderer for DotRenderer {
    fn draw(
        &self,
        values: &[f64],
        _options: &ChartOptions,
        surface: &mut Surface,
    ) -> ChartResult<ChartScales> {
        for (index, &value) in values.iter().enumerate() {
            surface.append_rect(
                RectPrimitive::new(index as f64, surface.height() - 1.0, 1.0, 1.0, Color::rgb(0.0, 0.0, 0.0))
                    .with_value(value),
            );
        }
        Ok(ChartScales::None)
    }
}

/// Dots renderer that fails on its `fail_on`-th call (0-based), after
/// appending a partial shape.
struct FailingOnceRenderer {
    fail_on: usize,
    calls: AtomicUsize,
}

impl FailingOnceRenderer {
    fn new(fail_on: usize) -> Self {
        Self {
            fail_on,
            calls: AtomicUsize::new(0),
        }
    }
}

impl ChartRenderer for FailingOnceRenderer {
    fn draw(
        &self,
        values: &[f64],
        options: &ChartOptions,
        surface: &mut Surface,
    ) -> ChartResult<ChartScales> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == self.fail_on {
            surface.append_rect(RectPrimitive::new(0.0, 0.0, 1.0, 1.0, Color::rgb(1.0, 0.0, 0.0)));
            return Err(ChartError::InvalidData("renderer failed".to_owned()));
        }
        DotRenderer.draw(values, options, surface)
    }
}

fn chart_with_renderer(renderer: FailingOnceRenderer, raw: &str) -> Chart<RecordingHost> {
    let mut registry = Registry::new();
    registry
        .register("dots", ChartOptions::new().with_size(10, 4), renderer)
        .expect("register dots");
    Chart::new(
        RecordingHost::new(),
        Arc::new(registry),
        "dots",
        raw,
        ChartOptions::new(),
    )
}

#[test]
fn builtin_types_keep_registration_order() {
    let registry = Registry::with_builtin_types();
    let names: Vec<&str> = registry.type_names().collect();
    assert_eq!(names, vec!["bar", "line", "pie", "donut"]);
    assert!(Registry::new().is_empty());
}

#[test]
fn duplicate_names_are_rejected() {
    let mut registry = Registry::with_builtin_types();
    let err = registry
        .register("bar", BarRenderer::default_options(), BarRenderer)
        .expect_err("duplicate must fail");
    assert!(matches!(err, ChartError::DuplicateChartType(name) if name == "bar"));
    assert_eq!(registry.len(), 4);
}

#[test]
fn empty_name_and_invalid_defaults_are_rejected() {
    let mut registry = Registry::new();
    assert!(matches!(
        registry.register("", ChartOptions::new(), DotRenderer),
        Err(ChartError::InvalidOptions(_))
    ));
    assert!(matches!(
        registry.register("dots", ChartOptions::new().with_padding(0.9), DotRenderer),
        Err(ChartError::InvalidOptions(_))
    ));
    assert!(!registry.contains("dots"));
}

#[test]
fn custom_renderer_draws_through_the_chart() {
    let mut registry = Registry::with_builtin_types();
    registry
        .register("dots", ChartOptions::new().with_size(10, 4), DotRenderer)
        .expect("register dots");

    let mut chart = Chart::new(
        RecordingHost::new(),
        Arc::new(registry),
        "dots",
        "1,2,3",
        ChartOptions::new(),
    );
    let scales = chart.draw().expect("draw dots");
    assert_eq!(scales, ChartScales::None);

    let surface = chart.surface().expect("surface");
    assert_eq!(surface.len(), 3);
    assert_eq!(surface.rects().nth(2).map(|rect| rect.x), Some(2.0));
    assert_eq!(surface.rects().next().map(|rect| rect.y), Some(3.0));
}

#[test]
fn custom_renderer_without_size_fails_to_draw() {
    let mut registry = Registry::new();
    registry
        .register("dots", ChartOptions::new(), DotRenderer)
        .expect("register dots");

    let mut chart = Chart::new(
        RecordingHost::new(),
        Arc::new(registry),
        "dots",
        "1",
        ChartOptions::new(),
    );
    assert!(matches!(chart.draw(), Err(ChartError::InvalidOptions(_))));
    assert!(chart.surface().is_none());
}

#[test]
fn updated_defaults_apply_to_new_charts() {
    let mut registry = Registry::with_builtin_types();
    registry
        .update_defaults("bar", &ChartOptions::new().with_size(64, 20))
        .expect("update bar defaults");

    let defaults = registry.get("bar").expect("bar").defaults();
    assert_eq!(defaults.width, Some(64));
    assert_eq!(defaults.padding, Some(0.1));

    let mut chart = Chart::new(
        RecordingHost::new(),
        Arc::new(registry),
        "bar",
        "1,2",
        ChartOptions::new(),
    );
    chart.draw().expect("draw");
    assert_eq!(chart.surface().map(Surface::width), Some(64.0));
}

#[test]
fn updating_unknown_defaults_fails() {
    let mut registry = Registry::with_builtin_types();
    assert!(matches!(
        registry.update_defaults("radar", &ChartOptions::new()),
        Err(ChartError::UnknownChartType(_))
    ));
}

#[test]
fn unknown_type_fails_without_touching_the_surface() {
    let mut chart = create_chart(RecordingHost::new(), "radar", "1,2", ChartOptions::new());
    assert!(matches!(chart.draw(), Err(ChartError::UnknownChartType(name)) if name == "radar"));
    assert!(chart.surface().is_none());
    assert!(!chart.host().is_hidden());

    let mut chart = create_chart(RecordingHost::new(), "bar", "1,2", ChartOptions::new());
    chart.draw().expect("bar draw");
    let before = chart.surface().cloned();

    chart.update(Some("radar"), &ChartOptions::new());
    assert!(chart.draw().is_err());
    assert_eq!(chart.surface().cloned(), before);
}

#[test]
fn first_draw_inserts_surface_and_hides_host() {
    let mut chart = create_chart(RecordingHost::new(), "bar", "1,2", ChartOptions::new());
    chart.draw().expect("first draw");
    assert!(chart.host().is_hidden());
    assert_eq!(chart.host().insert_count(), 1);
    assert_eq!(chart.host().update_count(), 0);
    assert!(chart.host().markup().starts_with("<svg"));

    chart.draw().expect("second draw");
    chart.draw().expect("third draw");
    assert_eq!(chart.host().insert_count(), 1);
    assert_eq!(chart.host().update_count(), 2);
}

#[test]
fn update_switches_type_and_keeps_options() {
    let mut chart = create_chart(
        RecordingHost::new(),
        "bar",
        "1,3,2",
        ChartOptions::new().with_size(40, 10),
    );
    chart.draw().expect("bar draw");

    chart.update(Some("line"), &ChartOptions::new().with_stroke_width(2.0));
    chart.draw().expect("line draw");

    assert_eq!(chart.chart_type(), "line");
    assert_eq!(chart.options().width, Some(40));
    assert_eq!(chart.options().stroke_width, Some(2.0));

    let surface = chart.surface().expect("surface");
    assert_eq!(surface.width(), 40.0);
    assert!(matches!(surface.shapes()[0], Shape::Polygon(_)));
    assert!(matches!(&surface.shapes()[1], Shape::Polyline(line) if line.stroke_width == 2.0));
    assert!(chart.host().markup().contains("<polyline"));
}

#[test]
fn set_raw_is_picked_up_by_the_next_draw() {
    let mut chart = create_chart(RecordingHost::new(), "bar", "1,2", ChartOptions::new());
    chart.draw().expect("draw");
    assert_eq!(chart.surface().map(Surface::len), Some(2));

    chart.set_raw("4,5,6,7");
    assert_eq!(chart.surface().map(Surface::len), Some(2));
    chart.draw().expect("redraw");
    assert_eq!(chart.raw(), "4,5,6,7");
    assert_eq!(chart.surface().map(Surface::len), Some(4));
}

#[test]
fn host_options_sit_between_defaults_and_chart_options() {
    let host = RecordingHost::with_data_options(r##"{"fill":["#ff0000"],"padding":0,"height":30}"##);
    let chart = create_chart(host, "bar", "1,2", ChartOptions::new().with_padding(0.2));
    let options = chart.effective_options().expect("options");

    assert_eq!(options.padding, Some(0.2));
    assert_eq!(options.height, Some(30));
    assert_eq!(options.width, Some(32));
    assert_eq!(
        options.fill.map(|fill| fill.resolver().resolve(1.0, 0, &[])),
        Some(Color::rgb8(255, 0, 0))
    );
}

#[test]
fn malformed_host_options_are_ignored() {
    let host = RecordingHost::with_data_options("{not json");
    let mut chart = create_chart(host, "bar", "1,2", ChartOptions::new());
    chart.draw().expect("draw with defaults");
    assert_eq!(chart.surface().map(Surface::height), Some(16.0));
}

#[test]
fn invalid_chart_options_fail_the_draw_only() {
    let mut chart = create_chart(
        RecordingHost::new(),
        "bar",
        "1,2",
        ChartOptions::new().with_padding(0.8),
    );
    assert!(matches!(chart.draw(), Err(ChartError::InvalidOptions(_))));

    chart.update(None, &ChartOptions::new().with_padding(0.2));
    chart.draw().expect("draw after fixing options");
}

#[test]
fn zero_sized_surface_is_rejected() {
    let mut chart = create_chart(
        RecordingHost::new(),
        "line",
        "1,2",
        ChartOptions::new().with_width(0),
    );
    assert!(matches!(
        chart.draw(),
        Err(ChartError::InvalidViewport { width: 0, height: 16 })
    ));
}

#[test]
fn failed_first_draw_defers_host_attachment() {
    let mut chart = chart_with_renderer(FailingOnceRenderer::new(0), "1,2,3");

    assert!(matches!(chart.draw(), Err(ChartError::InvalidData(_))));
    assert!(chart.surface().is_none());
    assert!(!chart.host().is_hidden());
    assert_eq!(chart.host().insert_count(), 0);

    chart.draw().expect("second draw succeeds");
    assert!(chart.host().is_hidden());
    assert_eq!(chart.host().insert_count(), 1);
    assert_eq!(chart.host().update_count(), 0);
    assert_eq!(chart.surface().map(Surface::len), Some(3));
}

#[test]
fn failed_redraw_keeps_previous_surface_and_markup() {
    let mut chart = chart_with_renderer(FailingOnceRenderer::new(1), "1,2,3");
    chart.draw().expect("first draw");
    let before = chart.surface().cloned();
    let markup = chart.host().markup().to_owned();

    chart.set_raw("4,5");
    assert!(chart.draw().is_err());
    assert_eq!(chart.surface().cloned(), before);
    assert_eq!(chart.host().markup(), markup);
    assert_eq!(chart.host().update_count(), 0);

    chart.draw().expect("third draw");
    assert_eq!(chart.surface().map(Surface::len), Some(2));
    assert_eq!(chart.host().insert_count(), 1);
    assert_eq!(chart.host().update_count(), 1);
}
