use approx::assert_abs_diff_eq;
use sparkchart::api::{ChartOptions, RecordingHost, create_chart};
use sparkchart::core::{LineScale, Point, ValueBounds, normalize_line_values, project_line};
use sparkchart::render::{Color, FillRule, LineCap, Shape, Surface};

fn draw_line(raw: &str, options: ChartOptions) -> Surface {
    let mut chart = create_chart(RecordingHost::new(), "line", raw, options);
    chart.draw().expect("line draw");
    chart.surface().expect("surface after draw").clone()
}

#[test]
fn single_value_is_reported_as_two_points() {
    let chart = create_chart(RecordingHost::new(), "line", "5", ChartOptions::new());
    assert_eq!(chart.values().expect("values"), vec![5.0, 5.0]);
}

#[test]
fn single_value_renders_as_full_width_segment() {
    let surface = draw_line("5", ChartOptions::new());
    let polyline = surface.shapes()[1].as_polyline().expect("stroke");
    assert_eq!(polyline.points, vec![Point::new(0.0, 15.5), Point::new(32.0, 15.5)]);
}

#[test]
fn area_polygon_closes_against_baseline() {
    let surface = draw_line(
        "1,3,2",
        ChartOptions::new()
            .with_size(30, 16)
            .with_min(0.0)
            .with_stroke_width(2.0),
    );
    assert_eq!(surface.len(), 2);

    let polygon = surface.shapes()[0].as_polygon().expect("area first");
    assert_eq!(polygon.points.len(), 5);
    assert_eq!(polygon.points[0], Point::new(0.0, 15.0));
    assert_eq!(polygon.points[4], Point::new(30.0, 15.0));
    assert_eq!(polygon.fill, Color::rgb8(0xc6, 0xd9, 0xfd));

    let polyline = surface.shapes()[1].as_polyline().expect("stroke second");
    assert_eq!(polyline.points.len(), 3);
    assert_abs_diff_eq!(polyline.points[1].x, 15.0, epsilon = 1e-9);
    assert_abs_diff_eq!(polyline.points[1].y, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(polyline.points[2].x, 30.0, epsilon = 1e-9);
    assert_eq!(polyline.stroke_width, 2.0);
    assert_eq!(polyline.line_cap, LineCap::Butt);
}

#[test]
fn baseline_follows_zero_for_signed_series() {
    let surface = draw_line("-2,2", ChartOptions::new().with_delimiter(','));
    let polygon = surface.shapes()[0].as_polygon().expect("area");
    assert_abs_diff_eq!(polygon.points[0].y, 8.0, epsilon = 1e-9);
}

#[test]
fn zero_stroke_width_skips_polyline() {
    let surface = draw_line("1,2,3", ChartOptions::new().with_stroke_width(0.0));
    assert_eq!(surface.len(), 1);
    assert!(matches!(surface.shapes()[0], Shape::Polygon(_)));
}

#[test]
fn transparent_fill_skips_area() {
    let surface = draw_line(
        "1,2,3",
        ChartOptions::new().with_fill(Color::parse("none").expect("none")),
    );
    assert_eq!(surface.len(), 1);
    assert!(matches!(surface.shapes()[0], Shape::Polyline(_)));
}

#[test]
fn projection_matches_scale() {
    let values = normalize_line_values(vec![2.0, 4.0]);
    let bounds = ValueBounds::resolve(&values, Some(0.0), None);
    let scale = LineScale::new(10.0, 11.0, 1.0, values.len(), bounds);
    let geometry = project_line(&values, scale);

    assert_eq!(geometry.baseline_y, 10.5);
    assert_eq!(geometry.line_points[0], Point::new(0.0, 5.5));
    assert_eq!(geometry.line_points[1], Point::new(10.0, 0.5));
    assert_eq!(geometry.fill_polygon.len(), 4);
}

#[test]
fn area_and_stroke_keep_paint_order() {
    let surface = draw_line("3,1", ChartOptions::new());
    assert!(surface.shapes()[0].as_polygon().is_some());
    assert!(surface.shapes()[1].as_polyline().is_some());
    assert!(surface.paths().all(|path| path.fill_rule == FillRule::NonZero));
}
