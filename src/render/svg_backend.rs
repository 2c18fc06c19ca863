use std::fmt::Write;

use crate::core::Point;
use crate::error::ChartResult;
use crate::render::{
    FillRule, LineCap, LineJoin, PathCommand, PathPrimitive, PolygonPrimitive, PolylinePrimitive,
    RectPrimitive, Renderer, Shape, Surface,
};

/// Class attribute put on every generated `<svg>` root.
pub const DEFAULT_SVG_CLASS: &str = "peity";

/// SVG markup backend.
///
/// Geometry is written as-is: non-finite coordinates come out as `NaN`
/// attributes, the same way a browser DOM would receive them.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    class_name: String,
    markup: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_class(DEFAULT_SVG_CLASS)
    }

    #[must_use]
    pub fn with_class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            markup: String::new(),
        }
    }

    /// Markup produced by the most recent `render` call.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    #[must_use]
    pub fn into_markup(self) -> String {
        self.markup
    }

    /// Renders `surface` with the default class.
    #[must_use]
    pub fn render_to_string(surface: &Surface) -> String {
        write_svg(surface, DEFAULT_SVG_CLASS)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, surface: &Surface) -> ChartResult<()> {
        self.markup = write_svg(surface, &self.class_name);
        Ok(())
    }
}

fn write_svg(surface: &Surface, class_name: &str) -> String {
    let viewport = surface.viewport();
    let mut output = String::new();
    let _ = write!(
        output,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="{}" height="{}" width="{}">"#,
        escape_attribute(class_name),
        viewport.height,
        viewport.width
    );

    for shape in surface.shapes() {
        match shape {
            Shape::Rect(rect) => write_rect(&mut output, rect),
            Shape::Polygon(polygon) => write_polygon(&mut output, polygon),
            Shape::Polyline(polyline) => write_polyline(&mut output, polyline),
            Shape::Path(path) => write_path(&mut output, path),
        }
    }

    output.push_str("</svg>");
    output
}

fn write_rect(output: &mut String, rect: &RectPrimitive) {
    output.push_str("<rect");
    write_data_value(output, rect.value);
    let _ = write!(
        output,
        r#" fill="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
        rect.fill.to_css(),
        rect.x,
        rect.y,
        rect.width,
        rect.height
    );
}

fn write_polygon(output: &mut String, polygon: &PolygonPrimitive) {
    let _ = write!(
        output,
        r#"<polygon fill="{}" points="{}"/>"#,
        polygon.fill.to_css(),
        format_points(&polygon.points)
    );
}

fn write_polyline(output: &mut String, polyline: &PolylinePrimitive) {
    let _ = write!(
        output,
        r#"<polyline fill="none" points="{}" stroke="{}" stroke-width="{}" stroke-linecap="{}" stroke-linejoin="{}"/>"#,
        format_points(&polyline.points),
        polyline.stroke.to_css(),
        polyline.stroke_width,
        line_cap_name(polyline.line_cap),
        line_join_name(polyline.line_join)
    );
}

fn write_path(output: &mut String, path: &PathPrimitive) {
    output.push_str("<path");
    write_data_value(output, path.value);
    let _ = write!(
        output,
        r#" d="{}" fill="{}""#,
        path_data(path),
        path.fill.to_css()
    );
    if path.fill_rule == FillRule::EvenOdd {
        output.push_str(r#" fill-rule="evenodd""#);
    }
    output.push_str("/>");
}

fn write_data_value(output: &mut String, value: Option<f64>) {
    if let Some(value) = value {
        let _ = write!(output, r#" data-value="{value}""#);
    }
}

/// Serializes path commands into SVG path data (`M x y A r r 0 l s x y ...`).
#[must_use]
pub fn path_data(path: &PathPrimitive) -> String {
    let mut data = String::new();
    for command in &path.commands {
        if !data.is_empty() {
            data.push(' ');
        }
        let _ = match *command {
            PathCommand::MoveTo(Point { x, y }) => write!(data, "M {x} {y}"),
            PathCommand::LineTo(Point { x, y }) => write!(data, "L {x} {y}"),
            PathCommand::ArcTo {
                radius,
                large_arc,
                sweep,
                to,
            } => write!(
                data,
                "A {radius} {radius} 0 {} {} {} {}",
                u8::from(large_arc),
                u8::from(sweep),
                to.x,
                to.y
            ),
            PathCommand::Close => write!(data, "Z"),
        };
    }
    data
}

fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", point.x, point.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn line_cap_name(cap: LineCap) -> &'static str {
    match cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
        LineCap::Square => "square",
    }
}

fn line_join_name(join: LineJoin) -> &'static str {
    match join {
        LineJoin::Miter => "miter",
        LineJoin::Round => "round",
        LineJoin::Bevel => "bevel",
    }
}

fn escape_attribute(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
