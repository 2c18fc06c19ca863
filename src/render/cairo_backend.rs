use cairo::{Context, Format, ImageSurface};

use crate::core::Point;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, FillRule, LineCap, LineJoin, PathCommand, PathPrimitive, Renderer, Shape, Surface,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub polygons_drawn: usize,
    pub polylines_drawn: usize,
    pub paths_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, surface: &Surface)
    -> ChartResult<()>;
}

/// Raster backend painting chart surfaces with Cairo.
///
/// Offscreen rendering goes through `Renderer::render` into an owned image
/// surface sized like the chart; `CairoContextRenderer` paints into a
/// caller-provided context instead.
#[derive(Debug)]
pub struct CairoRenderer {
    image: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            image,
            clear_color: Color::TRANSPARENT,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn image(&self) -> &ImageSurface {
        &self.image
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, surface: &Surface) -> ChartResult<()> {
        surface.validate()?;

        context.set_operator(cairo::Operator::Source);
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.set_operator(cairo::Operator::Over);

        let mut stats = CairoRenderStats::default();
        for shape in surface.shapes() {
            context.new_path();
            match shape {
                Shape::Rect(rect) => {
                    context.rectangle(rect.x, rect.y, rect.width, rect.height);
                    fill(context, rect.fill, FillRule::NonZero)?;
                    stats.rects_drawn += 1;
                }
                Shape::Polygon(polygon) => {
                    trace_points(context, &polygon.points);
                    context.close_path();
                    fill(context, polygon.fill, FillRule::NonZero)?;
                    stats.polygons_drawn += 1;
                }
                Shape::Polyline(polyline) => {
                    trace_points(context, &polyline.points);
                    apply_color(context, polyline.stroke);
                    context.set_line_width(polyline.stroke_width);
                    context.set_line_cap(match polyline.line_cap {
                        LineCap::Butt => cairo::LineCap::Butt,
                        LineCap::Round => cairo::LineCap::Round,
                        LineCap::Square => cairo::LineCap::Square,
                    });
                    context.set_line_join(match polyline.line_join {
                        LineJoin::Miter => cairo::LineJoin::Miter,
                        LineJoin::Round => cairo::LineJoin::Round,
                        LineJoin::Bevel => cairo::LineJoin::Bevel,
                    });
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
                    stats.polylines_drawn += 1;
                }
                Shape::Path(path) => {
                    trace_path(context, path);
                    fill(context, path.fill, path.fill_rule)?;
                    stats.paths_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, surface: &Surface) -> ChartResult<()> {
        let context = Context::new(&self.image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, surface)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        surface: &Surface,
    ) -> ChartResult<()> {
        self.render_with_context(context, surface)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn fill(context: &Context, color: Color, rule: FillRule) -> ChartResult<()> {
    context.set_fill_rule(match rule {
        FillRule::NonZero => cairo::FillRule::Winding,
        FillRule::EvenOdd => cairo::FillRule::EvenOdd,
    });
    apply_color(context, color);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill shape", err))
}

fn trace_points(context: &Context, points: &[Point]) {
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        context.move_to(first.x, first.y);
    }
    for point in iter {
        context.line_to(point.x, point.y);
    }
}

fn trace_path(context: &Context, path: &PathPrimitive) {
    let mut cursor = Point::new(0.0, 0.0);
    let mut subpath_start = cursor;
    for command in &path.commands {
        match *command {
            PathCommand::MoveTo(point) => {
                context.move_to(point.x, point.y);
                cursor = point;
                subpath_start = point;
            }
            PathCommand::LineTo(point) => {
                context.line_to(point.x, point.y);
                cursor = point;
            }
            PathCommand::ArcTo {
                radius,
                large_arc,
                sweep,
                to,
            } => {
                let (center, radius) = arc_center(cursor, to, radius, large_arc, sweep);
                let start = (cursor.y - center.y).atan2(cursor.x - center.x);
                let end = (to.y - center.y).atan2(to.x - center.x);
                if sweep {
                    context.arc(center.x, center.y, radius, start, end);
                } else {
                    context.arc_negative(center.x, center.y, radius, start, end);
                }
                cursor = to;
            }
            PathCommand::Close => {
                context.close_path();
                cursor = subpath_start;
            }
        }
    }
}

/// Center of the circular arc from `from` to `to`, using the SVG endpoint
/// parameterization. The radius grows to half the chord when too small.
fn arc_center(from: Point, to: Point, radius: f64, large_arc: bool, sweep: bool) -> (Point, f64) {
    let half_dx = (from.x - to.x) / 2.0;
    let half_dy = (from.y - to.y) / 2.0;
    let half_chord_sq = half_dx * half_dx + half_dy * half_dy;
    let radius = radius.max(half_chord_sq.sqrt());
    if half_chord_sq == 0.0 {
        return (from, radius);
    }

    let sign = if large_arc == sweep { -1.0 } else { 1.0 };
    let coef = sign * ((radius * radius - half_chord_sq).max(0.0) / half_chord_sq).sqrt();
    let center = Point::new(
        coef * half_dy + (from.x + to.x) / 2.0,
        -coef * half_dx + (from.y + to.y) / 2.0,
    );
    (center, radius)
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
