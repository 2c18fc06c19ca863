use tracing::trace;

use crate::core::{
    ChartScales, FillSpec, LineScale, ValueBounds, normalize_line_values, project_line,
};
use crate::error::ChartResult;
use crate::render::{Color, PolygonPrimitive, PolylinePrimitive, Surface};

use super::{ChartOptions, ChartRenderer};

/// Line chart with an optional filled area under the series.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineRenderer;

impl LineRenderer {
    #[must_use]
    pub fn default_options() -> ChartOptions {
        ChartOptions::new()
            .with_delimiter(',')
            .with_fill(FillSpec::Color(Color::rgb8(0xc6, 0xd9, 0xfd)))
            .with_size(32, 16)
            .with_stroke(Color::rgb8(0x4d, 0x89, 0xf9))
            .with_stroke_width(1.0)
    }
}

impl ChartRenderer for LineRenderer {
    fn prepare_values(&self, values: Vec<f64>, _options: &ChartOptions) -> Vec<f64> {
        normalize_line_values(values)
    }

    fn draw(
        &self,
        values: &[f64],
        options: &ChartOptions,
        surface: &mut Surface,
    ) -> ChartResult<ChartScales> {
        let stroke_width = options.stroke_width.unwrap_or(0.0);
        let bounds = ValueBounds::resolve(values, options.min, options.max);
        let scale = LineScale::new(
            surface.width(),
            surface.height(),
            stroke_width,
            values.len(),
            bounds,
        );
        let geometry = project_line(values, scale);

        // The area takes the color of the first point; "none" disables it.
        if let Some(fill) = &options.fill {
            let first = values.first().copied().unwrap_or(f64::NAN);
            let color = fill.resolver().resolve(first, 0, values);
            if !color.is_transparent() {
                surface.append_polygon(PolygonPrimitive::new(geometry.fill_polygon, color));
            }
        }

        if stroke_width > 0.0 {
            let stroke = options.stroke.unwrap_or(Color::rgb(0.0, 0.0, 0.0));
            surface.append_polyline(PolylinePrimitive::new(
                geometry.line_points,
                stroke,
                stroke_width,
            ));
        }

        trace!(points = values.len(), shapes = surface.len(), "line chart drawn");
        Ok(ChartScales::Line(scale))
    }
}
