use tracing::trace;

use crate::core::{BarScale, ChartScales, FillSpec, ValueBounds, project_bars};
use crate::error::ChartResult;
use crate::render::{Color, RectPrimitive, Surface};

use super::{ChartOptions, ChartRenderer};

/// Column chart: one rectangle per value, signed values around the zero line.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarRenderer;

impl BarRenderer {
    #[must_use]
    pub fn default_options() -> ChartOptions {
        ChartOptions::new()
            .with_delimiter(',')
            .with_fill(FillSpec::Palette(vec![Color::rgb8(0x4d, 0x89, 0xf9)]))
            .with_size(32, 16)
            .with_padding(0.1)
    }
}

impl ChartRenderer for BarRenderer {
    fn draw(
        &self,
        values: &[f64],
        options: &ChartOptions,
        surface: &mut Surface,
    ) -> ChartResult<ChartScales> {
        let bounds = ValueBounds::resolve(values, options.min, options.max);
        let scale = BarScale::new(surface.width(), surface.height(), values.len(), bounds);

        let fallback = FillSpec::Color(Color::TRANSPARENT);
        let fill = options.fill.as_ref().unwrap_or(&fallback).resolver();

        for bar in project_bars(values, scale, options.padding.unwrap_or(0.0)) {
            let color = fill.resolve(bar.value, bar.index, values);
            surface.append_rect(
                RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, color)
                    .with_value(bar.value),
            );
        }

        trace!(bars = values.len(), min = bounds.min, max = bounds.max, "bar chart drawn");
        Ok(ChartScales::Bar(scale))
    }
}
