use crate::core::{ChartScales, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Surface;

use super::ChartOptions;

/// Draw routine for one chart type.
///
/// The driver calls the methods in order on every draw:
/// `surface_size` to prepare the surface, `prepare_values` on the freshly
/// parsed series, then `draw` with the prepared series. `options` are always
/// the effective (merged) options with the delimiter resolved.
pub trait ChartRenderer: Send + Sync {
    /// Pixel size of the surface for `options`.
    fn surface_size(&self, options: &ChartOptions) -> ChartResult<Viewport> {
        fixed_surface_size(options)
    }

    /// Chart-specific normalization of the parsed series.
    fn prepare_values(&self, values: Vec<f64>, _options: &ChartOptions) -> Vec<f64> {
        values
    }

    /// Appends the chart's shapes to an already cleared `surface` and returns
    /// the scales used.
    fn draw(
        &self,
        values: &[f64],
        options: &ChartOptions,
        surface: &mut Surface,
    ) -> ChartResult<ChartScales>;
}

/// Surface size taken verbatim from `width`/`height`.
pub fn fixed_surface_size(options: &ChartOptions) -> ChartResult<Viewport> {
    match (options.width, options.height) {
        (Some(width), Some(height)) => Ok(Viewport::new(width, height)),
        _ => Err(ChartError::InvalidOptions(
            "chart needs both `width` and `height`".to_owned(),
        )),
    }
}
