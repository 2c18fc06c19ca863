mod null_renderer;
mod primitives;
mod surface;
mod svg_backend;

pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, FillRule, LineCap, LineJoin, PathCommand, PathCommands, PathPrimitive,
    PolygonPrimitive, PolylinePrimitive, RectPrimitive, Shape,
};
pub use surface::Surface;
pub use svg_backend::{DEFAULT_SVG_CLASS, SvgRenderer, path_data};

pub use crate::core::Point;

use crate::error::ChartResult;

/// Contract implemented by any output backend.
///
/// Backends receive a fully populated `Surface` so drawing code stays
/// isolated from series parsing and chart geometry.
pub trait Renderer {
    fn render(&mut self, surface: &Surface) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
