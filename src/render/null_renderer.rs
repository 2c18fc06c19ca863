use crate::error::ChartResult;
use crate::render::{Renderer, Shape, Surface};

/// No-op backend used by tests and headless usage.
///
/// It still validates the surface so non-finite geometry (for example from
/// malformed input values) is reported instead of silently painted.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_rect_count: usize,
    pub last_polygon_count: usize,
    pub last_polyline_count: usize,
    pub last_path_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, surface: &Surface) -> ChartResult<()> {
        surface.validate()?;
        *self = Self::default();
        for shape in surface.shapes() {
            match shape {
                Shape::Rect(_) => self.last_rect_count += 1,
                Shape::Polygon(_) => self.last_polygon_count += 1,
                Shape::Polyline(_) => self.last_polyline_count += 1,
                Shape::Path(_) => self.last_path_count += 1,
            }
        }
        Ok(())
    }
}
