use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{PathPrimitive, PolygonPrimitive, PolylinePrimitive, RectPrimitive, Shape};

/// Backend-agnostic drawing target for one chart.
///
/// A surface has a fixed pixel size and an ordered shape list. Charts create
/// it once and then `prepare` it on every draw, which resizes it and drops
/// the previous shapes without allocating a new surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    viewport: Viewport,
    shapes: Vec<Shape>,
}

impl Surface {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            shapes: Vec::new(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.viewport.width_px()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.viewport.height_px()
    }

    /// Resizes the surface and removes every shape.
    pub fn prepare(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.shapes.clear();
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn append_rect(&mut self, rect: RectPrimitive) {
        self.shapes.push(Shape::Rect(rect));
    }

    pub fn append_polygon(&mut self, polygon: PolygonPrimitive) {
        self.shapes.push(Shape::Polygon(polygon));
    }

    pub fn append_polyline(&mut self, polyline: PolylinePrimitive) {
        self.shapes.push(Shape::Polyline(polyline));
    }

    pub fn append_path(&mut self, path: PathPrimitive) {
        self.shapes.push(Shape::Path(path));
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.shapes.iter().filter_map(Shape::as_rect)
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathPrimitive> {
        self.shapes.iter().filter_map(Shape::as_path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for shape in &self.shapes {
            shape.validate()?;
        }

        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize surface: {e}")))
    }
}
