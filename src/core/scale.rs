//! Index/value to pixel mappings.
//!
//! Every scale is a plain value computed from the current series, options and
//! surface size. Renderers build fresh scales on each draw and hand them back
//! to the caller; nothing here is cached between renders.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::core::series::series_extent;

/// Value range a chart maps onto its vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueBounds {
    pub min: f64,
    pub max: f64,
}

impl ValueBounds {
    /// Series extent widened by the configured bounds.
    ///
    /// `min_hint`/`max_hint` can only extend the range, never shrink it.
    #[must_use]
    pub fn resolve(values: &[f64], min_hint: Option<f64>, max_hint: Option<f64>) -> Self {
        let (series_min, series_max) = series_extent(values);
        let min = match min_hint {
            Some(hint) if series_min.is_nan() || hint.is_nan() => f64::NAN,
            Some(hint) => series_min.min(hint),
            None => series_min,
        };
        let max = match max_hint {
            Some(hint) if series_max.is_nan() || hint.is_nan() => f64::NAN,
            Some(hint) => series_max.max(hint),
            None => series_max,
        };
        Self { min, max }
    }

    #[must_use]
    pub fn diff(self) -> f64 {
        self.max - self.min
    }

    /// `true` when the range has a usable, non-zero span.
    ///
    /// A `NaN` span counts as no span.
    #[must_use]
    pub fn has_span(self) -> bool {
        let diff = self.diff();
        diff != 0.0 && !diff.is_nan()
    }
}

/// Bar chart scale: `len` equal slots across the width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarScale {
    pub width: f64,
    pub height: f64,
    pub len: usize,
    pub bounds: ValueBounds,
}

impl BarScale {
    #[must_use]
    pub fn new(width: f64, height: f64, len: usize, bounds: ValueBounds) -> Self {
        Self {
            width,
            height,
            len,
            bounds,
        }
    }

    /// Horizontal pixel of a (possibly fractional) slot position.
    #[must_use]
    pub fn x(&self, position: f64) -> f64 {
        position * self.width / self.len as f64
    }

    /// Vertical pixel of `value`; a flat range maps every value one pixel
    /// above the bottom edge.
    #[must_use]
    pub fn y(&self, value: f64) -> f64 {
        let offset = if self.bounds.has_span() {
            (value - self.bounds.min) / self.bounds.diff() * self.height
        } else {
            1.0
        };
        self.height - offset
    }
}

/// Line/area scale: first and last points land on the surface edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineScale {
    pub width: f64,
    /// Surface height minus the stroke width.
    pub plot_height: f64,
    pub stroke_width: f64,
    pub len: usize,
    pub bounds: ValueBounds,
}

impl LineScale {
    #[must_use]
    pub fn new(
        width: f64,
        surface_height: f64,
        stroke_width: f64,
        len: usize,
        bounds: ValueBounds,
    ) -> Self {
        Self {
            width,
            plot_height: surface_height - stroke_width,
            stroke_width,
            len,
            bounds,
        }
    }

    #[must_use]
    pub fn x(&self, index: f64) -> f64 {
        index * (self.width / (self.len as f64 - 1.0))
    }

    /// Vertical pixel of `value`, inset by half the stroke width so the
    /// stroke stays inside the surface.
    #[must_use]
    pub fn y(&self, value: f64) -> f64 {
        let mut y = self.plot_height;
        if self.bounds.has_span() {
            y -= (value - self.bounds.min) / self.bounds.diff() * self.plot_height;
        }
        y + self.stroke_width / 2.0
    }

    /// Baseline the area fill closes against.
    #[must_use]
    pub fn zero(&self) -> f64 {
        self.y(self.bounds.min.max(0.0))
    }
}

/// Pie scale: cumulative value to a point on a circle, starting at 12 o'clock
/// and sweeping clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieScale {
    pub sum: f64,
    pub center: Point,
}

impl PieScale {
    #[must_use]
    pub fn new(sum: f64, center: Point) -> Self {
        Self { sum, center }
    }

    #[must_use]
    pub fn angle(&self, value: f64) -> f64 {
        value / self.sum * TAU - FRAC_PI_2
    }

    #[must_use]
    pub fn point(&self, value: f64, radius: f64) -> Point {
        let radians = self.angle(value);
        Point::new(
            radius * radians.cos() + self.center.x,
            radius * radians.sin() + self.center.y,
        )
    }
}

/// Scales used by the most recent render of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartScales {
    Bar(BarScale),
    Line(LineScale),
    Pie(PieScale),
    /// Renderer exposes no scales.
    None,
}
