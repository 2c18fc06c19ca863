use serde::{Deserialize, Serialize};

use crate::core::BarScale;

/// Pixel rectangle of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Projects `values` into bar rectangles.
///
/// Each bar spans its slot minus `padding` (in slot units) on both sides and
/// grows from the zero line (clamped into the value range) towards its value,
/// so signed series straddle the baseline. Bars that would be less than half
/// a pixel tall are drawn one pixel tall instead.
#[must_use]
pub fn project_bars(values: &[f64], scale: BarScale, padding: f64) -> Vec<BarGeometry> {
    let bounds = scale.bounds;
    let mut bars = Vec::with_capacity(values.len());

    for (index, &value) in values.iter().enumerate() {
        let slot = index as f64;
        let x = scale.x(slot + padding);
        let width = scale.x(slot + 1.0 - padding) - x;

        let value_y = scale.y(value);
        let mut top = value_y;
        let mut bottom = value_y;
        if bounds.has_span() {
            if value < 0.0 {
                top = scale.y(bounds.max.min(0.0));
            } else {
                bottom = scale.y(bounds.min.max(0.0));
            }
        }

        let mut height = bottom - top;
        if height.round() == 0.0 {
            height = 1.0;
            // Keep zero-valued bars visible above the axis.
            if bounds.max > 0.0 && bounds.has_span() {
                top -= 1.0;
            }
        }

        bars.push(BarGeometry {
            index,
            value,
            x,
            y: top,
            width,
            height,
        });
    }

    bars
}
