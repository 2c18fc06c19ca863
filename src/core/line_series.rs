use serde::{Deserialize, Serialize};

use crate::core::{LineScale, Point};

/// Deterministic geometry for a line/area chart.
///
/// `line_points` follows the mapped data points. `fill_polygon` adds one
/// baseline anchor on each surface edge around them and is closed implicitly
/// (last vertex back to the first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub baseline_y: f64,
    pub line_points: Vec<Point>,
    pub fill_polygon: Vec<Point>,
}

/// Duplicates a single value so it still renders as a segment.
#[must_use]
pub fn normalize_line_values(mut values: Vec<f64>) -> Vec<f64> {
    if values.len() == 1 {
        values.push(values[0]);
    }
    values
}

/// Projects `values` into line and area geometry.
#[must_use]
pub fn project_line(values: &[f64], scale: LineScale) -> LineGeometry {
    let baseline_y = scale.zero();

    let line_points: Vec<Point> = values
        .iter()
        .enumerate()
        .map(|(index, &value)| Point::new(scale.x(index as f64), scale.y(value)))
        .collect();

    let mut fill_polygon = Vec::with_capacity(line_points.len() + 2);
    fill_polygon.push(Point::new(0.0, baseline_y));
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.push(Point::new(scale.width, baseline_y));

    LineGeometry {
        baseline_y,
        line_points,
        fill_polygon,
    }
}
