use serde::{Deserialize, Serialize};

use crate::core::{PieScale, Point, Viewport};

/// Delimiter that turns a two-value pie series into a ratio.
pub const RATIO_DELIMITER: char = '/';

/// Clamps negative (and non-numeric) values to zero and applies the ratio
/// reading of `numerator/denominator` input.
#[must_use]
pub fn normalize_pie_values(values: Vec<f64>, delimiter: char) -> Vec<f64> {
    let values: Vec<f64> = values
        .into_iter()
        .map(|value| if value > 0.0 { value } else { 0.0 })
        .collect();

    if delimiter == RATIO_DELIMITER && values.len() >= 2 {
        let (numerator, denominator) = (values[0], values[1]);
        return vec![numerator, (denominator - numerator).max(0.0)];
    }
    values
}

/// Outline of one slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SliceOutline {
    /// The only non-zero slice: a full disc (or ring with an inner radius).
    FullCircle,
    /// A wedge between two cumulative positions on the circle.
    Wedge {
        outer_start: Point,
        outer_end: Point,
        inner_start: Option<Point>,
        inner_end: Option<Point>,
        large_arc: bool,
    },
}

/// Hole cut out of the pie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PieHole {
    None,
    /// Inner radius in pixels.
    Fixed(f64),
    /// Inner radius as a share of the outer radius.
    Ratio(f64),
}

impl PieHole {
    #[must_use]
    pub fn inner_radius(self, radius: f64) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Fixed(inner) => Some(inner),
            Self::Ratio(ratio) => Some(radius * ratio),
        }
    }
}

/// One visible pie slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub index: usize,
    pub value: f64,
    pub portion: f64,
    pub outline: SliceOutline,
}

/// Deterministic pie/donut geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieGeometry {
    pub scale: PieScale,
    pub radius: f64,
    pub inner_radius: Option<f64>,
    /// Values the slices were computed from; `[0, 1]` when the input summed
    /// to zero.
    pub values: Vec<f64>,
    /// The input summed to zero and was replaced by the placeholder series.
    pub empty: bool,
    pub slices: Vec<PieSlice>,
}

/// Lays out slices for `values` (already normalized) inside `viewport`.
///
/// The outer radius is half the shorter viewport side; `hole` is resolved
/// against it. An all-zero series is replaced by `[0, 1]` so the chart shows one full
/// circle in the first slice color.
#[must_use]
pub fn project_pie(values: &[f64], viewport: Viewport, hole: PieHole) -> PieGeometry {
    let mut values = values.to_vec();
    let mut sum: f64 = values.iter().sum();
    let empty = sum == 0.0;
    if empty {
        values = vec![0.0, 1.0];
        sum = 1.0;
    }

    let center = Point::new(viewport.width_px() / 2.0, viewport.height_px() / 2.0);
    let radius = center.x.min(center.y);
    let inner_radius = hole.inner_radius(radius);
    let scale = PieScale::new(sum, center);

    let mut slices = Vec::with_capacity(values.len());
    let mut cumulative = 0.0;
    for (index, &value) in values.iter().enumerate() {
        let portion = value / sum;
        if portion == 0.0 {
            continue;
        }

        let outline = if portion == 1.0 {
            SliceOutline::FullCircle
        } else {
            let end = cumulative + value;
            let outline = SliceOutline::Wedge {
                outer_start: scale.point(cumulative, radius),
                outer_end: scale.point(end, radius),
                inner_start: inner_radius.map(|inner| scale.point(cumulative, inner)),
                inner_end: inner_radius.map(|inner| scale.point(end, inner)),
                large_arc: portion > 0.5,
            };
            cumulative = end;
            outline
        };

        slices.push(PieSlice {
            index,
            value,
            portion,
            outline,
        });
    }

    PieGeometry {
        scale,
        radius,
        inner_radius,
        values,
        empty,
        slices,
    }
}
