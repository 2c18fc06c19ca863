use serde::{Deserialize, Serialize};

use crate::core::FillSpec;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Chart configuration record.
///
/// Every field is optional: a chart's effective options are its own fields
/// laid over the host-supplied ones, laid over the defaults registered for
/// its type (see [`ChartOptions::merged_over`]). Renderers ignore fields
/// that do not apply to them.
///
/// The JSON form uses camelCase keys (`strokeWidth`, `innerRadius`) and CSS
/// color strings, so option blobs attached to host elements can be loaded
/// directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Bar inset on each side of its slot, in slot units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_radius: Option<f64>,
}

impl ChartOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<FillSpec>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = Some(stroke);
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = Some(inner_radius);
        self
    }

    /// Field-by-field overlay of `self` on top of `base`.
    ///
    /// Set fields win; there is no deep merge, so a set `fill` replaces the
    /// whole base palette.
    #[must_use]
    pub fn merged_over(&self, base: &ChartOptions) -> ChartOptions {
        ChartOptions {
            delimiter: self.delimiter.or(base.delimiter),
            width: self.width.or(base.width),
            height: self.height.or(base.height),
            fill: self.fill.clone().or_else(|| base.fill.clone()),
            min: self.min.or(base.min),
            max: self.max.or(base.max),
            padding: self.padding.or(base.padding),
            stroke: self.stroke.or(base.stroke),
            stroke_width: self.stroke_width.or(base.stroke_width),
            radius: self.radius.or(base.radius),
            inner_radius: self.inner_radius.or(base.inner_radius),
        }
    }

    /// Overwrites the fields set in `update`, keeping the rest.
    pub fn extend_from(&mut self, update: &ChartOptions) {
        *self = update.merged_over(self);
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(fill) = &self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        if let Some(padding) = self.padding {
            if !padding.is_finite() || !(0.0..=0.5).contains(&padding) {
                return Err(ChartError::InvalidOptions(
                    "padding must be finite and in [0, 0.5]".to_owned(),
                ));
            }
        }
        if let Some(stroke_width) = self.stroke_width {
            if !stroke_width.is_finite() || stroke_width < 0.0 {
                return Err(ChartError::InvalidOptions(
                    "stroke width must be finite and >= 0".to_owned(),
                ));
            }
        }
        if let Some(radius) = self.radius {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(ChartError::InvalidOptions(
                    "radius must be finite and > 0".to_owned(),
                ));
            }
        }
        for (name, bound) in [("min", self.min), ("max", self.max)] {
            if bound.is_some_and(f64::is_nan) {
                return Err(ChartError::InvalidOptions(format!(
                    "`{name}` must be a number"
                )));
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidOptions(format!("failed to serialize options: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidOptions(format!("failed to parse options json: {e}")))
    }
}
