use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Callback computing a color from `(value, index, series)`.
pub type FillFn = dyn Fn(f64, usize, &[f64]) -> Color + Send + Sync;

/// Configured fill for a chart's shapes.
#[derive(Clone)]
pub enum FillSpec {
    /// Same color for every point.
    Color(Color),
    /// Colors cycled by point position: `palette[index % len]`.
    Palette(Vec<Color>),
    /// Arbitrary per-point callback.
    Function(Arc<FillFn>),
}

impl FillSpec {
    #[must_use]
    pub fn palette(colors: impl IntoIterator<Item = Color>) -> Self {
        Self::Palette(colors.into_iter().collect())
    }

    #[must_use]
    pub fn function(fill: impl Fn(f64, usize, &[f64]) -> Color + Send + Sync + 'static) -> Self {
        Self::Function(Arc::new(fill))
    }

    /// Parses every entry as CSS color text.
    pub fn from_css<S: AsRef<str>>(colors: &[S]) -> ChartResult<Self> {
        let palette = colors
            .iter()
            .map(|color| Color::parse(color.as_ref()))
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self::Palette(palette))
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Color(color) => color.validate(),
            Self::Palette(palette) if palette.is_empty() => Err(ChartError::InvalidOptions(
                "fill palette must not be empty".to_owned(),
            )),
            Self::Palette(palette) => palette.iter().try_for_each(|color| color.validate()),
            Self::Function(_) => Ok(()),
        }
    }

    /// Builds the per-point color function for one draw pass.
    #[must_use]
    pub fn resolver(&self) -> FillResolver<'_> {
        FillResolver { spec: self }
    }
}

impl fmt::Debug for FillSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => f.debug_tuple("Color").field(color).finish(),
            Self::Palette(palette) => f.debug_tuple("Palette").field(palette).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl PartialEq for FillSpec {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Color(a), Self::Color(b)) => a == b,
            (Self::Palette(a), Self::Palette(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Color> for FillSpec {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<Vec<Color>> for FillSpec {
    fn from(palette: Vec<Color>) -> Self {
        Self::Palette(palette)
    }
}

impl Serialize for FillSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Color(color) => color.serialize(serializer),
            Self::Palette(palette) => palette.serialize(serializer),
            Self::Function(_) => Err(serde::ser::Error::custom(
                "function fills cannot be serialized",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for FillSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FillRepr {
            One(Color),
            Many(Vec<Color>),
        }

        Ok(match FillRepr::deserialize(deserializer)? {
            FillRepr::One(color) => Self::Color(color),
            FillRepr::Many(palette) => Self::Palette(palette),
        })
    }
}

/// Per-point color function closed over the fill of the current draw.
#[derive(Debug, Clone, Copy)]
pub struct FillResolver<'a> {
    spec: &'a FillSpec,
}

impl FillResolver<'_> {
    #[must_use]
    pub fn resolve(&self, value: f64, index: usize, series: &[f64]) -> Color {
        match self.spec {
            FillSpec::Color(color) => *color,
            FillSpec::Palette(palette) => index
                .checked_rem(palette.len())
                .map_or(Color::TRANSPARENT, |slot| palette[slot]),
            FillSpec::Function(fill) => fill(value, index, series),
        }
    }
}
