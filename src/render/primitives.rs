use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as CSS text (`#rrggbb`, `#rrggbbaa` or `none`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
];

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, `none`/`transparent` and a
    /// handful of CSS color names.
    pub fn parse(text: &str) -> ChartResult<Self> {
        let text = text.trim();
        let lowered = text.to_ascii_lowercase();
        if lowered == "none" || lowered == "transparent" {
            return Ok(Self::TRANSPARENT);
        }
        if let Some((_, (r, g, b))) = NAMED_COLORS.iter().find(|(name, _)| *name == lowered) {
            return Ok(Self::rgb8(*r, *g, *b));
        }

        let invalid = || ChartError::InvalidOptions(format!("unsupported color `{text}`"));
        let hex = lowered.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |start: usize, len: usize| -> ChartResult<u8> {
            let digits = &hex[start..start + len];
            let value = u8::from_str_radix(digits, 16).map_err(|_| invalid())?;
            Ok(if len == 1 { value * 17 } else { value })
        };

        match hex.len() {
            3 => Ok(Self::rgb8(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
            6 => Ok(Self::rgb8(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            8 => {
                let base = Self::rgb8(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?);
                Ok(Self {
                    alpha: f64::from(channel(6, 2)?) / 255.0,
                    ..base
                })
            }
            _ => Err(invalid()),
        }
    }

    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.alpha <= 0.0
    }

    /// CSS representation used by markup backends.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.is_transparent() {
            return "none".to_owned();
        }
        let to_byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b) = (to_byte(self.red), to_byte(self.green), to_byte(self.blue));
        if self.alpha >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{:02x}", to_byte(self.alpha))
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Filled axis-aligned rectangle; one per bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub value: Option<f64>,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            value: None,
        }
    }

    #[must_use]
    pub const fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ChartError::InvalidData(
                "rect size must be finite".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Closed filled polygon; the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub points: Vec<Point>,
    pub fill: Color,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(points: Vec<Point>, fill: Color) -> Self {
        Self { points, fill }
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_points(&self.points, "polygon")?;
        self.fill.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Open stroked polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylinePrimitive {
    pub points: Vec<Point>,
    pub stroke: Color,
    pub stroke_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl PolylinePrimitive {
    #[must_use]
    pub fn new(points: Vec<Point>, stroke: Color, stroke_width: f64) -> Self {
        Self {
            points,
            stroke,
            stroke_width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Bevel,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_points(&self.points, "polyline")?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "polyline stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke.validate()
    }
}

/// One command of a path outline, in absolute pixel coordinates.
///
/// `ArcTo` follows the SVG endpoint convention for circular arcs:
/// `large_arc` picks the longer of the two candidate arcs and `sweep`
/// selects the clockwise (on screen) direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

pub type PathCommands = SmallVec<[PathCommand; 8]>;

/// Filled outline built from move/line/arc commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub commands: PathCommands,
    pub fill: Color,
    pub fill_rule: FillRule,
    pub value: Option<f64>,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(commands: PathCommands, fill: Color) -> Self {
        Self {
            commands,
            fill,
            fill_rule: FillRule::NonZero,
            value: None,
        }
    }

    #[must_use]
    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = fill_rule;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Number of arc commands in the outline.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::ArcTo { .. }))
            .count()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !matches!(self.commands.first(), Some(PathCommand::MoveTo(_))) {
            return Err(ChartError::InvalidData(
                "path must start with a move command".to_owned(),
            ));
        }
        for command in &self.commands {
            let valid = match *command {
                PathCommand::MoveTo(point) | PathCommand::LineTo(point) => point.is_finite(),
                PathCommand::ArcTo { radius, to, .. } => {
                    radius.is_finite() && radius > 0.0 && to.is_finite()
                }
                PathCommand::Close => true,
            };
            if !valid {
                return Err(ChartError::InvalidData(
                    "path coordinates must be finite and arc radii > 0".to_owned(),
                ));
            }
        }
        self.fill.validate()
    }
}

/// Any shape a surface can hold, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rect(RectPrimitive),
    Polygon(PolygonPrimitive),
    Polyline(PolylinePrimitive),
    Path(PathPrimitive),
}

impl Shape {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Rect(rect) => rect.validate(),
            Self::Polygon(polygon) => polygon.validate(),
            Self::Polyline(polyline) => polyline.validate(),
            Self::Path(path) => path.validate(),
        }
    }

    #[must_use]
    pub fn as_rect(&self) -> Option<&RectPrimitive> {
        match self {
            Self::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_polygon(&self) -> Option<&PolygonPrimitive> {
        match self {
            Self::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_polyline(&self) -> Option<&PolylinePrimitive> {
        match self {
            Self::Polyline(polyline) => Some(polyline),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_path(&self) -> Option<&PathPrimitive> {
        match self {
            Self::Path(path) => Some(path),
            _ => None,
        }
    }
}

fn validate_points(points: &[Point], kind: &str) -> ChartResult<()> {
    if points.len() < 2 {
        return Err(ChartError::InvalidData(format!(
            "{kind} needs at least two points"
        )));
    }
    if points.iter().any(|point| !point.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "{kind} coordinates must be finite"
        )));
    }
    Ok(())
}
