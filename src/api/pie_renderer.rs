use smallvec::smallvec;
use tracing::trace;

use crate::core::{
    ChartScales, DEFAULT_DELIMITER, FillSpec, PieGeometry, PieHole, PieSlice, Point, SliceOutline,
    Viewport, normalize_pie_values, project_pie,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FillRule, PathCommand, PathCommands, PathPrimitive, Surface};

use super::{ChartOptions, ChartRenderer};

pub const DEFAULT_PIE_RADIUS: f64 = 8.0;

/// Share of the outer radius used for a donut hole when none is configured.
pub const DONUT_HOLE_RATIO: f64 = 0.5;

/// Pie chart; the donut variant cuts a hole of `DONUT_HOLE_RATIO` by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieRenderer {
    donut: bool,
}

impl PieRenderer {
    #[must_use]
    pub const fn pie() -> Self {
        Self { donut: false }
    }

    #[must_use]
    pub const fn donut() -> Self {
        Self { donut: true }
    }

    #[must_use]
    pub fn is_donut(&self) -> bool {
        self.donut
    }

    /// Shared by pie and donut. No delimiter: it is detected from the input.
    #[must_use]
    pub fn default_options() -> ChartOptions {
        ChartOptions::new()
            .with_fill(FillSpec::Palette(vec![
                Color::rgb8(0xff, 0x99, 0x00),
                Color::rgb8(0xff, 0xf4, 0xdd),
                Color::rgb8(0xff, 0xc6, 0x6d),
            ]))
            .with_radius(DEFAULT_PIE_RADIUS)
    }

    fn hole(&self, options: &ChartOptions) -> PieHole {
        match options.inner_radius {
            Some(inner) if inner > 0.0 => PieHole::Fixed(inner),
            _ if self.donut => PieHole::Ratio(DONUT_HOLE_RATIO),
            _ => PieHole::None,
        }
    }
}

impl ChartRenderer for PieRenderer {
    fn surface_size(&self, options: &ChartOptions) -> ChartResult<Viewport> {
        let diameter = (options.radius.unwrap_or(DEFAULT_PIE_RADIUS) * 2.0).round();
        if !(0.0..=f64::from(u32::MAX)).contains(&diameter) {
            return Err(ChartError::InvalidOptions(format!(
                "radius {} does not fit a surface",
                diameter / 2.0
            )));
        }
        let diameter = diameter as u32;
        Ok(Viewport::new(
            options.width.unwrap_or(diameter),
            options.height.unwrap_or(diameter),
        ))
    }

    fn prepare_values(&self, values: Vec<f64>, options: &ChartOptions) -> Vec<f64> {
        normalize_pie_values(values, options.delimiter.unwrap_or(DEFAULT_DELIMITER))
    }

    fn draw(
        &self,
        values: &[f64],
        options: &ChartOptions,
        surface: &mut Surface,
    ) -> ChartResult<ChartScales> {
        let geometry = project_pie(values, surface.viewport(), self.hole(options));

        let fallback = FillSpec::Color(Color::TRANSPARENT);
        let fill = options.fill.as_ref().unwrap_or(&fallback).resolver();

        for slice in &geometry.slices {
            // The empty-state circle takes the first fill color.
            let fill_index = if geometry.empty { 0 } else { slice.index };
            let color = fill.resolve(slice.value, fill_index, &geometry.values);
            let mut path = PathPrimitive::new(slice_commands(&geometry, slice), color)
                .with_value(slice.value);
            if geometry.inner_radius.is_some() {
                path = path.with_fill_rule(FillRule::EvenOdd);
            }
            surface.append_path(path);
        }

        trace!(
            slices = geometry.slices.len(),
            radius = geometry.radius,
            inner_radius = ?geometry.inner_radius,
            "pie chart drawn"
        );
        Ok(ChartScales::Pie(geometry.scale))
    }
}

/// Outline commands for one slice.
///
/// A single arc cannot span 360 degrees, so a full circle is two mirrored
/// semicircles; a donut adds an inner pair wound the other way for the hole.
#[must_use]
pub fn slice_commands(geometry: &PieGeometry, slice: &PieSlice) -> PathCommands {
    let center = geometry.scale.center;
    let radius = geometry.radius;

    match slice.outline {
        SliceOutline::FullCircle => {
            let mut commands = circle_commands(center, radius, true);
            if let Some(inner) = geometry.inner_radius {
                commands.extend(circle_commands(center, inner, false));
            }
            commands
        }
        SliceOutline::Wedge {
            outer_start,
            outer_end,
            inner_start,
            inner_end,
            large_arc,
        } => {
            let mut commands: PathCommands = smallvec![
                PathCommand::MoveTo(outer_start),
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep: true,
                    to: outer_end,
                },
            ];
            match (geometry.inner_radius, inner_start, inner_end) {
                (Some(inner), Some(inner_start), Some(inner_end)) => {
                    commands.push(PathCommand::LineTo(inner_end));
                    commands.push(PathCommand::ArcTo {
                        radius: inner,
                        large_arc,
                        sweep: false,
                        to: inner_start,
                    });
                }
                _ => commands.push(PathCommand::LineTo(center)),
            }
            commands.push(PathCommand::Close);
            commands
        }
    }
}

fn circle_commands(center: Point, radius: f64, clockwise: bool) -> PathCommands {
    let top = Point::new(center.x, center.y - radius);
    let bottom = Point::new(center.x, center.y + radius);
    smallvec![
        PathCommand::MoveTo(top),
        PathCommand::ArcTo {
            radius,
            large_arc: false,
            sweep: clockwise,
            to: bottom,
        },
        PathCommand::ArcTo {
            radius,
            large_arc: false,
            sweep: clockwise,
            to: top,
        },
        PathCommand::Close,
    ]
}
