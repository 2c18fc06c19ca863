//! Public chart API: options, renderers, the type registry and the chart
//! driver that ties them to a host element.

mod bar_renderer;
mod chart;
mod chart_renderer;
mod host;
mod line_renderer;
mod options;
mod pie_renderer;
pub mod registry;

pub use bar_renderer::BarRenderer;
pub use chart::{Chart, create_chart};
pub use chart_renderer::{ChartRenderer, fixed_surface_size};
pub use host::{ChartHost, RecordingHost};
pub use line_renderer::LineRenderer;
pub use options::ChartOptions;
pub use pie_renderer::{DEFAULT_PIE_RADIUS, DONUT_HOLE_RATIO, PieRenderer, slice_commands};
pub use registry::{ChartType, Registry};
