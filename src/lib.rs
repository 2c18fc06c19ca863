//! sparkchart: inline charts from delimited value strings.
//!
//! A chart is a raw string such as `"5,3,9,6"` plus a type name (`bar`,
//! `line`, `pie`, `donut`). Drawing parses the string, merges options over
//! the type's defaults, computes scales and appends shapes to a vector
//! [`render::Surface`], which backends turn into SVG markup or raster output.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartHost, ChartOptions, ChartRenderer, Registry, create_chart};
pub use error::{ChartError, ChartResult};
