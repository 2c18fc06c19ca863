pub mod bar_series;
pub mod fill;
pub mod line_series;
pub mod pie_series;
pub mod scale;
pub mod series;
pub mod types;

pub use bar_series::{BarGeometry, project_bars};
pub use fill::{FillFn, FillResolver, FillSpec};
pub use line_series::{LineGeometry, normalize_line_values, project_line};
pub use pie_series::{
    PieGeometry, PieHole, PieSlice, RATIO_DELIMITER, SliceOutline, normalize_pie_values, project_pie,
};
pub use scale::{BarScale, ChartScales, LineScale, PieScale, ValueBounds};
pub use series::{
    DEFAULT_DELIMITER, detect_delimiter, parse_series, resolve_delimiter, series_extent,
};
pub use types::{Point, Viewport};
