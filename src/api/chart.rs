use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{ChartScales, DEFAULT_DELIMITER, parse_series, resolve_delimiter};
use crate::error::{ChartError, ChartResult};
use crate::render::Surface;

use super::{ChartHost, ChartOptions, ChartType, Registry};

/// One chart bound to a host element.
///
/// The chart owns its raw series text, its own options and (after the first
/// successful draw) its surface. Every `draw` re-parses the raw text and
/// recomputes all geometry; nothing is carried over from the previous render
/// except surface allocations. Shapes are drawn into a spare surface that is
/// swapped in only once the renderer succeeds.
pub struct Chart<H: ChartHost> {
    host: H,
    registry: Arc<Registry>,
    chart_type: String,
    raw: String,
    options: ChartOptions,
    surface: Option<Surface>,
    spare: Option<Surface>,
    last_scales: Option<ChartScales>,
}

impl<H: ChartHost> Chart<H> {
    #[must_use]
    pub fn new(
        host: H,
        registry: Arc<Registry>,
        chart_type: impl Into<String>,
        raw: impl Into<String>,
        options: ChartOptions,
    ) -> Self {
        Self {
            host,
            registry,
            chart_type: chart_type.into(),
            raw: raw.into(),
            options,
            surface: None,
            spare: None,
            last_scales: None,
        }
    }

    #[must_use]
    pub fn chart_type(&self) -> &str {
        &self.chart_type
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Options set on this chart, before merging with host and type defaults.
    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// Surface of the latest draw; `None` before the first one.
    #[must_use]
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Scales of the latest successful draw.
    #[must_use]
    pub fn last_scales(&self) -> Option<ChartScales> {
        self.last_scales
    }

    /// Replaces the raw series text. Call `draw` to render it.
    pub fn set_raw(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    /// Switches the chart type (when given) and overlays `options` on the
    /// chart's own options.
    pub fn update(&mut self, chart_type: Option<&str>, options: &ChartOptions) {
        if let Some(chart_type) = chart_type {
            self.chart_type = chart_type.to_owned();
        }
        self.options.extend_from(options);
    }

    /// Effective options: chart options over host options over type defaults,
    /// with the delimiter resolved against the current raw text.
    pub fn effective_options(&self) -> ChartResult<ChartOptions> {
        let chart_type = self.lookup()?;
        Ok(self.merge_options(chart_type))
    }

    /// Parses the raw text with the active delimiter and applies the chart
    /// type's series normalization.
    pub fn values(&self) -> ChartResult<Vec<f64>> {
        let chart_type = self.lookup()?;
        let options = self.merge_options(chart_type);
        Ok(self.prepared_values(chart_type, &options))
    }

    /// Renders the chart into its surface and publishes it to the host.
    ///
    /// Any failure (unknown type, invalid options, renderer error) fails this
    /// call only: the surface from the previous draw and the host are left
    /// untouched, and the host is attached on the first draw that succeeds.
    pub fn draw(&mut self) -> ChartResult<ChartScales> {
        let chart_type = self.lookup()?.clone();
        let options = self.merge_options(&chart_type);
        options.validate()?;

        let renderer = chart_type.renderer();
        let viewport = renderer.surface_size(&options)?;
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let values = self.prepared_values(&chart_type, &options);
        debug!(
            chart_type = %self.chart_type,
            values = values.len(),
            width = viewport.width,
            height = viewport.height,
            "draw chart"
        );

        let mut staged = self
            .spare
            .take()
            .unwrap_or_else(|| Surface::new(viewport));
        staged.prepare(viewport);
        let scales = match renderer.draw(&values, &options, &mut staged) {
            Ok(scales) => scales,
            Err(err) => {
                self.spare = Some(staged);
                return Err(err);
            }
        };

        let first_draw = self.surface.is_none();
        self.spare = self.surface.replace(staged);
        if let Some(surface) = &self.surface {
            if first_draw {
                self.host.insert_surface_adjacent(surface);
                self.host.hide();
            } else {
                self.host.surface_changed(surface);
            }
        }

        self.last_scales = Some(scales);
        Ok(scales)
    }

    fn lookup(&self) -> ChartResult<&ChartType> {
        self.registry.get(&self.chart_type)
    }

    fn merge_options(&self, chart_type: &ChartType) -> ChartOptions {
        let host_options = self
            .host
            .data_options()
            .and_then(|json| match ChartOptions::from_json_str(&json) {
                Ok(options) => Some(options),
                Err(err) => {
                    warn!(error = %err, "ignoring malformed host chart options");
                    None
                }
            })
            .unwrap_or_default();

        let mut options = self
            .options
            .merged_over(&host_options.merged_over(chart_type.defaults()));
        options.delimiter = Some(resolve_delimiter(&self.raw, options.delimiter));
        options
    }

    fn prepared_values(&self, chart_type: &ChartType, options: &ChartOptions) -> Vec<f64> {
        let delimiter = options.delimiter.unwrap_or(DEFAULT_DELIMITER);
        let values = parse_series(&self.raw, delimiter);
        chart_type.renderer().prepare_values(values, options)
    }
}

/// Creates a chart backed by the built-in chart types.
#[must_use]
pub fn create_chart<H: ChartHost>(
    host: H,
    chart_type: &str,
    raw: impl Into<String>,
    options: ChartOptions,
) -> Chart<H> {
    Chart::new(
        host,
        Arc::new(Registry::with_builtin_types()),
        chart_type,
        raw,
        options,
    )
}
