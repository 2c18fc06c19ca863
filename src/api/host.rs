use crate::render::{Surface, SvgRenderer};

/// Element a chart is attached to.
///
/// On the first draw the chart hands its surface to the host to be placed
/// next to the host element and then hides the host; the host stays in its
/// document tree. Later draws reuse the same surface and report it through
/// `surface_changed`.
pub trait ChartHost {
    /// Places the rendered surface adjacent to the host element.
    fn insert_surface_adjacent(&mut self, surface: &Surface);

    /// Hides the host element.
    fn hide(&mut self);

    /// Called after every redraw following the first one.
    fn surface_changed(&mut self, _surface: &Surface) {}

    /// JSON options attached to the host element, if any.
    fn data_options(&self) -> Option<String> {
        None
    }
}

/// Headless host that keeps the SVG markup of the latest draw.
///
/// Useful for tests and for server-side rendering where the markup is
/// written into a page directly.
#[derive(Debug, Default)]
pub struct RecordingHost {
    data_options: Option<String>,
    hidden: bool,
    insert_count: usize,
    update_count: usize,
    markup: String,
}

impl RecordingHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Host carrying a JSON options blob, like a `data-*` attribute.
    #[must_use]
    pub fn with_data_options(data_options: impl Into<String>) -> Self {
        Self {
            data_options: Some(data_options.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub fn insert_count(&self) -> usize {
        self.insert_count
    }

    #[must_use]
    pub fn update_count(&self) -> usize {
        self.update_count
    }

    /// SVG markup of the latest surface handed to this host.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl ChartHost for RecordingHost {
    fn insert_surface_adjacent(&mut self, surface: &Surface) {
        self.insert_count += 1;
        self.markup = SvgRenderer::render_to_string(surface);
    }

    fn hide(&mut self) {
        self.hidden = true;
    }

    fn surface_changed(&mut self, surface: &Surface) {
        self.update_count += 1;
        self.markup = SvgRenderer::render_to_string(surface);
    }

    fn data_options(&self) -> Option<String> {
        self.data_options.clone()
    }
}
