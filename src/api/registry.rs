use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};

use super::{BarRenderer, ChartOptions, ChartRenderer, LineRenderer, PieRenderer};

pub const BAR: &str = "bar";
pub const LINE: &str = "line";
pub const PIE: &str = "pie";
pub const DONUT: &str = "donut";

/// Registered chart type: default options plus its draw routine.
#[derive(Clone)]
pub struct ChartType {
    defaults: ChartOptions,
    renderer: Arc<dyn ChartRenderer>,
}

impl ChartType {
    #[must_use]
    pub fn defaults(&self) -> &ChartOptions {
        &self.defaults
    }

    #[must_use]
    pub fn renderer(&self) -> &dyn ChartRenderer {
        self.renderer.as_ref()
    }
}

impl fmt::Debug for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartType")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

/// Maps chart type names to their defaults and renderers.
///
/// Registration order is kept. Charts hold the registry behind an `Arc`, so
/// it is configured up front and then shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: IndexMap<String, ChartType>,
}

impl Registry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `bar`, `line`, `pie` and `donut`.
    #[must_use]
    pub fn with_builtin_types() -> Self {
        let mut registry = Self::new();
        let builtins: [(&str, ChartOptions, Arc<dyn ChartRenderer>); 4] = [
            (BAR, BarRenderer::default_options(), Arc::new(BarRenderer)),
            (LINE, LineRenderer::default_options(), Arc::new(LineRenderer)),
            (PIE, PieRenderer::default_options(), Arc::new(PieRenderer::pie())),
            (DONUT, PieRenderer::default_options(), Arc::new(PieRenderer::donut())),
        ];
        for (name, defaults, renderer) in builtins {
            registry.types.insert(name.to_owned(), ChartType { defaults, renderer });
        }
        registry
    }

    /// Adds a chart type. Names are unique.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        defaults: ChartOptions,
        renderer: impl ChartRenderer + 'static,
    ) -> ChartResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ChartError::InvalidOptions(
                "chart type name must not be empty".to_owned(),
            ));
        }
        if self.types.contains_key(&name) {
            return Err(ChartError::DuplicateChartType(name));
        }
        defaults.validate()?;
        self.types.insert(
            name,
            ChartType {
                defaults,
                renderer: Arc::new(renderer),
            },
        );
        Ok(())
    }

    /// Overlays `overrides` on the defaults of an already registered type.
    pub fn update_defaults(&mut self, name: &str, overrides: &ChartOptions) -> ChartResult<()> {
        let chart_type = self
            .types
            .get_mut(name)
            .ok_or_else(|| ChartError::UnknownChartType(name.to_owned()))?;
        let defaults = overrides.merged_over(&chart_type.defaults);
        defaults.validate()?;
        chart_type.defaults = defaults;
        Ok(())
    }

    pub fn get(&self, name: &str) -> ChartResult<&ChartType> {
        self.types
            .get(name)
            .ok_or_else(|| ChartError::UnknownChartType(name.to_owned()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
