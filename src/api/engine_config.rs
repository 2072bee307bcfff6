use serde::{Deserialize, Serialize};

use crate::core::windowing::MIN_DECIMATION_POINTS;
use crate::error::{ThumbnailError, ThumbnailResult};
use crate::render::{FigureSize, PlotStyle, RenderSize};

/// Settings of the trace thumbnail pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Group under which cells are listed.
    #[serde(default = "default_root_group")]
    pub root_group: String,
    /// Rank picked at every cell/repetition/sweep level. Negative values
    /// count from the end.
    #[serde(default)]
    pub preference_index: isize,
    #[serde(default = "default_dpi")]
    pub default_dpi: u32,
    #[serde(default = "default_figure_width_in")]
    pub figure_width_in: f64,
    #[serde(default = "default_figure_height_in")]
    pub figure_height_in: f64,
}

impl TraceConfig {
    #[must_use]
    pub fn figure_size(&self) -> FigureSize {
        FigureSize::new(self.figure_width_in, self.figure_height_in)
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            root_group: default_root_group(),
            preference_index: 0,
            default_dpi: default_dpi(),
            figure_width_in: default_figure_width_in(),
            figure_height_in: default_figure_height_in(),
        }
    }
}

/// Settings of the simulation plot pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_simulation_width")]
    pub default_width: u32,
    #[serde(default = "default_simulation_height")]
    pub default_height: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_width: default_simulation_width(),
            default_height: default_simulation_height(),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Every field has a default, so a partial JSON document (or `{}`) is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailConfig {
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    #[serde(default)]
    pub trace: TraceConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Upper bound on samples handed to the renderer per series. `None`
    /// disables decimation.
    #[serde(default = "default_max_points_per_series")]
    pub max_points_per_series: Option<usize>,
    #[serde(default = "PlotStyle::trace")]
    pub trace_style: PlotStyle,
    #[serde(default = "PlotStyle::simulation")]
    pub simulation_style: PlotStyle,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: default_fetch_timeout_secs(),
            trace: TraceConfig::default(),
            simulation: SimulationConfig::default(),
            max_points_per_series: default_max_points_per_series(),
            trace_style: PlotStyle::trace(),
            simulation_style: PlotStyle::simulation(),
        }
    }
}

impl ThumbnailConfig {
    #[must_use]
    pub fn with_fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn with_root_group(mut self, root_group: impl Into<String>) -> Self {
        self.trace.root_group = root_group.into();
        self
    }

    #[must_use]
    pub fn with_preference_index(mut self, preference_index: isize) -> Self {
        self.trace.preference_index = preference_index;
        self
    }

    #[must_use]
    pub fn with_default_dpi(mut self, dpi: u32) -> Self {
        self.trace.default_dpi = dpi;
        self
    }

    #[must_use]
    pub fn with_figure_size(mut self, figure: FigureSize) -> Self {
        self.trace.figure_width_in = figure.width_in;
        self.trace.figure_height_in = figure.height_in;
        self
    }

    #[must_use]
    pub fn with_simulation_size(mut self, width: u32, height: u32) -> Self {
        self.simulation.default_width = width;
        self.simulation.default_height = height;
        self
    }

    #[must_use]
    pub fn with_max_points_per_series(mut self, max_points: Option<usize>) -> Self {
        self.max_points_per_series = max_points;
        self
    }

    #[must_use]
    pub fn with_trace_style(mut self, style: PlotStyle) -> Self {
        self.trace_style = style;
        self
    }

    #[must_use]
    pub fn with_simulation_style(mut self, style: PlotStyle) -> Self {
        self.simulation_style = style;
        self
    }

    pub fn validate(&self) -> ThumbnailResult<()> {
        if self.fetch_timeout_secs == 0 {
            return Err(ThumbnailError::InvalidData(
                "fetch timeout must be > 0 seconds".to_owned(),
            ));
        }
        if self.trace.root_group.trim_matches('/').is_empty() {
            return Err(ThumbnailError::InvalidData(
                "trace root group must not be empty".to_owned(),
            ));
        }
        RenderSize::Dpi(self.trace.default_dpi).viewport(self.trace.figure_size())?;
        RenderSize::Pixels {
            width: self.simulation.default_width,
            height: self.simulation.default_height,
        }
        .validate()?;
        if let Some(max_points) = self.max_points_per_series {
            if max_points < MIN_DECIMATION_POINTS {
                return Err(ThumbnailError::InvalidData(format!(
                    "max points per series must be >= {MIN_DECIMATION_POINTS}, got {max_points}"
                )));
            }
        }
        self.trace_style.validate()?;
        self.simulation_style.validate()
    }
}

fn default_fetch_timeout_secs() -> u64 {
    15
}

fn default_root_group() -> String {
    "data_organization".to_owned()
}

fn default_dpi() -> u32 {
    72
}

fn default_figure_width_in() -> f64 {
    6.4
}

fn default_figure_height_in() -> f64 {
    4.8
}

fn default_simulation_width() -> u32 {
    700
}

fn default_simulation_height() -> u32 {
    500
}

fn default_max_points_per_series() -> Option<usize> {
    Some(4096)
}
