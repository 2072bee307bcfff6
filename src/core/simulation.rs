use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::series::{PlotSeries, PlotSeriesBundle, SeriesKind};
use crate::error::{ThumbnailError, ThumbnailResult};

/// Which plot family a simulation thumbnail shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotTarget {
    Stimulus,
    Simulation,
}

impl fmt::Display for PlotTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stimulus => "stimulus",
            Self::Simulation => "simulation",
        })
    }
}

impl FromStr for PlotTarget {
    type Err = ThumbnailError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "stimulus" => Ok(Self::Stimulus),
            "simulation" => Ok(Self::Simulation),
            other => Err(ThumbnailError::InvalidTarget(format!(
                "`{other}`, expected `stimulus` or `simulation`"
            ))),
        }
    }
}

/// One plot trace as stored in a simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub plot_type: String,
    pub name: String,
}

/// Plot traces of one stimulus configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StimulusPlotData {
    pub id: String,
    pub data: Vec<PlotData>,
}

/// Single-neuron (optionally synaptome) simulation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleNeuronModelSimulationConfig {
    pub celsius: f64,
    pub hypamp: f64,
    pub vinit: f64,
    pub inject_to: String,
    pub record_from: Vec<String>,
    pub stimulus: Map<String, Value>,
    #[serde(default)]
    pub synaptome: Option<Map<String, Value>>,
}

/// Content of a simulation configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfigurationFile {
    pub stimulus: Vec<StimulusPlotData>,
    pub simulation: Vec<PlotData>,
    pub config: SingleNeuronModelSimulationConfig,
}

impl SimulationConfigurationFile {
    pub fn from_json_slice(bytes: &[u8]) -> ThumbnailResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| {
            ThumbnailError::InvalidData(format!("failed to parse simulation configuration: {e}"))
        })
    }

    /// Plot traces requested by `target`.
    ///
    /// For stimulus plots only the first stimulus configuration is used;
    /// there is no rule yet for choosing among several.
    #[must_use]
    pub fn plot_data(&self, target: PlotTarget) -> &[PlotData] {
        match target {
            PlotTarget::Stimulus => self
                .stimulus
                .first()
                .map_or(&[][..], |stimulus| stimulus.data.as_slice()),
            PlotTarget::Simulation => &self.simulation,
        }
    }
}

/// Resolves the series to draw for `target`.
///
/// `Ok(None)` means there is nothing to draw, which is not an error.
pub fn resolve_plot_target(
    document: &SimulationConfigurationFile,
    target: PlotTarget,
) -> ThumbnailResult<Option<PlotSeriesBundle>> {
    let data = document.plot_data(target);
    debug!(
        target = %target,
        stimulus_groups = document.stimulus.len(),
        series = data.len(),
        "resolved simulation plot target"
    );
    if data.is_empty() {
        return Ok(None);
    }

    let series = data
        .iter()
        .map(|plot| {
            PlotSeries::new(
                plot.name.clone(),
                SeriesKind::from_plot_type(&plot.plot_type),
                plot.x.clone(),
                plot.y.clone(),
            )
        })
        .collect::<ThumbnailResult<Vec<_>>>()?;
    Ok(Some(PlotSeriesBundle::new(series)))
}
