use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::container::GroupPath;
use crate::core::metadata::RecordingMetadata;
use crate::core::windowing::decimate_min_max;
use crate::error::{ThumbnailError, ThumbnailResult};

/// Time series extracted from one response group, in physical units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSeries {
    x: Vec<f64>,
    y: Vec<f64>,
    unit: String,
    rate: f64,
    conversion: f64,
    source: String,
}

impl SignalSeries {
    pub fn new(
        x: Vec<f64>,
        y: Vec<f64>,
        metadata: RecordingMetadata,
        source: &GroupPath,
    ) -> ThumbnailResult<Self> {
        if x.len() != y.len() {
            return Err(ThumbnailError::InvalidData(format!(
                "signal axes differ in length: x={}, y={}",
                x.len(),
                y.len()
            )));
        }
        if !metadata.rate.is_finite() || metadata.rate <= 0.0 {
            return Err(ThumbnailError::InvalidData(
                "sampling rate must be finite and > 0".to_owned(),
            ));
        }
        if !metadata.conversion.is_finite() || metadata.conversion <= 0.0 {
            return Err(ThumbnailError::InvalidData(
                "conversion factor must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            x,
            y,
            unit: metadata.unit,
            rate: metadata.rate,
            conversion: metadata.conversion,
            source: source.to_string(),
        })
    }

    /// Builds the series from raw samples: `x[i] = i / rate` and
    /// `y[i] = raw[i] * conversion`.
    pub fn from_raw_samples(
        raw: &[f64],
        metadata: RecordingMetadata,
        source: &GroupPath,
    ) -> ThumbnailResult<Self> {
        let x = (0..raw.len()).map(|i| i as f64 / metadata.rate).collect();
        let y = raw.iter().map(|sample| sample * metadata.conversion).collect();
        Self::new(x, y, metadata, source)
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    #[must_use]
    pub fn conversion(&self) -> f64 {
        self.conversion
    }

    /// Container path of the response group, e.g.
    /// `/data_organization/cell1/repetition1/sweep1/IDRest/ic_data_0`.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.y.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

/// How a plot series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    #[default]
    Line,
    Bar,
}

impl SeriesKind {
    /// Maps a plot `type` tag. Unknown tags are drawn as lines.
    #[must_use]
    pub fn from_plot_type(plot_type: &str) -> Self {
        match plot_type.trim().to_ascii_lowercase().as_str() {
            "scatter" | "scattergl" | "line" | "lines" => Self::Line,
            "bar" => Self::Bar,
            other => {
                warn!(plot_type = other, "unknown plot type, drawing as line");
                Self::Line
            }
        }
    }
}

/// One named series handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    pub name: String,
    pub kind: SeriesKind,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PlotSeries {
    pub fn new(
        name: impl Into<String>,
        kind: SeriesKind,
        x: Vec<f64>,
        y: Vec<f64>,
    ) -> ThumbnailResult<Self> {
        let name = name.into();
        if x.len() != y.len() {
            return Err(ThumbnailError::InvalidData(format!(
                "series `{name}` axes differ in length: x={}, y={}",
                x.len(),
                y.len()
            )));
        }
        Ok(Self { name, kind, x, y })
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Copy reduced to at most `max_points` samples, keeping the visual
    /// envelope. Bars are never decimated.
    #[must_use]
    pub fn decimated(&self, max_points: usize) -> Self {
        if self.kind == SeriesKind::Bar {
            return self.clone();
        }
        let (x, y) = decimate_min_max(&self.x, &self.y, max_points);
        Self {
            name: self.name.clone(),
            kind: self.kind,
            x,
            y,
        }
    }
}

/// Everything drawn in one thumbnail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotSeriesBundle {
    series: Vec<PlotSeries>,
}

impl PlotSeriesBundle {
    #[must_use]
    pub fn new(series: Vec<PlotSeries>) -> Self {
        Self { series }
    }

    /// Single line named after the response group and its unit.
    pub fn from_signal(signal: &SignalSeries) -> ThumbnailResult<Self> {
        let response = signal.source().rsplit('/').next().unwrap_or_default();
        let name = format!("{response} ({})", signal.unit());
        let series = PlotSeries::new(
            name,
            SeriesKind::Line,
            signal.x().to_vec(),
            signal.y().to_vec(),
        )?;
        Ok(Self::new(vec![series]))
    }

    #[must_use]
    pub fn series(&self) -> &[PlotSeries] {
        &self.series
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn bounded(&self, max_points: Option<usize>) -> Self {
        match max_points {
            Some(max_points) => Self {
                series: self
                    .series
                    .iter()
                    .map(|series| series.decimated(max_points))
                    .collect(),
            },
            None => self.clone(),
        }
    }
}
