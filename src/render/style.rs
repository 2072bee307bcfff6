use serde::{Deserialize, Serialize};

use crate::error::{ThumbnailError, ThumbnailResult};
use crate::render::Color;

/// Matplotlib's first cycle color.
pub const TRACE_BLUE: Color = Color::rgb8(0x1f, 0x77, 0xb4);

/// Plotly's default colorway.
pub const SIMULATION_PALETTE: [Color; 10] = [
    Color::rgb8(0x63, 0x6e, 0xfa),
    Color::rgb8(0xef, 0x55, 0x3b),
    Color::rgb8(0x00, 0xcc, 0x96),
    Color::rgb8(0xab, 0x63, 0xfa),
    Color::rgb8(0xff, 0xa1, 0x5a),
    Color::rgb8(0x19, 0xd3, 0xf3),
    Color::rgb8(0xff, 0x66, 0x92),
    Color::rgb8(0xb6, 0xe8, 0x80),
    Color::rgb8(0xff, 0x97, 0xff),
    Color::rgb8(0xfe, 0xcb, 0x52),
];

/// Visual settings passed explicitly to every frame build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    pub background: Color,
    /// Series colors, cycled in series order.
    pub palette: Vec<Color>,
    pub stroke_width: f64,
    /// Empty border around the plot area, in pixels.
    pub margin_px: f64,
    /// Fraction of the value span added above and below the data.
    pub vertical_padding_ratio: f64,
    /// Fraction of the slot width a bar occupies.
    pub bar_width_ratio: f64,
}

impl PlotStyle {
    /// Single blue trace on white, the look of electrophysiology thumbnails.
    #[must_use]
    pub fn trace() -> Self {
        Self {
            background: Color::rgb(1.0, 1.0, 1.0),
            palette: vec![TRACE_BLUE],
            stroke_width: 1.5,
            margin_px: 8.0,
            vertical_padding_ratio: 0.05,
            bar_width_ratio: 0.8,
        }
    }

    /// Simulation plots: plotly colorway, 4 px margins, no legend.
    #[must_use]
    pub fn simulation() -> Self {
        Self {
            background: Color::rgb(1.0, 1.0, 1.0),
            palette: SIMULATION_PALETTE.to_vec(),
            stroke_width: 2.0,
            margin_px: 4.0,
            vertical_padding_ratio: 0.05,
            bar_width_ratio: 0.8,
        }
    }

    #[must_use]
    pub fn series_color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return TRACE_BLUE;
        }
        self.palette[index % self.palette.len()]
    }

    pub fn validate(&self) -> ThumbnailResult<()> {
        self.background.validate()?;
        for color in &self.palette {
            color.validate()?;
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ThumbnailError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.margin_px.is_finite() || self.margin_px < 0.0 {
            return Err(ThumbnailError::InvalidData(
                "margin must be finite and >= 0".to_owned(),
            ));
        }
        if !self.vertical_padding_ratio.is_finite() || self.vertical_padding_ratio < 0.0 {
            return Err(ThumbnailError::InvalidData(
                "vertical padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.bar_width_ratio.is_finite()
            || self.bar_width_ratio <= 0.0
            || self.bar_width_ratio > 1.0
        {
            return Err(ThumbnailError::InvalidData(
                "bar width ratio must be in (0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self::trace()
    }
}
