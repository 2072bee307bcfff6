use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ThumbnailError, ThumbnailResult};

pub const MIN_DPI: u32 = 10;
pub const MAX_DPI: u32 = 600;
/// Largest accepted edge of an explicitly sized image.
pub const MAX_EDGE_PX: u32 = 8192;

/// Physical figure size used to turn a dpi into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl FigureSize {
    #[must_use]
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
        }
    }

    pub fn validate(self) -> ThumbnailResult<()> {
        if !self.width_in.is_finite()
            || !self.height_in.is_finite()
            || self.width_in <= 0.0
            || self.height_in <= 0.0
        {
            return Err(ThumbnailError::InvalidData(
                "figure size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(6.4, 4.8)
    }
}

/// Requested output size of one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderSize {
    /// Dots per inch over the configured figure size.
    Dpi(u32),
    /// Exact pixel size.
    Pixels { width: u32, height: u32 },
}

impl RenderSize {
    pub fn validate(self) -> ThumbnailResult<Self> {
        match self {
            Self::Dpi(dpi) if !(MIN_DPI..=MAX_DPI).contains(&dpi) => {
                Err(ThumbnailError::InvalidRenderSize(format!(
                    "dpi must be in [{MIN_DPI}, {MAX_DPI}], got {dpi}"
                )))
            }
            Self::Pixels { width, height }
                if !(1..=MAX_EDGE_PX).contains(&width) || !(1..=MAX_EDGE_PX).contains(&height) =>
            {
                Err(ThumbnailError::InvalidRenderSize(format!(
                    "pixel size must be in [1, {MAX_EDGE_PX}] per edge, got {width}x{height}"
                )))
            }
            valid => Ok(valid),
        }
    }

    /// Pixel viewport for this size; `figure` only matters for dpi sizing.
    pub fn viewport(self, figure: FigureSize) -> ThumbnailResult<Viewport> {
        match self.validate()? {
            Self::Dpi(dpi) => {
                figure.validate()?;
                let scale = f64::from(dpi);
                let width = (figure.width_in * scale).round().max(1.0);
                let height = (figure.height_in * scale).round().max(1.0);
                if width > f64::from(MAX_EDGE_PX) || height > f64::from(MAX_EDGE_PX) {
                    return Err(ThumbnailError::InvalidRenderSize(format!(
                        "{dpi} dpi over {}x{} in exceeds {MAX_EDGE_PX} px",
                        figure.width_in, figure.height_in
                    )));
                }
                Ok(Viewport::new(width as u32, height as u32))
            }
            Self::Pixels { width, height } => Ok(Viewport::new(width, height)),
        }
    }
}
