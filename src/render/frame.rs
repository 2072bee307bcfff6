use crate::core::Viewport;
use crate::error::{ThumbnailError, ThumbnailResult};
use crate::render::{Color, PolylinePrimitive, RectPrimitive};

/// Backend-agnostic scene for one thumbnail.
///
/// `dpi` is the physical resolution recorded by backends that can store one.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub dpi: Option<u32>,
    pub polylines: Vec<PolylinePrimitive>,
    pub rects: Vec<RectPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            dpi: None,
            polylines: Vec::new(),
            rects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = Some(dpi);
        self
    }

    #[must_use]
    pub fn with_polyline(mut self, polyline: PolylinePrimitive) -> Self {
        self.polylines.push(polyline);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> ThumbnailResult<()> {
        if !self.viewport.is_valid() {
            return Err(ThumbnailError::InvalidData(format!(
                "invalid viewport size: width={}, height={}",
                self.viewport.width, self.viewport.height
            )));
        }
        self.background.validate()?;
        if self.dpi == Some(0) {
            return Err(ThumbnailError::InvalidData("dpi must be > 0".to_owned()));
        }

        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty() && self.rects.is_empty()
    }
}
