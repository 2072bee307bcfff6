use crate::core::Viewport;
use crate::error::ThumbnailResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and dry runs.
///
/// It still validates frame content so tests can catch invalid geometry
/// without encoding an image. The returned bytes are always empty.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_polyline_count: usize,
    pub last_rect_count: usize,
    pub last_point_count: usize,
    pub last_viewport: Option<Viewport>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ThumbnailResult<Vec<u8>> {
        frame.validate()?;
        self.render_count += 1;
        self.last_polyline_count = frame.polylines.len();
        self.last_rect_count = frame.rects.len();
        self.last_point_count = frame
            .polylines
            .iter()
            .map(|polyline| polyline.points.len())
            .sum();
        self.last_viewport = Some(frame.viewport);
        Ok(Vec::new())
    }
}
