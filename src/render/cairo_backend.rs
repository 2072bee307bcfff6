use cairo::{Context, Format, ImageSurface};

use crate::error::{ThumbnailError, ThumbnailResult};
use crate::render::{Color, RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polylines_drawn: usize,
    pub rects_drawn: usize,
}

/// Cairo renderer backend writing PNG through an offscreen image surface.
///
/// A surface is created per frame at the frame's viewport size, so one
/// renderer serves requests of any size.
#[derive(Debug, Default)]
pub struct CairoRenderer {
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ThumbnailResult<()> {
        apply_color(context, frame.background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            apply_color(context, rect.fill_color);
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            stats.rects_drawn += 1;
        }

        for polyline in &frame.polylines {
            apply_color(context, polyline.color);
            context.set_line_width(polyline.stroke_width);
            let mut points = polyline.points.iter();
            if let Some(&(x, y)) = points.next() {
                context.move_to(x, y);
            }
            for &(x, y) in points {
                context.line_to(x, y);
            }
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
            stats.polylines_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ThumbnailResult<Vec<u8>> {
        frame.validate()?;
        let width = i32::try_from(frame.viewport.width)
            .map_err(|_| ThumbnailError::InvalidData("surface width exceeds i32".to_owned()))?;
        let height = i32::try_from(frame.viewport.height)
            .map_err(|_| ThumbnailError::InvalidData("surface height exceeds i32".to_owned()))?;

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        {
            let context = Context::new(&surface)
                .map_err(|err| map_backend_error("failed to create cairo context", err))?;
            self.render_with_context(&context, frame)?;
        }
        surface.flush();

        let mut encoded = Vec::new();
        surface
            .write_to_png(&mut encoded)
            .map_err(|err| ThumbnailError::Unknown(format!("failed to encode png: {err}")))?;
        Ok(encoded)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ThumbnailError {
    ThumbnailError::Unknown(format!("{prefix}: {err}"))
}
