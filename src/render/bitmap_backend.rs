use image::RgbImage;
use plotters::prelude::{
    BitMapBackend, IntoDrawingArea, PathElement, RGBAColor, RGBColor, Rectangle, ShapeStyle,
};
use tracing::trace;

use crate::error::{ThumbnailError, ThumbnailResult};
use crate::render::{Color, RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitmapRenderStats {
    pub polylines_drawn: usize,
    pub rects_drawn: usize,
    pub encoded_bytes: usize,
}

/// Software rasterizer producing PNG bytes.
///
/// Frames are drawn into an RGB image through the plotters bitmap backend
/// and encoded with the `png` codec. A frame dpi is written as a pHYs chunk.
/// Every call allocates its own buffer, so nothing carries over between
/// renders.
#[derive(Debug, Default)]
pub struct PngRenderer {
    last_stats: BitmapRenderStats,
}

impl PngRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "plotters-bitmap+png"
    }

    #[must_use]
    pub fn last_stats(&self) -> BitmapRenderStats {
        self.last_stats
    }

    fn rasterize(&mut self, frame: &RenderFrame, buffer: &mut [u8]) -> ThumbnailResult<()> {
        let size = (frame.viewport.width, frame.viewport.height);
        let area = BitMapBackend::with_buffer(buffer, size).into_drawing_area();
        let mut stats = BitmapRenderStats::default();

        let [red, green, blue, _] = frame.background.to_rgba8();
        area.fill(&RGBColor(red, green, blue))
            .map_err(|err| map_backend_error("failed to clear bitmap", err))?;

        for rect in &frame.rects {
            let top_left = (to_pixel(rect.x), to_pixel(rect.y));
            let bottom_right = (
                to_pixel(rect.x + rect.width),
                to_pixel(rect.y + rect.height),
            );
            area.draw(&Rectangle::new(
                [top_left, bottom_right],
                shape_style(rect.fill_color, 0, true),
            ))
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            stats.rects_drawn += 1;
        }

        for polyline in &frame.polylines {
            let points: Vec<(i32, i32)> = polyline
                .points
                .iter()
                .map(|&(x, y)| (to_pixel(x), to_pixel(y)))
                .collect();
            let stroke = polyline.stroke_width.round().max(1.0) as u32;
            area.draw(&PathElement::new(
                points,
                shape_style(polyline.color, stroke, false),
            ))
            .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
            stats.polylines_drawn += 1;
        }

        area.present()
            .map_err(|err| map_backend_error("failed to flush bitmap", err))?;
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for PngRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ThumbnailResult<Vec<u8>> {
        frame.validate()?;
        let width = frame.viewport.width;
        let height = frame.viewport.height;

        let mut image = RgbImage::new(width, height);
        self.rasterize(frame, &mut image)?;
        let encoded = encode_png(&image, frame.dpi)?;

        self.last_stats.encoded_bytes = encoded.len();
        trace!(
            width,
            height,
            bytes = encoded.len(),
            polylines = self.last_stats.polylines_drawn,
            "encoded png thumbnail"
        );
        Ok(encoded)
    }
}

fn encode_png(image: &RgbImage, dpi: Option<u32>) -> ThumbnailResult<Vec<u8>> {
    let mut encoded = Vec::new();
    let mut encoder = png::Encoder::new(&mut encoded, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    if let Some(dpi) = dpi {
        let per_meter = dots_per_meter(dpi);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: per_meter,
            yppu: per_meter,
            unit: png::Unit::Meter,
        }));
    }

    let mut writer = encoder.write_header().map_err(map_encode_error)?;
    writer
        .write_image_data(image.as_raw())
        .map_err(map_encode_error)?;
    writer.finish().map_err(map_encode_error)?;
    Ok(encoded)
}

/// pHYs stores pixels per meter.
fn dots_per_meter(dpi: u32) -> u32 {
    (f64::from(dpi) / 0.0254).round() as u32
}

fn map_encode_error(err: png::EncodingError) -> ThumbnailError {
    ThumbnailError::Unknown(format!("failed to encode png: {err}"))
}

fn to_pixel(value: f64) -> i32 {
    value.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

fn shape_style(color: Color, stroke_width: u32, filled: bool) -> ShapeStyle {
    let [red, green, blue, _] = color.to_rgba8();
    ShapeStyle {
        color: RGBAColor(red, green, blue, color.alpha),
        filled,
        stroke_width,
    }
}

fn map_backend_error(prefix: &str, err: impl std::fmt::Debug) -> ThumbnailError {
    ThumbnailError::Unknown(format!("{prefix}: {err:?}"))
}
