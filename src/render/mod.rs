mod bitmap_backend;
mod frame;
mod frame_builder;
mod null_renderer;
mod primitives;
mod size;
mod style;

pub use bitmap_backend::{BitmapRenderStats, PngRenderer};
pub use frame::RenderFrame;
pub use frame_builder::build_render_frame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, PolylinePrimitive, RectPrimitive};
pub use size::{FigureSize, MAX_DPI, MAX_EDGE_PX, MIN_DPI, RenderSize};
pub use style::{PlotStyle, SIMULATION_PALETTE, TRACE_BLUE};

use crate::error::ThumbnailResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` and
/// return the encoded image, so drawing code stays isolated from selection
/// and extraction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ThumbnailResult<Vec<u8>>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
