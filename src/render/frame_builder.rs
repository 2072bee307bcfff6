use tracing::trace;

use crate::core::{LinearScale, PlotSeries, PlotSeriesBundle, ScaleFit, SeriesKind, Viewport};
use crate::error::{ThumbnailError, ThumbnailResult};
use crate::render::{Color, PlotStyle, PolylinePrimitive, RectPrimitive, RenderFrame};

/// Pixel rectangle the series are drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlotArea {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl PlotArea {
    fn inside(viewport: Viewport, margin: f64) -> ThumbnailResult<Self> {
        let area = Self {
            left: margin,
            right: f64::from(viewport.width) - margin,
            top: margin,
            bottom: f64::from(viewport.height) - margin,
        };
        if area.right <= area.left || area.bottom <= area.top {
            return Err(ThumbnailError::InvalidData(format!(
                "margin {margin}px leaves no plot area in {}x{}",
                viewport.width, viewport.height
            )));
        }
        Ok(area)
    }

    fn width(self) -> f64 {
        self.right - self.left
    }
}

/// Projects a bundle into pixel-space primitives.
///
/// All series share one x and one y domain fitted around their finite
/// samples. Non-finite samples split a line into separate runs. A bundle
/// without any finite sample yields a frame with only the background.
pub fn build_render_frame(
    bundle: &PlotSeriesBundle,
    viewport: Viewport,
    style: &PlotStyle,
) -> ThumbnailResult<RenderFrame> {
    style.validate()?;
    let mut frame = RenderFrame::new(viewport, style.background);
    let area = PlotArea::inside(viewport, style.margin_px)?;

    let finite_points = || {
        bundle.series().iter().flat_map(|series| {
            series
                .x()
                .iter()
                .zip(series.y())
                .filter(|(x, y)| x.is_finite() && y.is_finite())
        })
    };

    let x_scale = LinearScale::fit(finite_points().map(|(x, _)| *x), ScaleFit::default())?;
    let has_bars = bundle
        .series()
        .iter()
        .any(|series| series.kind == SeriesKind::Bar);
    let baseline = has_bars.then_some(0.0);
    let y_scale = LinearScale::fit(
        finite_points().map(|(_, y)| *y).chain(baseline),
        ScaleFit {
            padding_ratio: style.vertical_padding_ratio,
            ..ScaleFit::default()
        },
    )?;
    let (Some(x_scale), Some(y_scale)) = (x_scale, y_scale) else {
        trace!("bundle has no finite samples, rendering background only");
        return Ok(frame);
    };

    for (index, series) in bundle.series().iter().enumerate() {
        let color = style.series_color(index);
        match series.kind {
            SeriesKind::Line => {
                for run in project_line_runs(series, x_scale, y_scale, area)? {
                    frame = frame.with_polyline(PolylinePrimitive::new(
                        run,
                        style.stroke_width,
                        color,
                    ));
                }
            }
            SeriesKind::Bar => {
                let bars = BarLayout {
                    width_ratio: style.bar_width_ratio,
                    color,
                };
                for rect in project_bars(series, x_scale, y_scale, area, bars)? {
                    frame = frame.with_rect(rect);
                }
            }
        }
    }

    trace!(
        polylines = frame.polylines.len(),
        rects = frame.rects.len(),
        "built render frame"
    );
    Ok(frame)
}

fn project_point(
    x: f64,
    y: f64,
    x_scale: LinearScale,
    y_scale: LinearScale,
    area: PlotArea,
) -> ThumbnailResult<(f64, f64)> {
    Ok((
        x_scale.domain_to_pixel(x, area.left, area.right)?,
        y_scale.domain_to_pixel(y, area.bottom, area.top)?,
    ))
}

/// Maximal runs of finite samples, each with at least two points.
fn project_line_runs(
    series: &PlotSeries,
    x_scale: LinearScale,
    y_scale: LinearScale,
    area: PlotArea,
) -> ThumbnailResult<Vec<Vec<(f64, f64)>>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (&x, &y) in series.x().iter().zip(series.y()) {
        if x.is_finite() && y.is_finite() {
            current.push(project_point(x, y, x_scale, y_scale, area)?);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs.retain(|run| run.len() >= 2);
    Ok(runs)
}

#[derive(Debug, Clone, Copy)]
struct BarLayout {
    width_ratio: f64,
    color: Color,
}

/// One bar per finite sample, hanging from the zero baseline. Bars share a
/// slot width derived from the sample count.
fn project_bars(
    series: &PlotSeries,
    x_scale: LinearScale,
    y_scale: LinearScale,
    area: PlotArea,
    layout: BarLayout,
) -> ThumbnailResult<Vec<RectPrimitive>> {
    let count = series.len().max(1) as f64;
    let bar_width = area.width() / count * layout.width_ratio;
    let base_y = y_scale.domain_to_pixel(0.0, area.bottom, area.top)?;

    let mut rects = Vec::with_capacity(series.len());
    for (&x, &y) in series.x().iter().zip(series.y()) {
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        let (center_x, top_y) = project_point(x, y, x_scale, y_scale, area)?;
        rects.push(RectPrimitive::new(
            center_x - bar_width / 2.0,
            top_y.min(base_y),
            bar_width,
            (base_y - top_y).abs(),
            layout.color,
        ));
    }
    Ok(rects)
}
