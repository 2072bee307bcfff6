use approx::assert_relative_eq;
use trace_thumbnail::core::{PlotSeries, PlotSeriesBundle, SeriesKind, Viewport};
use trace_thumbnail::render::{
    Color, NullRenderer, PlotStyle, PolylinePrimitive, RectPrimitive, RenderFrame, Renderer,
    SIMULATION_PALETTE, TRACE_BLUE, build_render_frame,
};

fn line(name: &str, x: Vec<f64>, y: Vec<f64>) -> PlotSeries {
    PlotSeries::new(name, SeriesKind::Line, x, y).expect("valid series")
}

fn margin_only_style() -> PlotStyle {
    PlotStyle {
        margin_px: 10.0,
        vertical_padding_ratio: 0.0,
        ..PlotStyle::trace()
    }
}

#[test]
fn line_spans_plot_area_with_inverted_y() {
    let bundle = PlotSeriesBundle::new(vec![line(
        "trace",
        vec![0.0, 1.0, 2.0],
        vec![0.0, 10.0, 5.0],
    )]);
    let frame = build_render_frame(&bundle, Viewport::new(120, 70), &margin_only_style())
        .expect("frame");

    assert_eq!(frame.polylines.len(), 1);
    let points = &frame.polylines[0].points;
    assert_eq!(points.len(), 3);
    assert_relative_eq!(points[0].0, 10.0);
    assert_relative_eq!(points[0].1, 60.0);
    assert_relative_eq!(points[1].0, 60.0);
    assert_relative_eq!(points[1].1, 10.0);
    assert_relative_eq!(points[2].0, 110.0);
    assert_relative_eq!(points[2].1, 35.0);
    assert_eq!(frame.polylines[0].color, TRACE_BLUE);
}

#[test]
fn non_finite_samples_split_the_line() {
    let bundle = PlotSeriesBundle::new(vec![line(
        "gappy",
        vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        vec![1.0, 2.0, f64::NAN, 3.0, 4.0, f64::INFINITY],
    )]);
    let frame =
        build_render_frame(&bundle, Viewport::new(200, 100), &PlotStyle::trace()).expect("frame");
    assert_eq!(frame.polylines.len(), 2);
    assert!(frame.validate().is_ok());
}

#[test]
fn flat_series_is_centered() {
    let bundle = PlotSeriesBundle::new(vec![line("flat", vec![0.0, 1.0], vec![3.0, 3.0])]);
    let frame = build_render_frame(&bundle, Viewport::new(120, 70), &margin_only_style())
        .expect("frame");
    let points = &frame.polylines[0].points;
    assert_relative_eq!(points[0].1, 35.0);
    assert_relative_eq!(points[1].1, 35.0);
}

#[test]
fn bundle_without_finite_data_renders_background_only() {
    let bundle = PlotSeriesBundle::new(vec![line(
        "empty",
        vec![f64::NAN, f64::NAN],
        vec![1.0, 2.0],
    )]);
    let frame =
        build_render_frame(&bundle, Viewport::new(50, 50), &PlotStyle::trace()).expect("frame");
    assert!(frame.is_empty());

    let frame = build_render_frame(
        &PlotSeriesBundle::default(),
        Viewport::new(50, 50),
        &PlotStyle::trace(),
    )
    .expect("frame");
    assert!(frame.is_empty());
}

#[test]
fn series_cycle_through_palette() {
    let series = (0..12)
        .map(|i| line(&format!("s{i}"), vec![0.0, 1.0], vec![0.0, f64::from(i)]))
        .collect();
    let frame = build_render_frame(
        &PlotSeriesBundle::new(series),
        Viewport::new(700, 500),
        &PlotStyle::simulation(),
    )
    .expect("frame");
    assert_eq!(frame.polylines.len(), 12);
    assert_eq!(frame.polylines[0].color, SIMULATION_PALETTE[0]);
    assert_eq!(frame.polylines[10].color, SIMULATION_PALETTE[0]);
    assert_eq!(frame.polylines[11].color, SIMULATION_PALETTE[1]);
}

#[test]
fn bars_hang_from_zero_baseline() {
    let bars = PlotSeries::new("bars", SeriesKind::Bar, vec![0.0, 1.0], vec![2.0, 4.0])
        .expect("valid series");
    let frame = build_render_frame(
        &PlotSeriesBundle::new(vec![bars]),
        Viewport::new(120, 70),
        &margin_only_style(),
    )
    .expect("frame");

    assert!(frame.polylines.is_empty());
    assert_eq!(frame.rects.len(), 2);
    let tallest = frame.rects[1];
    assert_relative_eq!(tallest.y, 10.0);
    assert_relative_eq!(tallest.y + tallest.height, 60.0);
    assert_relative_eq!(frame.rects[0].height, 25.0);
}

#[test]
fn margin_larger_than_viewport_is_rejected() {
    let bundle = PlotSeriesBundle::new(vec![line("trace", vec![0.0, 1.0], vec![0.0, 1.0])]);
    let style = PlotStyle {
        margin_px: 40.0,
        ..PlotStyle::trace()
    };
    assert!(build_render_frame(&bundle, Viewport::new(60, 60), &style).is_err());
}

#[test]
fn null_renderer_validates_and_counts() {
    let frame = RenderFrame::new(Viewport::new(10, 10), Color::rgb(1.0, 1.0, 1.0))
        .with_polyline(PolylinePrimitive::new(
            vec![(0.0, 0.0), (5.0, 5.0), (9.0, 1.0)],
            1.0,
            TRACE_BLUE,
        ))
        .with_rect(RectPrimitive::new(1.0, 1.0, 2.0, 3.0, TRACE_BLUE));

    let mut renderer = NullRenderer::default();
    let bytes = renderer.render(&frame).expect("render");
    assert!(bytes.is_empty());
    assert_eq!(renderer.render_count, 1);
    assert_eq!(renderer.last_polyline_count, 1);
    assert_eq!(renderer.last_rect_count, 1);
    assert_eq!(renderer.last_point_count, 3);
    assert_eq!(renderer.last_viewport, Some(Viewport::new(10, 10)));
}

#[test]
fn invalid_frames_are_rejected_before_drawing() {
    let mut renderer = NullRenderer::default();

    let zero = RenderFrame::new(Viewport::new(0, 10), Color::rgb(1.0, 1.0, 1.0));
    assert!(renderer.render(&zero).is_err());

    let single_point = RenderFrame::new(Viewport::new(10, 10), Color::rgb(1.0, 1.0, 1.0))
        .with_polyline(PolylinePrimitive::new(vec![(1.0, 1.0)], 1.0, TRACE_BLUE));
    assert!(renderer.render(&single_point).is_err());

    let bad_color = RenderFrame::new(Viewport::new(10, 10), Color::rgb(1.5, 0.0, 0.0));
    assert!(renderer.render(&bad_color).is_err());

    assert_eq!(renderer.render_count, 0);
}

#[test]
fn constant_series_of_large_magnitude_still_renders() {
    let bundle = PlotSeriesBundle::new(vec![line(
        "offset",
        vec![0.0, 1.0, 2.0],
        vec![2e16, 2e16, 2e16],
    )]);
    let frame = build_render_frame(&bundle, Viewport::new(120, 70), &margin_only_style())
        .expect("frame");
    assert_eq!(frame.polylines.len(), 1);
    for (_, y) in &frame.polylines[0].points {
        assert_relative_eq!(*y, 35.0, epsilon = 1e-6);
    }
}
