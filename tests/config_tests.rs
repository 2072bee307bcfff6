use approx::assert_relative_eq;
use trace_thumbnail::api::{THUMBNAIL_CONFIG_JSON_SCHEMA_V1, ThumbnailConfig};
use trace_thumbnail::render::{FigureSize, PlotStyle};

#[test]
fn defaults_match_service_behavior() {
    let config = ThumbnailConfig::default();
    assert_eq!(config.fetch_timeout_secs, 15);
    assert_eq!(config.trace.root_group, "data_organization");
    assert_eq!(config.trace.preference_index, 0);
    assert_eq!(config.trace.default_dpi, 72);
    assert_relative_eq!(config.trace.figure_width_in, 6.4);
    assert_relative_eq!(config.trace.figure_height_in, 4.8);
    assert_eq!(config.simulation.default_width, 700);
    assert_eq!(config.simulation.default_height, 500);
    assert_eq!(config.max_points_per_series, Some(4096));
    assert_eq!(config.trace_style, PlotStyle::trace());
    assert_eq!(config.simulation_style, PlotStyle::simulation());
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_fills_defaults() {
    let config = ThumbnailConfig::from_json_str(r#"{"trace": {"default_dpi": 150}}"#)
        .expect("partial config");
    assert_eq!(config.trace.default_dpi, 150);
    assert_eq!(config.trace.root_group, "data_organization");
    assert_eq!(config.fetch_timeout_secs, 15);

    let empty = ThumbnailConfig::from_json_str("{}").expect("empty config");
    assert_eq!(empty, ThumbnailConfig::default());
}

#[test]
fn json_round_trips_bare_and_versioned() {
    let config = ThumbnailConfig::default()
        .with_preference_index(-1)
        .with_simulation_size(640, 480)
        .with_max_points_per_series(None);

    let bare = config.to_json_pretty().expect("bare json");
    assert_eq!(ThumbnailConfig::from_json_str(&bare).expect("bare"), config);

    let versioned = config.to_json_contract_v1_pretty().expect("contract json");
    assert!(versioned.contains(&format!(
        "\"schema_version\": {THUMBNAIL_CONFIG_JSON_SCHEMA_V1}"
    )));
    assert_eq!(
        ThumbnailConfig::from_json_str(&versioned).expect("contract"),
        config
    );
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let input = r#"{"schema_version": 99, "config": {}}"#;
    assert!(ThumbnailConfig::from_json_str(input).is_err());
}

#[test]
fn invalid_values_fail_validation() {
    let cases = [
        ThumbnailConfig::default().with_fetch_timeout_secs(0),
        ThumbnailConfig::default().with_root_group("/"),
        ThumbnailConfig::default().with_default_dpi(1000),
        ThumbnailConfig::default().with_figure_size(FigureSize::new(0.0, 4.8)),
        ThumbnailConfig::default().with_simulation_size(0, 500),
        ThumbnailConfig::default().with_max_points_per_series(Some(2)),
        ThumbnailConfig::default().with_trace_style(PlotStyle {
            stroke_width: 0.0,
            ..PlotStyle::trace()
        }),
    ];
    for config in cases {
        assert!(config.validate().is_err(), "{config:?}");
    }
    assert!(ThumbnailConfig::from_json_str(r#"{"fetch_timeout_secs": 0}"#).is_err());
}

#[test]
fn broken_versioned_payload_is_reported_not_defaulted() {
    let input = r#"{"schema_version": 1, "config": {"trace": {"default_dpi": "high"}, "fetch_timeout_secs": 0}}"#;
    let err = ThumbnailConfig::from_json_str(input).expect_err("broken contract payload");
    assert!(err.to_string().contains("contract"), "{err}");

    let missing_config = r#"{"schema_version": 1}"#;
    assert!(ThumbnailConfig::from_json_str(missing_config).is_err());
}

#[test]
fn versioned_payload_values_are_validated() {
    let input = r#"{"schema_version": 1, "config": {"fetch_timeout_secs": 0}}"#;
    assert!(ThumbnailConfig::from_json_str(input).is_err());
}
