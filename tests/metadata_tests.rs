use approx::assert_relative_eq;
use trace_thumbnail::ThumbnailError;
use trace_thumbnail::container::{GroupNode, GroupPath, TreeContainer};
use trace_thumbnail::core::{extract_metadata, get_conversion, get_rate, get_unit};

fn response(data: GroupNode, starting_time: GroupNode) -> (TreeContainer, GroupPath) {
    let container = TreeContainer::new(GroupNode::new().with_group(
        "ic_data_0",
        GroupNode::new()
            .with_group("data", data)
            .with_group("starting_time", starting_time),
    ));
    (container, GroupPath::parse("ic_data_0"))
}

fn complete() -> (TreeContainer, GroupPath) {
    response(
        GroupNode::new()
            .with_attribute("unit", "volts")
            .with_attribute("conversion", 0.001)
            .with_samples(vec![1.0, 2.0]),
        GroupNode::new().with_attribute("rate", 10_000.0),
    )
}

#[test]
fn complete_response_yields_all_metadata() {
    let (container, path) = complete();
    let metadata = extract_metadata(&container, &path).expect("metadata");
    assert_eq!(metadata.unit, "volts");
    assert_relative_eq!(metadata.rate, 10_000.0);
    assert_relative_eq!(metadata.conversion, 0.001);
}

#[test]
fn integer_and_text_numbers_are_accepted() {
    let (container, path) = response(
        GroupNode::new()
            .with_attribute("unit", "amperes")
            .with_attribute("conversion", "1e-12"),
        GroupNode::new().with_attribute("rate", 20_000_i64),
    );
    assert_relative_eq!(get_rate(&container, &path).expect("rate"), 20_000.0);
    assert_relative_eq!(
        get_conversion(&container, &path).expect("conversion"),
        1e-12
    );
}

#[test]
fn missing_unit_is_reported() {
    let (container, path) = response(
        GroupNode::new().with_attribute("conversion", 1.0),
        GroupNode::new().with_attribute("rate", 1.0),
    );
    assert!(matches!(
        get_unit(&container, &path),
        Err(ThumbnailError::NoUnitFound)
    ));
    assert!(matches!(
        extract_metadata(&container, &path),
        Err(ThumbnailError::NoUnitFound)
    ));
}

#[test]
fn numeric_unit_is_not_a_unit() {
    let (container, path) = response(
        GroupNode::new().with_attribute("unit", 3.0),
        GroupNode::new(),
    );
    assert!(matches!(
        get_unit(&container, &path),
        Err(ThumbnailError::NoUnitFound)
    ));
}

#[test]
fn missing_or_invalid_rate_is_reported() {
    let data = GroupNode::new()
        .with_attribute("unit", "volts")
        .with_attribute("conversion", 1.0);

    let (container, path) = response(data.clone(), GroupNode::new());
    assert!(matches!(
        extract_metadata(&container, &path),
        Err(ThumbnailError::NoRateFound)
    ));

    let (container, path) = response(data, GroupNode::new().with_attribute("rate", 0.0));
    assert!(matches!(
        get_rate(&container, &path),
        Err(ThumbnailError::NoRateFound)
    ));
}

#[test]
fn missing_or_invalid_conversion_is_reported() {
    let (container, path) = response(
        GroupNode::new().with_attribute("unit", "volts"),
        GroupNode::new().with_attribute("rate", 1.0),
    );
    assert!(matches!(
        extract_metadata(&container, &path),
        Err(ThumbnailError::NoConversionFound)
    ));

    let (container, path) = response(
        GroupNode::new()
            .with_attribute("unit", "volts")
            .with_attribute("conversion", -2.0),
        GroupNode::new().with_attribute("rate", 1.0),
    );
    assert!(matches!(
        get_conversion(&container, &path),
        Err(ThumbnailError::NoConversionFound)
    ));
}

#[test]
fn missing_data_group_reports_unit_first() {
    let container = TreeContainer::new(GroupNode::new().with_group("ic_data_0", GroupNode::new()));
    let path = GroupPath::parse("ic_data_0");
    assert!(matches!(
        extract_metadata(&container, &path),
        Err(ThumbnailError::NoUnitFound)
    ));
}
