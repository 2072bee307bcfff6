use trace_thumbnail::container::{
    AttributeValue, Container, ContainerError, ContainerFormat, GroupNode, GroupPath,
    JsonTreeFormat, TreeContainer,
};

fn fixture() -> TreeContainer {
    TreeContainer::new(
        GroupNode::new().with_group(
            "data_organization",
            GroupNode::new()
                .with_group("cell2", GroupNode::new())
                .with_group("cell1", GroupNode::new().with_attribute("label", "first"))
                .with_group(
                    "trace",
                    GroupNode::new()
                        .with_attribute("rate", 2.5)
                        .with_attribute("count", 3_i64)
                        .with_samples(vec![1.0, 2.0, 3.0]),
                ),
        ),
    )
}

#[test]
fn children_keep_insertion_order() {
    let container = fixture();
    let children = container
        .children(&GroupPath::parse("data_organization"))
        .expect("children");
    assert_eq!(children, vec!["cell2", "cell1", "trace"]);
}

#[test]
fn missing_group_reports_full_path() {
    let container = fixture();
    let err = container
        .children(&GroupPath::parse("/data_organization/cell9"))
        .expect_err("missing group");
    assert_eq!(
        err,
        ContainerError::MissingGroup {
            path: "/data_organization/cell9".to_owned()
        }
    );
}

#[test]
fn attributes_and_samples_are_read_back() {
    let container = fixture();
    let trace = GroupPath::parse("data_organization/trace");

    let rate = container.attribute(&trace, "rate").expect("rate");
    assert_eq!(rate.as_f64(), Some(2.5));
    let count = container.attribute(&trace, "count").expect("count");
    assert_eq!(count.as_f64(), Some(3.0));
    assert_eq!(
        container.samples(&trace).expect("samples"),
        vec![1.0, 2.0, 3.0]
    );

    assert!(matches!(
        container.attribute(&trace, "unit"),
        Err(ContainerError::MissingAttribute { .. })
    ));
    assert!(matches!(
        container.samples(&GroupPath::parse("data_organization/cell2")),
        Err(ContainerError::MissingSamples { .. })
    ));
}

#[test]
fn numeric_text_coerces_to_float() {
    assert_eq!(AttributeValue::from("10000.0").as_f64(), Some(10_000.0));
    assert_eq!(AttributeValue::from("volts").as_f64(), None);
    assert_eq!(AttributeValue::from(true).as_f64(), None);
    assert_eq!(AttributeValue::from("volts").as_text(), Some("volts"));
}

#[test]
fn json_tree_format_opens_serialized_tree() {
    let bytes = fixture().to_json_vec().expect("serialize");
    let container = JsonTreeFormat.open(&bytes).expect("open");
    let children = container
        .children(&GroupPath::root())
        .expect("root children");
    assert_eq!(children, vec!["data_organization"]);
    assert_eq!(JsonTreeFormat.name(), "json-tree");
}

#[test]
fn json_tree_format_rejects_garbage() {
    let result = JsonTreeFormat.open(b"\x89HDF\r\n");
    assert!(matches!(result, Err(ContainerError::Decode(_))));
}

#[test]
fn group_path_renders_with_slashes() {
    assert_eq!(GroupPath::root().to_string(), "/");
    assert!(GroupPath::parse("//").is_root());
    let path = GroupPath::parse("/a//b/").child("c");
    assert_eq!(path.segments(), ["a", "b", "c"]);
    assert_eq!(path.to_string(), "/a/b/c");
}
