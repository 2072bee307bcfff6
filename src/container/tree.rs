use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{
    AttributeValue, Container, ContainerError, ContainerFormat, ContainerResult, GroupPath,
};

/// One group of an in-memory recording.
///
/// Child groups and attributes keep their insertion order, which is the
/// order the pipeline sees candidates in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, AttributeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub groups: IndexMap<String, GroupNode>,
}

impl GroupNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_samples(mut self, samples: Vec<f64>) -> Self {
        self.samples = Some(samples);
        self
    }

    #[must_use]
    pub fn with_group(mut self, name: impl Into<String>, group: GroupNode) -> Self {
        self.groups.insert(name.into(), group);
        self
    }
}

/// Container backed by a fully decoded [`GroupNode`] tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeContainer {
    root: GroupNode,
}

impl TreeContainer {
    #[must_use]
    pub fn new(root: GroupNode) -> Self {
        Self { root }
    }

    pub fn from_json_slice(bytes: &[u8]) -> ContainerResult<Self> {
        let root: GroupNode = serde_json::from_slice(bytes)
            .map_err(|err| ContainerError::Decode(err.to_string()))?;
        Ok(Self { root })
    }

    pub fn to_json_vec(&self) -> ContainerResult<Vec<u8>> {
        serde_json::to_vec(&self.root).map_err(|err| ContainerError::Decode(err.to_string()))
    }

    #[must_use]
    pub fn root(&self) -> &GroupNode {
        &self.root
    }

    fn group(&self, path: &GroupPath) -> ContainerResult<&GroupNode> {
        let mut node = &self.root;
        for segment in path.segments() {
            node = node
                .groups
                .get(segment)
                .ok_or_else(|| ContainerError::MissingGroup {
                    path: path.to_string(),
                })?;
        }
        Ok(node)
    }
}

impl Container for TreeContainer {
    fn children(&self, path: &GroupPath) -> ContainerResult<Vec<String>> {
        Ok(self.group(path)?.groups.keys().cloned().collect())
    }

    fn attribute(&self, path: &GroupPath, key: &str) -> ContainerResult<AttributeValue> {
        self.group(path)?
            .attributes
            .get(key)
            .cloned()
            .ok_or_else(|| ContainerError::MissingAttribute {
                path: path.to_string(),
                key: key.to_owned(),
            })
    }

    fn samples(&self, path: &GroupPath) -> ContainerResult<Vec<f64>> {
        self.group(path)?
            .samples
            .clone()
            .ok_or_else(|| ContainerError::MissingSamples {
                path: path.to_string(),
            })
    }
}

/// Default container format: a recording serialized as a JSON group tree:
///
/// ```json
/// {"groups": {"data_organization": {"groups": {"cell1": {}}}}}
/// ```
///
/// where every group may carry `attributes`, `samples` and `groups`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTreeFormat;

impl ContainerFormat for JsonTreeFormat {
    fn name(&self) -> &'static str {
        "json-tree"
    }

    fn open(&self, bytes: &[u8]) -> ContainerResult<Box<dyn Container>> {
        Ok(Box::new(TreeContainer::from_json_slice(bytes)?))
    }
}
