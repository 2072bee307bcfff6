//! Read-only access to hierarchical recordings.
//!
//! The selection pipeline only ever needs three things from a recording:
//! the ordered child names of a group, a scalar attribute of a group, and
//! the raw sample array stored on a group. Any file-format reader that can
//! answer those questions can back a [`Container`].

mod error;
mod path;
mod tree;
mod value;

pub use error::{ContainerError, ContainerResult};
pub use path::GroupPath;
pub use tree::{GroupNode, JsonTreeFormat, TreeContainer};
pub use value::AttributeValue;

/// Read-only view over one opened recording.
///
/// Implementations own whatever handles or buffers back the recording and
/// release them on drop, so a container must not outlive the request that
/// opened it.
pub trait Container {
    /// Child group names of `path`, in container order.
    fn children(&self, path: &GroupPath) -> ContainerResult<Vec<String>>;

    /// Scalar attribute `key` stored on the group at `path`.
    fn attribute(&self, path: &GroupPath, key: &str) -> ContainerResult<AttributeValue>;

    /// Raw sample array stored on the group at `path`.
    fn samples(&self, path: &GroupPath) -> ContainerResult<Vec<f64>>;
}

/// Decoder turning raw bytes into an opened [`Container`].
pub trait ContainerFormat {
    fn name(&self) -> &'static str;

    fn open(&self, bytes: &[u8]) -> ContainerResult<Box<dyn Container>>;
}
