use thiserror::Error;

pub type ContainerResult<T> = Result<T, ContainerError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContainerError {
    #[error("group `{path}` does not exist")]
    MissingGroup { path: String },

    #[error("group `{path}` has no attribute `{key}`")]
    MissingAttribute { path: String, key: String },

    #[error("group `{path}` holds no samples")]
    MissingSamples { path: String },

    #[error("failed to decode container: {0}")]
    Decode(String),
}
