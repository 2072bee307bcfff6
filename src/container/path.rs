use std::fmt;

use smallvec::SmallVec;

/// Absolute location of a group inside a container.
///
/// Recordings are rarely more than a handful of levels deep, so segments are
/// kept inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GroupPath {
    segments: SmallVec<[String; 8]>,
}

impl GroupPath {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses a `/`-separated path. Empty segments are ignored, so `""`,
    /// `"/"` and `"//"` all denote the root.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: raw
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
        }
    }

    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for GroupPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
