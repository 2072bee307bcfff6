use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ThumbnailError, ThumbnailResult};

/// Ambiguity level a candidate list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionContext {
    Cell,
    Repetition,
    Sweep,
    Protocol,
    Response,
}

impl SelectionContext {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cell => "cell",
            Self::Repetition => "repetition",
            Self::Sweep => "sweep",
            Self::Protocol => "protocol",
            Self::Response => "response",
        }
    }

    /// Error reported when there is nothing to choose from at this level.
    #[must_use]
    pub fn empty_error(self) -> ThumbnailError {
        match self {
            Self::Cell => ThumbnailError::NoCellFound,
            Self::Repetition => ThumbnailError::NoRepetitionFound,
            Self::Sweep => ThumbnailError::NoSweepFound,
            Self::Protocol | Self::Response => ThumbnailError::NoSuchElement { context: self },
        }
    }
}

impl fmt::Display for SelectionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort key of one candidate. Names without digits rank after every
/// numeric key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum RankKey {
    Numeric(u64),
    Missing,
}

/// Value of the last maximal run of ASCII digits in `name`.
///
/// Runs too large for `u64` saturate, so they tie with each other and keep
/// their input order.
#[must_use]
pub fn find_trailing_digits(name: &str) -> Option<u64> {
    let bytes = name.as_bytes();
    let mut last_run = None;
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index].is_ascii_digit() {
            let start = index;
            while index < bytes.len() && bytes[index].is_ascii_digit() {
                index += 1;
            }
            last_run = Some(&name[start..index]);
        } else {
            index += 1;
        }
    }
    last_run.map(|digits| digits.parse::<u64>().unwrap_or(u64::MAX))
}

/// Candidate indices ordered by ascending trailing-digit key; ties keep
/// input order.
#[must_use]
pub fn rank_candidates<S: AsRef<str>>(candidates: &[S]) -> Vec<usize> {
    let keys: Vec<RankKey> = candidates
        .iter()
        .map(|name| find_trailing_digits(name.as_ref()).map_or(RankKey::Missing, RankKey::Numeric))
        .collect();
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by_key(|&index| keys[index]);
    order
}

/// Clamps a possibly negative position into `[-len, len - 1]` and resolves
/// it to a plain index. `len` must be non-zero.
fn resolve_position(preference_index: isize, len: usize) -> usize {
    let len = isize::try_from(len).unwrap_or(isize::MAX);
    let position = if preference_index < 0 {
        len + preference_index.max(-len)
    } else {
        preference_index.min(len - 1)
    };
    usize::try_from(position).unwrap_or(0)
}

/// Picks one candidate out of an ambiguous sibling list.
///
/// `preference_index` indexes the ascending ranking, Python style: `0` is the
/// smallest key and `-1` the largest. Out-of-range positions clamp.
pub fn select_element<S: AsRef<str>>(
    candidates: &[S],
    preference_index: isize,
    context: SelectionContext,
) -> ThumbnailResult<&str> {
    match candidates {
        [] => Err(context.empty_error()),
        [only] => Ok(only.as_ref()),
        _ => {
            let ranking = rank_candidates(candidates);
            let chosen = candidates[ranking[resolve_position(preference_index, ranking.len())]]
                .as_ref();
            debug!(
                context = %context,
                count = candidates.len(),
                preference_index,
                chosen,
                "multiple candidates, selected by trailing digits"
            );
            Ok(chosen)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_position;

    #[test]
    fn resolve_position_supports_negative_indexing() {
        assert_eq!(resolve_position(0, 3), 0);
        assert_eq!(resolve_position(2, 3), 2);
        assert_eq!(resolve_position(7, 3), 2);
        assert_eq!(resolve_position(-1, 3), 2);
        assert_eq!(resolve_position(-3, 3), 0);
        assert_eq!(resolve_position(-9, 3), 0);
    }
}
