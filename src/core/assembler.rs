use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::container::{Container, GroupPath};
use crate::core::metadata::{DATA_GROUP, extract_metadata};
use crate::core::protocol::{select_protocol, select_response};
use crate::core::selector::{SelectionContext, select_element};
use crate::core::series::SignalSeries;
use crate::error::{ThumbnailError, ThumbnailResult};

/// Names chosen at every ambiguity level on the way to the response group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceSelection {
    pub cell: String,
    pub repetition: String,
    pub sweep: String,
    pub protocol: String,
    pub response: String,
}

impl TraceSelection {
    /// Path of the selected response group below `root`.
    #[must_use]
    pub fn response_path(&self, root: &GroupPath) -> GroupPath {
        root.child(self.cell.as_str())
            .child(self.repetition.as_str())
            .child(self.sweep.as_str())
            .child(self.protocol.as_str())
            .child(self.response.as_str())
    }
}

/// Child names of `path`. A group that cannot be listed has no candidates,
/// so the caller reports the level-specific "not found" error.
fn list_candidates(container: &dyn Container, path: &GroupPath) -> Vec<String> {
    match container.children(path) {
        Ok(children) => {
            trace!(path = %path, count = children.len(), "listed candidates");
            children
        }
        Err(err) => {
            debug!(path = %path, error = %err, "group cannot be listed");
            Vec::new()
        }
    }
}

/// Walks `root` down to one response group.
///
/// Each level is decided once, top to bottom; a later failure never revisits
/// an earlier choice.
pub fn select_trace(
    container: &dyn Container,
    root: &GroupPath,
    preference_index: isize,
) -> ThumbnailResult<TraceSelection> {
    let cells = list_candidates(container, root);
    let cell = select_element(&cells, preference_index, SelectionContext::Cell)?.to_owned();
    let cell_path = root.child(cell.as_str());

    let repetitions = list_candidates(container, &cell_path);
    let repetition =
        select_element(&repetitions, preference_index, SelectionContext::Repetition)?.to_owned();
    let repetition_path = cell_path.child(repetition.as_str());

    let sweeps = list_candidates(container, &repetition_path);
    let sweep = select_element(&sweeps, preference_index, SelectionContext::Sweep)?.to_owned();
    let sweep_path = repetition_path.child(sweep.as_str());

    let protocols = list_candidates(container, &sweep_path);
    let protocol = select_protocol(&protocols)?.to_owned();
    let protocol_path = sweep_path.child(protocol.as_str());

    let responses = list_candidates(container, &protocol_path);
    let response = select_response(&responses)?.to_owned();

    Ok(TraceSelection {
        cell,
        repetition,
        sweep,
        protocol,
        response,
    })
}

/// Selects the canonical response of a recording and converts it into a
/// physical-unit time series.
pub fn assemble_signal_series(
    container: &dyn Container,
    root: &GroupPath,
    preference_index: isize,
) -> ThumbnailResult<SignalSeries> {
    let selection = select_trace(container, root, preference_index)?;
    let response_path = selection.response_path(root);
    debug!(path = %response_path, "resolved response group");

    let metadata = extract_metadata(container, &response_path)?;
    let raw = container
        .samples(&response_path.child(DATA_GROUP))
        .map_err(|err| {
            debug!(path = %response_path, error = %err, "response group has no samples");
            ThumbnailError::NoResponseData
        })?;

    SignalSeries::from_raw_samples(&raw, metadata, &response_path)
}
