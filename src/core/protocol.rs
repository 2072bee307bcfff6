use tracing::{info, warn};

use crate::error::{ThumbnailError, ThumbnailResult};

/// Stimulation protocols preferred for thumbnails, most preferred first.
pub const PROTOCOL_PRIORITY: [&str; 3] = ["IDRest", "APWaveform", "IDThres"];

/// Marker carried by intracellular current-clamp response groups.
pub const RESPONSE_MARKER: &str = "ic_";

/// Picks the protocol to plot.
///
/// The first entry of [`PROTOCOL_PRIORITY`] present in `names` wins. When none
/// of them is recorded, the first listed protocol is used.
pub fn select_protocol<S: AsRef<str>>(names: &[S]) -> ThumbnailResult<&str> {
    let Some(first) = names.first() else {
        return Err(ThumbnailError::NoProtocolFound);
    };

    for preferred in PROTOCOL_PRIORITY {
        if let Some(found) = names.iter().find(|name| name.as_ref() == preferred) {
            info!(protocol = preferred, "using preferred protocol for thumbnail");
            return Ok(found.as_ref());
        }
    }

    warn!(
        protocol = first.as_ref(),
        "standard protocols not found, falling back to first protocol"
    );
    Ok(first.as_ref())
}

/// Picks the first response group holding intracellular data, skipping
/// stimulus groups.
pub fn select_response<S: AsRef<str>>(names: &[S]) -> ThumbnailResult<&str> {
    names
        .iter()
        .map(AsRef::as_ref)
        .find(|name| name.contains(RESPONSE_MARKER))
        .ok_or(ThumbnailError::NoResponseData)
}
