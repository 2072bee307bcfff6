use serde::{Deserialize, Serialize};

use crate::container::{Container, GroupPath};
use crate::error::{ThumbnailError, ThumbnailResult};

/// Group holding the raw samples and their unit/conversion attributes.
pub const DATA_GROUP: &str = "data";
/// Group holding the sampling rate.
pub const STARTING_TIME_GROUP: &str = "starting_time";

pub const UNIT_ATTRIBUTE: &str = "unit";
pub const RATE_ATTRIBUTE: &str = "rate";
pub const CONVERSION_ATTRIBUTE: &str = "conversion";

/// Physical-unit metadata of one response group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingMetadata {
    pub unit: String,
    pub rate: f64,
    pub conversion: f64,
}

/// Unit of the samples stored under `response`.
///
/// Any container failure (missing group, missing attribute, non-text value)
/// becomes [`ThumbnailError::NoUnitFound`].
pub fn get_unit(container: &dyn Container, response: &GroupPath) -> ThumbnailResult<String> {
    container
        .attribute(&response.child(DATA_GROUP), UNIT_ATTRIBUTE)
        .ok()
        .and_then(|value| value.as_text().map(ToOwned::to_owned))
        .ok_or(ThumbnailError::NoUnitFound)
}

/// Sampling rate in Hz. Must be finite and strictly positive.
pub fn get_rate(container: &dyn Container, response: &GroupPath) -> ThumbnailResult<f64> {
    container
        .attribute(&response.child(STARTING_TIME_GROUP), RATE_ATTRIBUTE)
        .ok()
        .and_then(|value| value.as_f64())
        .filter(|rate| rate.is_finite() && *rate > 0.0)
        .ok_or(ThumbnailError::NoRateFound)
}

/// Scale applied to raw samples. Must be finite and strictly positive.
pub fn get_conversion(container: &dyn Container, response: &GroupPath) -> ThumbnailResult<f64> {
    container
        .attribute(&response.child(DATA_GROUP), CONVERSION_ATTRIBUTE)
        .ok()
        .and_then(|value| value.as_f64())
        .filter(|conversion| conversion.is_finite() && *conversion > 0.0)
        .ok_or(ThumbnailError::NoConversionFound)
}

/// Reads unit, rate and conversion, in that order.
pub fn extract_metadata(
    container: &dyn Container,
    response: &GroupPath,
) -> ThumbnailResult<RecordingMetadata> {
    Ok(RecordingMetadata {
        unit: get_unit(container, response)?,
        rate: get_rate(container, response)?,
        conversion: get_conversion(container, response)?,
    })
}
