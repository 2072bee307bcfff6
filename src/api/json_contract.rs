use serde::{Deserialize, Serialize};

use crate::error::{ThumbnailError, ThumbnailResult};

use super::ThumbnailConfig;

pub const THUMBNAIL_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ThumbnailConfig,
}

impl ThumbnailConfig {
    pub fn to_json_pretty(&self) -> ThumbnailResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ThumbnailError::InvalidData(format!("failed to serialize config json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ThumbnailResult<String> {
        let payload = ThumbnailConfigJsonContractV1 {
            schema_version: THUMBNAIL_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ThumbnailError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a bare config or a versioned contract payload, then
    /// validates the result.
    ///
    /// A document with a top-level `schema_version` is always read as a
    /// contract payload; its parse errors are reported, never replaced by
    /// defaults.
    pub fn from_json_str(input: &str) -> ThumbnailResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ThumbnailError::InvalidData(format!("failed to parse config json payload: {e}"))
        })?;

        let config = if value.get("schema_version").is_some() {
            let payload: ThumbnailConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    ThumbnailError::InvalidData(format!(
                        "failed to parse config contract v1 payload: {e}"
                    ))
                })?;
            if payload.schema_version != THUMBNAIL_CONFIG_JSON_SCHEMA_V1 {
                return Err(ThumbnailError::InvalidData(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value::<ThumbnailConfig>(value).map_err(|e| {
                ThumbnailError::InvalidData(format!("failed to parse config json payload: {e}"))
            })?
        };
        config.validate()?;
        Ok(config)
    }
}
