mod engine;
mod engine_config;
mod json_contract;

pub use engine::ThumbnailEngine;
pub use engine_config::{SimulationConfig, ThumbnailConfig, TraceConfig};
pub use json_contract::{THUMBNAIL_CONFIG_JSON_SCHEMA_V1, ThumbnailConfigJsonContractV1};
