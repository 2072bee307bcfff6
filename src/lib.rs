//! trace-thumbnail: thumbnail rendering for electrophysiology recordings and
//! single-neuron simulation plots.
//!
//! The pipeline is split the same way at every entry point: fetch raw bytes,
//! decode a hierarchical container, select one series deterministically, and
//! hand a validated frame to a pluggable renderer.
//!
//! Recordings are read through the [`container::Container`] trait. The only
//! bundled decoder is [`container::JsonTreeFormat`], a JSON group tree with
//! the same layout as the recording archives. Native NWB/HDF5 bytes fail
//! with [`ThumbnailError::InvalidContainer`] unless a reader for them is
//! installed with [`ThumbnailEngine::with_container_format`].

pub mod api;
pub mod container;
pub mod core;
pub mod error;
pub mod fetch;
pub mod render;
pub mod telemetry;

pub use api::{ThumbnailConfig, ThumbnailEngine};
pub use error::{ErrorClass, ThumbnailError, ThumbnailResult};
