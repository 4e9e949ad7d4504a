#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Administrative boundary assembly for the region → district →
//! neighborhood drill-down.
//!
//! Raw `GeoJSON` boundary files are parsed strictly, their geometries
//! normalized (see [`normalize`]), and merged into a single country-level
//! region index. District collections are resolved through the
//! compile-time [`registry`] of region definitions. Everything is loaded
//! once into an immutable [`snapshot::GeoSnapshot`].

pub mod fixtures;
pub mod index;
pub mod label;
pub mod loader;
pub mod normalize;
pub mod registry;
pub mod repair;
pub mod snapshot;

use thiserror::Error;

/// Errors that can occur while reading or repairing boundary data.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Reading or writing a boundary file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is JSON but not a `FeatureCollection`.
    #[error("Invalid feature collection: {message}")]
    InvalidCollection {
        /// Description of what went wrong.
        message: String,
    },
}
