#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Expansion of aggregate crime statistics into individual incidents.
//!
//! The aggregate datasets only carry one number per region. This crate
//! turns those numbers into a scaled set of map markers: each region
//! contributes roughly one incident per hundred recorded cases, sampled
//! uniformly inside a disk around the region's center (see [`sampler`]).
//! Every incident also gets a stable fine-grained filter label derived
//! from its id (see [`classify`]), so filtering is reproducible even
//! though marker positions are not.

pub mod classify;
pub mod dataset;
pub mod generate;
pub mod mock;
pub mod sampler;
pub mod snapshot;

use thiserror::Error;

/// Errors that can occur while reading aggregate datasets.
#[derive(Debug, Error)]
pub enum IncidentError {
    /// Reading a dataset file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is JSON but does not have the aggregate shape.
    #[error("Invalid dataset: {message}")]
    InvalidDataset {
        /// Description of what went wrong.
        message: String,
    },
}
