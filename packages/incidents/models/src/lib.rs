#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Incident records and regional totals.
//!
//! Both types serialize with camelCase field names, matching the JSON the
//! map and dashboard consume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uzcrime_crime_models::{CrimeType, Severity};
use uzcrime_geography_models::Coordinates;

/// A single pseudo-random incident expanded from aggregate counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeIncident {
    /// Unique within the dataset it was generated from.
    pub id: String,
    /// Display category.
    #[serde(rename = "type")]
    pub crime_type: CrimeType,
    /// Generation (or simulated report) time.
    pub date: DateTime<Utc>,
    /// Sampled marker position.
    pub location: Coordinates,
    /// Containing area label (`"Uzbekistan"` for dataset incidents).
    pub region: String,
    /// Region or district display name the incident is grouped under.
    pub district: String,
    /// Free-text description.
    pub description: String,
    /// Severity label.
    pub severity: Severity,
}

/// Aggregate count for one mapped region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionTotal {
    /// Display name of the region.
    pub region_name: String,
    /// Number of recorded cases.
    pub total_crimes: u64,
}

impl RegionTotal {
    #[must_use]
    pub fn new(region_name: impl Into<String>, total_crimes: u64) -> Self {
        Self {
            region_name: region_name.into(),
            total_crimes,
        }
    }
}
