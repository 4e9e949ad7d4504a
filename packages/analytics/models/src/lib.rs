#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Result types for region statistics and dashboard charts.
//!
//! These are the shapes handed to the chart widgets, the incident table,
//! and the LLM analyst. All serialize with camelCase field names.

use serde::{Deserialize, Serialize};
use uzcrime_crime_models::{CrimeFilterKey, CrimeType};

/// Direction of a region's recent crime count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

/// Summary statistics for one region (or district).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStats {
    /// Region or district display name.
    pub region_name: String,
    /// Recorded (or generated) incidents.
    pub total_crimes: u64,
    /// Relative risk, 0 to 100.
    pub risk_score: u8,
    pub trend: Trend,
    /// Most frequent display category.
    pub top_crime_type: CrimeType,
}

/// One slice of the crime-type distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub name: CrimeType,
    /// Incident count.
    pub value: u64,
    /// Fraction of all incidents, 0.0 to 1.0.
    pub share: f64,
    /// Slice color as a CSS hex string.
    pub color: String,
}

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Incidents matching the current filters.
    pub incident_count: u64,
    /// Regions whose risk score exceeds [`HIGH_RISK_THRESHOLD`].
    pub high_risk_regions: u64,
    /// Regions in the current statistics.
    pub region_count: u64,
}

/// Risk score above which a region counts as high risk.
pub const HIGH_RISK_THRESHOLD: u8 = 70;

/// Incident table filters. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentQuery {
    /// Case-insensitive substring of the district or description.
    #[serde(default)]
    pub search: Option<String>,
    /// Fine-grained label the incident must classify to.
    #[serde(default)]
    pub filter: Option<CrimeFilterKey>,
}
