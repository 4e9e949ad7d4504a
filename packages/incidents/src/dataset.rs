//! Aggregate dataset parsing.
//!
//! A dataset document is a JSON object with a reserved `jami_respublika`
//! (republic-wide total) entry and one or more grouping entries. The first
//! grouping entry in document order maps raw region keys to case counts:
//!
//! ```json
//! {
//!   "jami_respublika": 12345,
//!   "hududlar": { "Toshkent_shahri": 5321, "Andijon": 810 }
//! }
//! ```

use std::path::Path;

use serde_json::Value;
use uzcrime_geography::registry;
use uzcrime_incidents_models::RegionTotal;

use crate::IncidentError;

/// Top-level key holding the republic-wide total. Never a region grouping.
pub const REPUBLIC_TOTAL_KEY: &str = "jami_respublika";

/// One raw region entry of an aggregate dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRegionCount {
    /// Key as written in the dataset (e.g. `"Toshkent_shahri"`).
    pub raw_key: String,
    /// Recorded cases, rounded to a whole count.
    pub total: u64,
    /// Recorded cases exactly as written, fractions included.
    pub value: f64,
}

impl RawRegionCount {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(raw_key: impl Into<String>, total: u64) -> Self {
        Self {
            raw_key: raw_key.into(),
            total,
            value: total as f64,
        }
    }

    /// Count from a fractional dataset value. `value` must be finite and
    /// non-negative.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn fractional(raw_key: impl Into<String>, value: f64) -> Self {
        Self {
            raw_key: raw_key.into(),
            total: value.round() as u64,
            value,
        }
    }
}

/// Parses an aggregate dataset document into its raw region counts.
///
/// # Errors
///
/// Returns [`IncidentError::Json`] if `json` is not valid JSON, or
/// [`IncidentError::InvalidDataset`] if the top level is not an object.
pub fn parse_aggregate(json: &str) -> Result<Vec<RawRegionCount>, IncidentError> {
    let document: Value = serde_json::from_str(json)?;
    if !document.is_object() {
        return Err(IncidentError::InvalidDataset {
            message: "top level must be a JSON object".to_string(),
        });
    }
    Ok(region_counts(&document))
}

/// Reads and parses an aggregate dataset file.
///
/// # Errors
///
/// Returns [`IncidentError`] if the file cannot be read or parsed.
pub fn read_aggregate(path: &Path) -> Result<Vec<RawRegionCount>, IncidentError> {
    let content = std::fs::read_to_string(path)?;
    parse_aggregate(&content)
}

/// Extracts the raw region counts from the first non-reserved top-level
/// entry, in document order.
///
/// A missing grouping, or one that is not an object, yields no counts.
/// Entries whose value is not a non-negative number are skipped.
#[must_use]
pub fn region_counts(document: &Value) -> Vec<RawRegionCount> {
    let Some(grouping) = document
        .as_object()
        .and_then(|root| root.iter().find(|(key, _)| *key != REPUBLIC_TOTAL_KEY))
        .map(|(_, value)| value)
    else {
        return Vec::new();
    };

    let Some(entries) = grouping.as_object() else {
        log::warn!("Dataset grouping is not an object; treating as empty");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|(raw_key, value)| match count_value(raw_key, value) {
            Some(count) => Some(count),
            None => {
                log::warn!("Skipping non-numeric count for '{raw_key}': {value}");
                None
            }
        })
        .collect()
}

fn count_value(raw_key: &str, value: &Value) -> Option<RawRegionCount> {
    if let Some(total) = value.as_u64() {
        return Some(RawRegionCount::new(raw_key, total));
    }
    value
        .as_f64()
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| RawRegionCount::fractional(raw_key, n))
}

/// Maps raw counts to display names, discarding unmapped keys. Regions
/// without a center are kept. Order follows `counts`.
#[must_use]
pub fn region_totals(counts: &[RawRegionCount]) -> Vec<RegionTotal> {
    counts
        .iter()
        .filter_map(|count| {
            registry::by_raw_key(&count.raw_key)
                .map(|region| RegionTotal::new(region.name.clone(), count.total))
        })
        .collect()
}
