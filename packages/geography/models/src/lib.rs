#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Administrative region definitions and coordinate types.
//!
//! A [`RegionDefinition`] is the static configuration for one of
//! Uzbekistan's fourteen first-level regions: the raw key used by the
//! aggregate statistics datasets, the display name used by the boundary
//! data, a fixed center coordinate, and where its district boundaries come
//! from. Definitions are deserialized from TOML at startup and never
//! mutated afterward.

use serde::{Deserialize, Serialize};

/// Boundary properties consulted, in order, when labelling a feature.
pub const LABEL_PROPERTY_KEYS: &[&str] = &["name", "ADM1_UZ", "ADM1_EN", "ADM1_RU"];

/// Label used when none of [`LABEL_PROPERTY_KEYS`] is present.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A WGS84 point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A first-level administrative region, deserialized from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionDefinition {
    /// Unique short identifier (e.g. `"andijon"`).
    pub id: String,
    /// Key used for this region in the aggregate statistics datasets
    /// (e.g. `"Toshkent_shahri"`).
    pub raw_key: String,
    /// Display name as it appears in the boundary data
    /// (e.g. `"Toshkent sh."`).
    pub name: String,
    /// Fixed center used when placing synthetic incidents. Regions without
    /// a center still report totals but never produce markers.
    pub center: Option<Coordinates>,
    /// Where this region's district boundaries come from.
    pub districts: DistrictSource,
}

/// Source of a region's district-level boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DistrictSource {
    /// A `GeoJSON` `FeatureCollection` file under the boundaries directory.
    /// Its features are also merged into the country-level region index.
    File {
        /// File name relative to the boundaries directory.
        path: String,
    },
    /// A collection compiled into the binary.
    Builtin {
        /// Which built-in collection.
        collection: BuiltinCollection,
    },
    /// No district boundaries are available.
    None,
}

/// Boundary collections compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinCollection {
    /// The districts of Tashkent City.
    TashkentCity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_keys_prefer_generic_name() {
        assert_eq!(LABEL_PROPERTY_KEYS.first(), Some(&"name"));
    }
}
