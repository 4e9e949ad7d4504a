//! Region index assembly and district lookup.

use std::collections::BTreeMap;

use geojson::FeatureCollection;

use crate::normalize::normalize_collection;

/// Returns a `FeatureCollection` with no features.
#[must_use]
pub const fn empty_collection() -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: Vec::new(),
        foreign_members: None,
    }
}

/// Concatenates the features of every source, in source order, then
/// normalizes geometries and drops features left without one.
#[must_use]
pub fn build_region_index(sources: impl IntoIterator<Item = FeatureCollection>) -> FeatureCollection {
    let features = sources
        .into_iter()
        .flat_map(|source| source.features)
        .collect();

    normalize_collection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// Immutable mapping from region display name to its district collection.
#[derive(Debug, Clone, Default)]
pub struct RegionBoundarySet {
    districts: BTreeMap<String, FeatureCollection>,
}

impl RegionBoundarySet {
    /// Builds the set, normalizing every district collection.
    #[must_use]
    pub fn new(districts: impl IntoIterator<Item = (String, FeatureCollection)>) -> Self {
        Self {
            districts: districts
                .into_iter()
                .map(|(name, collection)| (name, normalize_collection(collection)))
                .collect(),
        }
    }

    /// Returns the districts of `region_name`, or an empty collection when
    /// the name is unknown. Matching is exact and case-sensitive.
    #[must_use]
    pub fn districts_for(&self, region_name: &str) -> FeatureCollection {
        self.districts
            .get(region_name)
            .cloned()
            .unwrap_or_else(empty_collection)
    }

    /// Region names that have a district entry, in sorted order.
    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.districts.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.districts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }
}
