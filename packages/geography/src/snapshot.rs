//! The process-wide, read-only boundary snapshot.

use std::collections::BTreeMap;
use std::path::Path;

use geojson::FeatureCollection;
use uzcrime_geography_models::{DistrictSource, RegionDefinition};

use crate::fixtures;
use crate::index::{RegionBoundarySet, build_region_index, empty_collection};
use crate::loader::read_or_empty;
use crate::registry::{self, COUNTRY_BOUNDARY_FILE};

/// Every boundary layer of the drill-down, built once at startup.
#[derive(Debug, Clone)]
pub struct GeoSnapshot {
    border: FeatureCollection,
    regions: FeatureCollection,
    districts: RegionBoundarySet,
    neighborhoods: BTreeMap<String, FeatureCollection>,
}

impl GeoSnapshot {
    /// Loads boundary files from `boundaries_dir` for every registered
    /// region. Missing or unreadable files are logged and treated as empty.
    #[must_use]
    pub fn load(boundaries_dir: &Path) -> Self {
        log::info!("Loading boundaries from {}", boundaries_dir.display());

        let country = read_or_empty(&boundaries_dir.join(COUNTRY_BOUNDARY_FILE));
        let regions = registry::all_regions()
            .iter()
            .map(|region| {
                let districts = match &region.districts {
                    DistrictSource::File { path } => read_or_empty(&boundaries_dir.join(path)),
                    DistrictSource::Builtin { collection } => fixtures::builtin(*collection),
                    DistrictSource::None => empty_collection(),
                };
                (region, districts)
            })
            .collect::<Vec<_>>();

        let snapshot = Self::from_sources(country, regions);
        log::info!(
            "Boundary snapshot ready: {} region-index features, {} regions with districts",
            snapshot.regions.features.len(),
            snapshot.districts.len()
        );
        snapshot
    }

    /// Builds a snapshot from already-parsed sources.
    ///
    /// The region index is `country` followed by every file-backed region
    /// source, in the order given. Built-in collections only feed the
    /// district lookup.
    #[must_use]
    pub fn from_sources(
        country: FeatureCollection,
        regions: Vec<(&RegionDefinition, FeatureCollection)>,
    ) -> Self {
        let mut index_sources = vec![country];
        let mut districts = Vec::with_capacity(regions.len());

        for (region, collection) in regions {
            if matches!(region.districts, DistrictSource::File { .. }) {
                index_sources.push(collection.clone());
            }
            districts.push((region.name.clone(), collection));
        }

        let mut neighborhoods = BTreeMap::new();
        neighborhoods.insert(
            fixtures::MAHALLA_DISTRICT.to_string(),
            fixtures::chilonzor_mahallas(),
        );

        Self {
            border: fixtures::uzbekistan_border(),
            regions: build_region_index(index_sources),
            districts: RegionBoundarySet::new(districts),
            neighborhoods,
        }
    }

    /// The country outline.
    #[must_use]
    pub const fn border(&self) -> &FeatureCollection {
        &self.border
    }

    /// The merged, normalized country-level region index.
    #[must_use]
    pub const fn region_index(&self) -> &FeatureCollection {
        &self.regions
    }

    /// Districts of a region by exact display name; empty when unknown.
    #[must_use]
    pub fn districts_for(&self, region_name: &str) -> FeatureCollection {
        self.districts.districts_for(region_name)
    }

    /// Display names of the regions with a district entry, sorted.
    pub fn district_regions(&self) -> impl Iterator<Item = &str> {
        self.districts.region_names()
    }

    /// Neighborhoods of a district by exact name; empty when unknown.
    #[must_use]
    pub fn neighborhoods_for(&self, district_name: &str) -> FeatureCollection {
        self.neighborhoods
            .get(district_name)
            .cloned()
            .unwrap_or_else(empty_collection)
    }
}
