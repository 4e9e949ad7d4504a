//! Compile-time registry of Uzbekistan's first-level regions.
//!
//! Each entry is a `(id, toml_content)` pair embedded via `include_str!`.
//! The definitions carry every static table the pipeline needs: raw
//! dataset key → display name, display name → center coordinate, and
//! display name → district boundary source.

use std::sync::LazyLock;

use uzcrime_geography_models::RegionDefinition;

/// Country-level boundary file, merged ahead of every region's file.
pub const COUNTRY_BOUNDARY_FILE: &str = "regions.json";

/// Number of registered regions. Enforced by a test.
#[cfg(test)]
const EXPECTED_REGION_COUNT: usize = 14;

/// Embedded TOML region definitions. Order is the boundary merge order.
const REGION_TOMLS: &[(&str, &str)] = &[
    ("andijon", include_str!("../regions/andijon.toml")),
    ("buxoro", include_str!("../regions/buxoro.toml")),
    ("fargona", include_str!("../regions/fargona.toml")),
    ("jizzax", include_str!("../regions/jizzax.toml")),
    ("namangan", include_str!("../regions/namangan.toml")),
    ("navoiy", include_str!("../regions/navoiy.toml")),
    ("qashqadaryo", include_str!("../regions/qashqadaryo.toml")),
    (
        "qoraqalpogiston",
        include_str!("../regions/qoraqalpogiston.toml"),
    ),
    ("samarqand", include_str!("../regions/samarqand.toml")),
    ("sirdaryo", include_str!("../regions/sirdaryo.toml")),
    ("surxondaryo", include_str!("../regions/surxondaryo.toml")),
    (
        "toshkent_viloyati",
        include_str!("../regions/toshkent_viloyati.toml"),
    ),
    ("xorazm", include_str!("../regions/xorazm.toml")),
    (
        "toshkent_shahri",
        include_str!("../regions/toshkent_shahri.toml"),
    ),
];

static REGIONS: LazyLock<Vec<RegionDefinition>> = LazyLock::new(|| {
    REGION_TOMLS
        .iter()
        .map(|(id, toml_str)| {
            toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse region definition '{id}': {e}"))
        })
        .collect()
});

/// Returns all registered regions in merge order.
///
/// # Panics
///
/// Panics if any embedded TOML file fails to parse. Since these are
/// compile-time constants, parse failures indicate a development error
/// and are caught by this module's tests.
#[must_use]
pub fn all_regions() -> &'static [RegionDefinition] {
    &REGIONS
}

/// Looks up a region by the raw key used in the aggregate datasets.
#[must_use]
pub fn by_raw_key(raw_key: &str) -> Option<&'static RegionDefinition> {
    all_regions().iter().find(|r| r.raw_key == raw_key)
}

/// Looks up a region by its exact display name.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static RegionDefinition> {
    all_regions().iter().find(|r| r.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use uzcrime_geography_models::{BuiltinCollection, DistrictSource};

    use super::*;

    #[test]
    fn loads_all_regions() {
        let regions = all_regions();
        assert_eq!(
            regions.len(),
            EXPECTED_REGION_COUNT,
            "Expected {EXPECTED_REGION_COUNT} regions, found {}. \
             Update EXPECTED_REGION_COUNT after adding/removing regions.",
            regions.len()
        );
    }

    #[test]
    fn registry_ids_match_definitions() {
        for ((id, _), region) in REGION_TOMLS.iter().zip(all_regions()) {
            assert_eq!(*id, region.id);
        }
    }

    #[test]
    fn keys_and_names_are_unique() {
        let mut raw_keys = BTreeSet::new();
        let mut names = BTreeSet::new();
        let mut files = BTreeSet::new();
        for region in all_regions() {
            assert!(raw_keys.insert(&region.raw_key), "Duplicate raw key: {}", region.raw_key);
            assert!(names.insert(&region.name), "Duplicate name: {}", region.name);
            if let DistrictSource::File { path } = &region.districts {
                assert!(files.insert(path), "Duplicate boundary file: {path}");
                assert!(
                    std::path::Path::new(path)
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case("json")),
                    "{path} is not a JSON file"
                );
            }
        }
        assert!(!files.contains(&COUNTRY_BOUNDARY_FILE.to_string()));
    }

    #[test]
    fn centers_are_inside_uzbekistan() {
        for region in all_regions() {
            let center = region.center.expect("every region has a center");
            assert!((37.0..=46.0).contains(&center.lat), "{}: lat {}", region.name, center.lat);
            assert!((55.0..=74.0).contains(&center.lng), "{}: lng {}", region.name, center.lng);
        }
    }

    #[test]
    fn lookups_are_exact() {
        let tashkent = by_raw_key("Toshkent_shahri").unwrap();
        assert_eq!(tashkent.name, "Toshkent sh.");
        assert_eq!(
            tashkent.districts,
            DistrictSource::Builtin {
                collection: BuiltinCollection::TashkentCity
            }
        );

        assert_eq!(by_name("Farg'ona viloyati").unwrap().raw_key, "Fargona");
        assert!(by_name("farg'ona viloyati").is_none());
        assert!(by_raw_key("jami_respublika").is_none());
    }
}
