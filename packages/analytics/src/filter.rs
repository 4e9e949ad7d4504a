//! Incident table and region totals filtering.

use uzcrime_analytics_models::IncidentQuery;
use uzcrime_crime_models::{CrimeType, DatasetKey};
use uzcrime_incidents::classify::classify;
use uzcrime_incidents_models::{CrimeIncident, RegionTotal};

/// Returns the incidents of `dataset` matching `query`, in input order.
///
/// The search text matches case-insensitively anywhere in the district or
/// description. The filter key is compared against [`classify`] of each
/// incident id.
#[must_use]
pub fn filter_incidents<'a>(
    incidents: &'a [CrimeIncident],
    dataset: DatasetKey,
    query: &IncidentQuery,
) -> Vec<&'a CrimeIncident> {
    let needle = query.search.as_deref().map(str::to_lowercase);

    incidents
        .iter()
        .filter(|incident| {
            needle.as_deref().is_none_or(|needle| {
                incident.district.to_lowercase().contains(needle)
                    || incident.description.to_lowercase().contains(needle)
            })
        })
        .filter(|incident| {
            query
                .filter
                .is_none_or(|key| classify(&incident.id, dataset) == key)
        })
        .collect()
}

/// Returns the totals whose region name contains `search`,
/// case-insensitively.
#[must_use]
pub fn filter_totals(totals: &[RegionTotal], search: Option<&str>) -> Vec<RegionTotal> {
    let needle = search.map(str::to_lowercase);

    totals
        .iter()
        .filter(|total| {
            needle
                .as_deref()
                .is_none_or(|needle| total.region_name.to_lowercase().contains(needle))
        })
        .cloned()
        .collect()
}

/// Category attributed to total-based statistics: the type of the first
/// filtered incident, or [`CrimeType::Theft`] when nothing matched.
#[must_use]
pub fn default_crime_type(filtered: &[&CrimeIncident]) -> CrimeType {
    filtered
        .first()
        .map_or(CrimeType::Theft, |incident| incident.crime_type)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Utc};
    use uzcrime_crime_models::{CrimeFilterKey, Severity};
    use uzcrime_geography_models::Coordinates;

    use super::*;

    fn incident(id: &str, district: &str, description: &str) -> CrimeIncident {
        CrimeIncident {
            id: id.to_string(),
            crime_type: CrimeType::Burglary,
            date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            location: Coordinates::new(41.0, 69.0),
            region: "Uzbekistan".to_string(),
            district: district.to_string(),
            description: description.to_string(),
            severity: Severity::Low,
        }
    }

    fn sample() -> Vec<CrimeIncident> {
        vec![
            incident("OLDINI_OLISH-00001", "Toshkent sh.", "Toshkent sh.: 90 ta holat"),
            incident("OLDINI_OLISH-00002", "Andijon viloyati", "Andijon viloyati: 10 ta holat"),
            incident("OLDINI_OLISH-00003", "Xorazm viloyati", "Urganch yaqinida"),
        ]
    }

    #[test]
    fn empty_query_keeps_everything() {
        let incidents = sample();
        let filtered = filter_incidents(&incidents, DatasetKey::OldiniOlish, &IncidentQuery::default());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_on_district_or_description() {
        let incidents = sample();
        let query = |search: &str| IncidentQuery {
            search: Some(search.to_string()),
            filter: None,
        };

        let ids = |q: IncidentQuery| {
            filter_incidents(&incidents, DatasetKey::OldiniOlish, &q)
                .iter()
                .map(|i| i.id.clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(ids(query("TOSHKENT")), ["OLDINI_OLISH-00001"]);
        assert_eq!(ids(query("urganch")), ["OLDINI_OLISH-00003"]);
        assert_eq!(ids(query("viloyati")).len(), 2);
        assert!(ids(query("samarqand")).is_empty());
    }

    #[test]
    fn filter_key_uses_the_classifier() {
        let incidents = sample();
        for key in DatasetKey::OldiniOlish.filter_keys() {
            let query = IncidentQuery {
                search: None,
                filter: Some(*key),
            };
            for incident in filter_incidents(&incidents, DatasetKey::OldiniOlish, &query) {
                assert_eq!(classify(&incident.id, DatasetKey::OldiniOlish), *key);
            }
        }

        let query = IncidentQuery {
            search: None,
            filter: Some(CrimeFilterKey::Bribery),
        };
        assert!(filter_incidents(&incidents, DatasetKey::OldiniOlish, &query).is_empty());
    }

    #[test]
    fn totals_filter_by_region_name() {
        let totals = [
            RegionTotal::new("Toshkent sh.", 5),
            RegionTotal::new("Toshkent viloyati", 4),
            RegionTotal::new("Navoiy viloyati", 3),
        ];
        assert_eq!(filter_totals(&totals, Some("toshkent")).len(), 2);
        assert_eq!(filter_totals(&totals, None).len(), 3);
        assert_eq!(filter_totals(&totals, Some("")).len(), 3);
    }

    #[test]
    fn default_type_follows_first_match() {
        let incidents = sample();
        let all: Vec<&CrimeIncident> = incidents.iter().collect();
        assert_eq!(default_crime_type(&all), CrimeType::Burglary);
        assert_eq!(default_crime_type(&[]), CrimeType::Theft);
    }
}
