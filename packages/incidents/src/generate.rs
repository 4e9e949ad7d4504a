//! Synthetic incident generation from aggregate region counts.

use chrono::{DateTime, Utc};
use rand::Rng;
use uzcrime_crime_models::{DatasetKey, Severity};
use uzcrime_geography::registry;
use uzcrime_incidents_models::CrimeIncident;

use crate::dataset::RawRegionCount;
use crate::sampler::sample_point;

/// Cases represented by one generated incident.
pub const INCIDENT_SCALE: u64 = 100;

/// Sampling radius around a region center.
pub const DATASET_RADIUS_KM: f64 = 18.0;

/// `region` field of every dataset incident.
pub const DATASET_REGION_LABEL: &str = "Uzbekistan";

/// Number of incidents a region with `total` cases expands to:
/// `total / 100` rounded half up, at least one.
#[must_use]
pub const fn points_for_total(total: u64) -> u64 {
    let points = total.saturating_add(INCIDENT_SCALE / 2) / INCIDENT_SCALE;
    if points == 0 { 1 } else { points }
}

/// Severity of every incident generated for a region with `cases` recorded
/// cases, compared before any rounding.
#[must_use]
pub const fn severity_for_cases(cases: f64) -> Severity {
    if cases > 5000.0 {
        Severity::Critical
    } else if cases > 2500.0 {
        Severity::High
    } else if cases > 1200.0 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Formats the id of the `counter`-th incident of `dataset`.
#[must_use]
pub fn incident_id(dataset: DatasetKey, counter: u64) -> String {
    format!("{}-{counter:05}", dataset.id_prefix())
}

/// Expands `counts` into incidents using the current time and the thread
/// RNG.
#[must_use]
pub fn generate(dataset: DatasetKey, counts: &[RawRegionCount]) -> Vec<CrimeIncident> {
    generate_with(dataset, counts, Utc::now(), &mut rand::rng())
}

/// Expands `counts` into incidents.
///
/// Regions are visited in the order given. Unmapped raw keys and regions
/// without a center are skipped. Ids are numbered from 1 across the whole
/// call, so they are unique within the returned set.
#[must_use]
pub fn generate_with<R: Rng + ?Sized>(
    dataset: DatasetKey,
    counts: &[RawRegionCount],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<CrimeIncident> {
    let crime_type = dataset.crime_type();
    let mut incidents = Vec::new();
    let mut counter = 0u64;

    for count in counts {
        let Some(region) = registry::by_raw_key(&count.raw_key) else {
            log::warn!("[{dataset}] Skipping unmapped region key '{}'", count.raw_key);
            continue;
        };
        let Some(center) = region.center else {
            log::debug!("[{dataset}] Region '{}' has no center", region.name);
            continue;
        };

        let severity = severity_for_cases(count.value);
        let description = format!("{}: {} ta holat", region.name, count.value);

        for _ in 0..points_for_total(count.total) {
            counter += 1;
            incidents.push(CrimeIncident {
                id: incident_id(dataset, counter),
                crime_type,
                date: now,
                location: sample_point(center, DATASET_RADIUS_KM, rng),
                region: DATASET_REGION_LABEL.to_string(),
                district: region.name.clone(),
                description: description.clone(),
                severity,
            });
        }
    }

    log::debug!("[{dataset}] Generated {} incidents", incidents.len());
    incidents
}
