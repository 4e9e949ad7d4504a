//! Deterministic fine-grained labelling of incidents.

use uzcrime_crime_models::{CrimeFilterKey, DatasetKey};

/// Returns the filter key for `incident_id` within `dataset`.
///
/// The result depends only on the two arguments, so the same incident is
/// always filed under the same label.
#[must_use]
pub fn classify(incident_id: &str, dataset: DatasetKey) -> CrimeFilterKey {
    classify_with(incident_id, dataset.filter_keys())
}

/// Picks a key from `keys` by hashing `incident_id`. An empty list yields
/// [`CrimeFilterKey::DEFAULT`].
#[must_use]
pub fn classify_with(incident_id: &str, keys: &[CrimeFilterKey]) -> CrimeFilterKey {
    if keys.is_empty() {
        return CrimeFilterKey::DEFAULT;
    }
    keys[id_hash(incident_id) as usize % keys.len()]
}

/// 31-multiplier polynomial hash over UTF-16 code units, modulo 2³².
#[must_use]
pub fn id_hash(incident_id: &str) -> u32 {
    incident_id
        .encode_utf16()
        .fold(0u32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(u32::from(unit))
        })
}
