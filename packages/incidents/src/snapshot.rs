//! Per-dataset incidents and totals, generated once at startup.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng as _};
use uzcrime_crime_models::DatasetKey;
use uzcrime_incidents_models::{CrimeIncident, RegionTotal};

use crate::dataset::{RawRegionCount, read_aggregate, region_totals};
use crate::generate::generate_with;
use crate::mock::{DEFAULT_MOCK_COUNT, generate_mock_crimes_with};

/// Generated incidents and mapped totals for one dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetSnapshot {
    pub incidents: Vec<CrimeIncident>,
    pub totals: Vec<RegionTotal>,
}

/// Immutable view over every dataset plus the mock Tashkent incidents.
#[derive(Debug, Clone, Default)]
pub struct IncidentSnapshot {
    datasets: BTreeMap<DatasetKey, DatasetSnapshot>,
    mock: Vec<CrimeIncident>,
}

impl IncidentSnapshot {
    /// Reads every dataset file from `datasets_dir` and generates its
    /// incidents. A file that cannot be read or parsed is logged and
    /// treated as an empty dataset.
    ///
    /// With `seed`, marker positions and mock incidents are reproducible.
    #[must_use]
    pub fn load(datasets_dir: &Path, seed: Option<u64>) -> Self {
        log::info!("Loading datasets from {}", datasets_dir.display());

        let sources = DatasetKey::all().iter().map(|dataset| {
            let path = datasets_dir.join(dataset.file_name());
            let counts = read_aggregate(&path).unwrap_or_else(|e| {
                log::warn!("Failed to load dataset {}: {e}", path.display());
                Vec::new()
            });
            (*dataset, counts)
        });

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let snapshot = Self::from_counts(sources, Utc::now(), &mut rng);

        for (dataset, data) in &snapshot.datasets {
            log::info!(
                "[{dataset}] {} regions, {} incidents",
                data.totals.len(),
                data.incidents.len()
            );
        }
        snapshot
    }

    /// Builds a snapshot from already-parsed counts.
    #[must_use]
    pub fn from_counts<R: Rng + ?Sized>(
        sources: impl IntoIterator<Item = (DatasetKey, Vec<RawRegionCount>)>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Self {
        let datasets = sources
            .into_iter()
            .map(|(dataset, counts)| {
                let data = DatasetSnapshot {
                    incidents: generate_with(dataset, &counts, now, rng),
                    totals: region_totals(&counts),
                };
                (dataset, data)
            })
            .collect();

        Self {
            datasets,
            mock: generate_mock_crimes_with(DEFAULT_MOCK_COUNT, now, rng),
        }
    }

    /// Incidents generated for `dataset`; empty if it was not loaded.
    #[must_use]
    pub fn incidents(&self, dataset: DatasetKey) -> &[CrimeIncident] {
        self.datasets
            .get(&dataset)
            .map(|data| data.incidents.as_slice())
            .unwrap_or_default()
    }

    /// Mapped region totals for `dataset`; empty if it was not loaded.
    #[must_use]
    pub fn totals(&self, dataset: DatasetKey) -> &[RegionTotal] {
        self.datasets
            .get(&dataset)
            .map(|data| data.totals.as_slice())
            .unwrap_or_default()
    }

    /// Randomized Tashkent City incidents.
    #[must_use]
    pub fn mock_crimes(&self) -> &[CrimeIncident] {
        &self.mock
    }
}
