//! Randomized Tashkent City incidents for demo views.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::IndexedRandom as _;
use uzcrime_crime_models::CrimeType;
use uzcrime_geography_models::Coordinates;
use uzcrime_incidents_models::CrimeIncident;

use crate::sampler::sample_point;

/// Default number of mock incidents held by a snapshot.
pub const DEFAULT_MOCK_COUNT: usize = 200;

/// Districts mock incidents are spread over.
pub const TASHKENT_DISTRICTS: [&str; 12] = [
    "Chilonzor",
    "Yunusobod",
    "Mirzo Ulugbek",
    "Yashnobod",
    "Sergeli",
    "Shayxontohur",
    "Olmazor",
    "Uchtepa",
    "Bektemir",
    "Mirobod",
    "Yakkasaray",
    "Yangihayot",
];

/// City center used as the base of every district cluster.
pub const TASHKENT_CENTER: Coordinates = Coordinates::new(41.311_081, 69.240_562);

/// `region` field of every mock incident.
pub const MOCK_REGION_LABEL: &str = "Tashkent";

const MOCK_RADIUS_KM: f64 = 3.5;
const REPORT_WINDOW_DAYS: i64 = 30;
const FIRST_MOCK_ID: usize = 1000;

/// Cluster center for `district`. Most districts share the city center;
/// a few are shifted so their markers form separate clusters.
#[must_use]
pub fn district_center(district: &str) -> Coordinates {
    let Coordinates { lat, lng } = TASHKENT_CENTER;
    match district {
        "Yunusobod" => Coordinates::new(lat + 0.05, lng),
        "Sergeli" => Coordinates::new(lat - 0.05, lng),
        "Yashnobod" => Coordinates::new(lat, lng + 0.05),
        "Chilonzor" => Coordinates::new(lat, lng - 0.04),
        _ => TASHKENT_CENTER,
    }
}

/// Generates `count` mock incidents using the current time and the thread
/// RNG.
#[must_use]
pub fn generate_mock_crimes(count: usize) -> Vec<CrimeIncident> {
    generate_mock_crimes_with(count, Utc::now(), &mut rand::rng())
}

/// Generates `count` mock incidents reported within the 30 days up to
/// `now`.
#[must_use]
pub fn generate_mock_crimes_with<R: Rng + ?Sized>(
    count: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<CrimeIncident> {
    (0..count)
        .map(|i| {
            let crime_type = CrimeType::all()
                .choose(rng)
                .copied()
                .unwrap_or(CrimeType::Theft);
            let district = TASHKENT_DISTRICTS
                .choose(rng)
                .copied()
                .unwrap_or(TASHKENT_DISTRICTS[0]);
            let days_ago = rng.random_range(0..REPORT_WINDOW_DAYS);

            CrimeIncident {
                id: format!("UZ-{}", FIRST_MOCK_ID + i),
                crime_type,
                date: now - Duration::days(days_ago),
                location: sample_point(district_center(district), MOCK_RADIUS_KM, rng),
                region: MOCK_REGION_LABEL.to_string(),
                district: district.to_string(),
                description: format!(
                    "Reported incident of {} in {district}.",
                    crime_type.to_string().to_lowercase()
                ),
                severity: crime_type.default_severity(),
            }
        })
        .collect()
}
