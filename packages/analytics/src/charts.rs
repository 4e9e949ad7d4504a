//! Chart series and dashboard headline numbers.

use uzcrime_analytics_models::{CategoryShare, DashboardSummary, HIGH_RISK_THRESHOLD, RegionStats};
use uzcrime_crime_models::CrimeType;
use uzcrime_incidents_models::CrimeIncident;

/// Regions ordered by total, largest first. Equal totals keep their
/// input order.
#[must_use]
pub fn regions_by_total(stats: &[RegionStats]) -> Vec<RegionStats> {
    let mut sorted = stats.to_vec();
    sorted.sort_by(|a, b| b.total_crimes.cmp(&a.total_crimes));
    sorted
}

/// Share of each crime type among `incidents`, largest first. Types tie
/// in first-seen order. Shares are computed against at least one
/// incident, so an empty input yields an empty series.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn crime_type_distribution<'a>(
    incidents: impl IntoIterator<Item = &'a CrimeIncident>,
) -> Vec<CategoryShare> {
    let mut counts: Vec<(CrimeType, u64)> = Vec::new();
    let mut total = 0u64;

    for incident in incidents {
        total += 1;
        match counts.iter_mut().find(|(t, _)| *t == incident.crime_type) {
            Some((_, count)) => *count += 1,
            None => counts.push((incident.crime_type, 1)),
        }
    }

    let denominator = total.max(1) as f64;
    let mut series: Vec<CategoryShare> = counts
        .into_iter()
        .map(|(crime_type, value)| CategoryShare {
            name: crime_type,
            value,
            share: value as f64 / denominator,
            color: crime_type.color().to_string(),
        })
        .collect();

    series.sort_by(|a, b| b.share.total_cmp(&a.share));
    series
}

/// Headline numbers for the dashboard cards.
#[must_use]
pub fn dashboard_summary(incident_count: usize, stats: &[RegionStats]) -> DashboardSummary {
    DashboardSummary {
        incident_count: incident_count as u64,
        high_risk_regions: stats
            .iter()
            .filter(|s| s.risk_score > HIGH_RISK_THRESHOLD)
            .count() as u64,
        region_count: stats.len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Utc};
    use uzcrime_analytics_models::Trend;
    use uzcrime_geography_models::Coordinates;

    use super::*;

    fn stats(name: &str, total: u64, risk: u8) -> RegionStats {
        RegionStats {
            region_name: name.to_string(),
            total_crimes: total,
            risk_score: risk,
            trend: Trend::Stable,
            top_crime_type: CrimeType::Theft,
        }
    }

    fn incident(crime_type: CrimeType) -> CrimeIncident {
        CrimeIncident {
            id: "UZ-1000".to_string(),
            crime_type,
            date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            location: Coordinates::new(41.3, 69.2),
            region: "Tashkent".to_string(),
            district: "Olmazor".to_string(),
            description: String::new(),
            severity: crime_type.default_severity(),
        }
    }

    #[test]
    fn regions_sort_by_total_descending_and_stably() {
        let sorted = regions_by_total(&[
            stats("A", 5, 10),
            stats("B", 50, 100),
            stats("C", 5, 10),
        ]);
        let names: Vec<&str> = sorted.iter().map(|s| s.region_name.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn distribution_shares_sum_to_one() {
        let incidents = [
            incident(CrimeType::Assault),
            incident(CrimeType::Theft),
            incident(CrimeType::Theft),
            incident(CrimeType::Homicide),
        ];
        let series = crime_type_distribution(&incidents);

        assert_eq!(series[0].name, CrimeType::Theft);
        assert_eq!(series[0].value, 2);
        assert!((series[0].share - 0.5).abs() < f64::EPSILON);
        // Assault was seen before Homicide.
        assert_eq!(series[1].name, CrimeType::Assault);
        assert_eq!(series[2].name, CrimeType::Homicide);
        assert_eq!(series[2].color, "#dc2626");

        let sum: f64 = series.iter().map(|s| s.share).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_distribution_is_empty() {
        assert!(crime_type_distribution(&Vec::<CrimeIncident>::new()).is_empty());
    }

    #[test]
    fn summary_counts_regions_strictly_above_threshold() {
        let summary = dashboard_summary(
            12,
            &[stats("A", 1, 100), stats("B", 1, 71), stats("C", 1, 70), stats("D", 1, 0)],
        );
        assert_eq!(
            summary,
            DashboardSummary {
                incident_count: 12,
                high_risk_regions: 2,
                region_count: 4,
            }
        );
    }
}
