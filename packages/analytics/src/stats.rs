//! Region statistics aggregation.

use uzcrime_analytics_models::{RegionStats, Trend};
use uzcrime_crime_models::CrimeType;
use uzcrime_incidents_models::{CrimeIncident, RegionTotal};

/// Multiplier applied to a district's share of incidents in
/// [`from_incidents`]. A district holding a quarter of all incidents
/// saturates at 100.
const INCIDENT_SHARE_MULTIPLIER: f64 = 400.0;

/// Statistics from aggregate totals.
///
/// Risk is each total relative to the largest one, rounded half up. The
/// divisor is at least 1, so all-zero totals score 0. Every region gets
/// [`Trend::Stable`] and `default_type` as its top category, since the
/// totals carry no per-type breakdown.
#[must_use]
pub fn from_totals(totals: &[RegionTotal], default_type: CrimeType) -> Vec<RegionStats> {
    let max = totals
        .iter()
        .map(|total| total.total_crimes)
        .max()
        .unwrap_or(0)
        .max(1);

    totals
        .iter()
        .map(|total| RegionStats {
            region_name: total.region_name.clone(),
            total_crimes: total.total_crimes,
            risk_score: relative_risk(total.total_crimes, max),
            trend: Trend::Stable,
            top_crime_type: default_type,
        })
        .collect()
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn relative_risk(total: u64, max: u64) -> u8 {
    let percent = (total as f64 / max as f64 * 100.0).round();
    percent.min(100.0) as u8
}

/// Statistics from individual incidents, one entry per distinct
/// `district`, in first-seen order.
///
/// The top category is the most frequent type in the group; ties go to
/// the type seen first. Risk is `min(100, floor(group / all * 400))`,
/// taken in floating point so shares like 29 of 200 land on 57.
#[must_use]
pub fn from_incidents(incidents: &[CrimeIncident]) -> Vec<RegionStats> {
    let mut groups: Vec<DistrictGroup<'_>> = Vec::new();

    for incident in incidents {
        let index = match groups.iter().position(|g| g.district == incident.district) {
            Some(index) => index,
            None => {
                groups.push(DistrictGroup {
                    district: &incident.district,
                    total: 0,
                    types: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[index].add(incident.crime_type);
    }

    let all = incidents.len() as u64;

    groups
        .into_iter()
        .map(|group| RegionStats {
            region_name: group.district.to_string(),
            total_crimes: group.total,
            risk_score: share_risk(group.total, all),
            trend: Trend::Stable,
            top_crime_type: group.top_type(),
        })
        .collect()
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn share_risk(group: u64, all: u64) -> u8 {
    if all == 0 {
        return 0;
    }
    // Share first, then scale. Integer `group * 400 / all` gives 58 for 29 of 200.
    let score = (group as f64 / all as f64 * INCIDENT_SHARE_MULTIPLIER).floor();
    score.min(100.0) as u8
}

struct DistrictGroup<'a> {
    district: &'a str,
    total: u64,
    /// Per-type counts in first-seen order.
    types: Vec<(CrimeType, u64)>,
}

impl DistrictGroup<'_> {
    fn add(&mut self, crime_type: CrimeType) {
        self.total += 1;
        match self.types.iter_mut().find(|(t, _)| *t == crime_type) {
            Some((_, count)) => *count += 1,
            None => self.types.push((crime_type, 1)),
        }
    }

    fn top_type(&self) -> CrimeType {
        let mut top: Option<(CrimeType, u64)> = None;
        for &(crime_type, count) in &self.types {
            if top.is_none_or(|(_, best)| count > best) {
                top = Some((crime_type, count));
            }
        }
        top.map_or(CrimeType::Theft, |(crime_type, _)| crime_type)
    }
}
