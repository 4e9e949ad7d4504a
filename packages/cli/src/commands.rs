//! Subcommand implementations.

use std::path::{Path, PathBuf};

use chrono::Utc;
use geojson::FeatureCollection;
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use uzcrime_ai::analyst::Analyst;
use uzcrime_analytics::{charts, filter, stats as aggregate};
use uzcrime_analytics_models::{IncidentQuery, RegionStats};
use uzcrime_crime_models::{DatasetKey, Language};
use uzcrime_geography::label::feature_label;
use uzcrime_geography::registry;
use uzcrime_geography::snapshot::GeoSnapshot;
use uzcrime_geography_models::DistrictSource;
use uzcrime_incidents::classify::classify as classify_id;
use uzcrime_incidents::mock::{generate_mock_crimes, generate_mock_crimes_with};
use uzcrime_incidents::snapshot::IncidentSnapshot;
use uzcrime_incidents_models::CrimeIncident;

use crate::Scope;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Options every subcommand sees.
pub struct Context {
    pub data_dir: PathBuf,
    pub seed: Option<u64>,
    pub language: Language,
}

impl Context {
    fn geo(&self) -> GeoSnapshot {
        GeoSnapshot::load(&self.data_dir.join("boundaries"))
    }

    fn incidents(&self) -> IncidentSnapshot {
        IncidentSnapshot::load(&self.data_dir.join("datasets"), self.seed)
    }
}

impl Scope {
    fn query(&self) -> IncidentQuery {
        IncidentQuery {
            search: self.search.clone().filter(|s| !s.is_empty()),
            filter: self.filter,
        }
    }
}

/// Filtered incidents and total-based statistics under one scope.
fn view<'a>(
    snapshot: &'a IncidentSnapshot,
    scope: &Scope,
) -> (Vec<&'a CrimeIncident>, Vec<RegionStats>) {
    let query = scope.query();
    let incidents =
        filter::filter_incidents(snapshot.incidents(scope.dataset), scope.dataset, &query);
    let totals = filter::filter_totals(snapshot.totals(scope.dataset), query.search.as_deref());
    let stats = aggregate::from_totals(&totals, filter::default_crime_type(&incidents));
    (incidents, stats)
}

fn print_labels(collection: &FeatureCollection) {
    for feature in &collection.features {
        println!("  {}", feature_label(feature.properties.as_ref()));
    }
}

pub fn regions(ctx: &Context) {
    println!("{:<20} {:<32} {:<20} Districts", "Raw key", "Name", "Center");
    for region in registry::all_regions() {
        let center = region
            .center
            .map_or_else(|| "-".to_string(), |c| format!("{:.4}, {:.4}", c.lat, c.lng));
        let districts = match &region.districts {
            DistrictSource::File { path } => path.clone(),
            DistrictSource::Builtin { collection } => format!("builtin:{collection:?}"),
            DistrictSource::None => "-".to_string(),
        };
        println!(
            "{:<20} {:<32} {center:<20} {districts}",
            region.raw_key, region.name
        );
    }

    let geo = ctx.geo();
    println!();
    println!("Region index: {} features", geo.region_index().features.len());
    print_labels(geo.region_index());

    println!();
    println!("District boundaries:");
    for name in geo.district_regions() {
        println!("  {name:<32} {:>4}", geo.districts_for(name).features.len());
    }
}

pub fn districts(ctx: &Context, name: &str, neighborhoods: bool) {
    let geo = ctx.geo();
    let collection = if neighborhoods {
        geo.neighborhoods_for(name)
    } else {
        geo.districts_for(name)
    };

    println!("{name}: {} features", collection.features.len());
    print_labels(&collection);
}

pub fn datasets(ctx: &Context) {
    for dataset in DatasetKey::all() {
        println!("{dataset} - {}", dataset.label(ctx.language));
        for key in dataset.filter_keys() {
            println!("  {:<20} {}", key.as_ref(), key.label(ctx.language));
        }
    }
}

fn write_json<T: serde::Serialize + ?Sized>(value: &T, output: Option<&Path>) -> CmdResult {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn generate(ctx: &Context, scope: &Scope, output: Option<&Path>) -> CmdResult {
    let snapshot = ctx.incidents();
    let (incidents, _) = view(&snapshot, scope);
    write_json(&incidents, output)
}

pub fn mock(ctx: &Context, count: usize) -> CmdResult {
    let incidents = match ctx.seed {
        Some(seed) => {
            generate_mock_crimes_with(count, Utc::now(), &mut StdRng::seed_from_u64(seed))
        }
        None => generate_mock_crimes(count),
    };
    write_json(&incidents, None)
}

pub fn totals(ctx: &Context, scope: &Scope) {
    let snapshot = ctx.incidents();
    let totals = filter::filter_totals(
        snapshot.totals(scope.dataset),
        scope.query().search.as_deref(),
    );

    for total in &totals {
        println!("{:<32} {:>8}", total.region_name, total.total_crimes);
    }
    println!(
        "{} regions, {} cases",
        totals.len(),
        totals.iter().map(|t| t.total_crimes).sum::<u64>()
    );
}

fn print_stats(stats: &[RegionStats]) {
    println!(
        "{:<32} {:>8} {:>5} {:<8} Top type",
        "Region", "Total", "Risk", "Trend"
    );
    for s in stats {
        let trend = format!("{:?}", s.trend);
        println!(
            "{:<32} {:>8} {:>5} {trend:<8} {}",
            s.region_name, s.total_crimes, s.risk_score, s.top_crime_type
        );
    }
}

pub fn stats(ctx: &Context, scope: &Scope, mock: bool) {
    let snapshot = ctx.incidents();

    let (incidents, stats) = if mock {
        let crimes = snapshot.mock_crimes();
        (crimes.iter().collect(), aggregate::from_incidents(crimes))
    } else {
        view(&snapshot, scope)
    };

    print_stats(&charts::regions_by_total(&stats));

    println!();
    println!("Crime types:");
    for share in charts::crime_type_distribution(incidents.iter().copied()) {
        println!(
            "  {:<20} {:>6} {:>6.2}",
            share.name.as_ref(),
            share.value,
            share.share
        );
    }

    let summary = charts::dashboard_summary(incidents.len(), &stats);
    println!();
    println!(
        "{} incidents, {} regions, {} high risk",
        summary.incident_count, summary.region_count, summary.high_risk_regions
    );
}

pub fn classify(ctx: &Context, ids: &[String], dataset: DatasetKey) {
    for id in ids {
        let key = classify_id(id, dataset);
        println!("{id}\t{key}\t{}", key.label(ctx.language));
    }
}

pub async fn analyze(ctx: &Context, scope: &Scope) {
    let snapshot = ctx.incidents();
    let (_, stats) = view(&snapshot, scope);

    let analyst = Analyst::from_env();
    println!("{}", analyst.summarize(&stats, ctx.language).await);
}

pub async fn chat(ctx: &Context, message: &str, scope: &Scope) {
    let snapshot = ctx.incidents();
    let (incidents, stats) = view(&snapshot, scope);

    let analyst = Analyst::from_env();
    let reply = analyst
        .chat(
            message,
            &stats,
            incidents.iter().copied(),
            &[],
            ctx.language,
        )
        .await;
    println!("{reply}");
}
