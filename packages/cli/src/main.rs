#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the uzcrime toolchain.
//!
//! Exposes every read operation of the pipeline (boundaries, generated
//! incidents, totals, statistics, classification, AI analysis) plus the
//! offline boundary repair tools and the API server.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uzcrime_crime_models::{CrimeFilterKey, DatasetKey, Language};
use uzcrime_incidents::mock::DEFAULT_MOCK_COUNT;

// ---------------------------------------------------------------------------
// CLI definitions
// ---------------------------------------------------------------------------

/// Uzbekistan crime map toolchain.
#[derive(Parser)]
#[command(name = "uzcrime")]
#[command(about = "Uzbekistan crime map toolchain")]
struct Cli {
    /// Data directory holding `boundaries/` and `datasets/`.
    /// Defaults to `UZCRIME_DATA_DIR`, then `data`.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Seed for marker placement and mock incidents.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Language for labels and AI answers (en, uz, ru).
    #[arg(long, global = true, default_value = "uz")]
    lang: Language,

    /// Subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Dataset selection and incident filters shared by several subcommands.
#[derive(clap::Args)]
struct Scope {
    /// Dataset key.
    #[arg(long, default_value = "aniqlanadigan")]
    dataset: DatasetKey,

    /// Case-insensitive search over district, description, and region name.
    #[arg(long)]
    search: Option<String>,

    /// Fine-grained label filter (e.g. `theft`, `fraud`).
    #[arg(long)]
    filter: Option<CrimeFilterKey>,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Start the API server.
    Serve,

    /// List registered regions along with the loaded boundary layers.
    Regions,

    /// List the districts of a region, or the neighborhoods of a district.
    Districts {
        /// Region display name (e.g. "Toshkent sh.").
        name: String,

        /// Treat `name` as a district and list its neighborhoods.
        #[arg(long)]
        neighborhoods: bool,
    },

    /// List datasets with their translated filter labels.
    Datasets,

    /// Print generated incidents as JSON.
    Generate {
        #[command(flatten)]
        scope: Scope,

        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print randomized Tashkent City incidents as JSON.
    Mock {
        /// Number of incidents.
        #[arg(long, default_value_t = DEFAULT_MOCK_COUNT)]
        count: usize,
    },

    /// Print mapped region totals.
    Totals {
        #[command(flatten)]
        scope: Scope,
    },

    /// Print region statistics, chart series, and the dashboard summary.
    Stats {
        #[command(flatten)]
        scope: Scope,

        /// Aggregate the mock incidents per district instead.
        #[arg(long)]
        mock: bool,
    },

    /// Classify incident ids into fine-grained labels.
    Classify {
        /// Incident ids.
        #[arg(required = true)]
        ids: Vec<String>,

        /// Dataset whose label list applies.
        #[arg(long, default_value = "aniqlanadigan")]
        dataset: DatasetKey,
    },

    /// Ask the AI analyst for an executive summary.
    Analyze {
        #[command(flatten)]
        scope: Scope,
    },

    /// Ask the AI analyst a single question.
    Chat {
        /// The question.
        message: String,

        #[command(flatten)]
        scope: Scope,
    },

    /// Convert a JS-wrapped boundary file into strict JSON.
    Repair {
        /// Boundary file to read.
        input: PathBuf,

        /// Output path (default: overwrite the input).
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the feature count and labels of a boundary file.
    Inspect {
        /// Boundary file to read.
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    let data_dir = cli
        .data_dir
        .unwrap_or_else(uzcrime_server::data_dir_from_env);
    let ctx = commands::Context {
        data_dir,
        seed: cli.seed,
        language: cli.lang,
    };

    match cli.command {
        Commands::Serve => {
            // actix-web runs its own single-threaded system, so it gets a
            // blocking thread instead of nesting inside this runtime.
            tokio::task::spawn_blocking(move || {
                actix_web::rt::System::new()
                    .block_on(uzcrime_server::run_server(&ctx.data_dir, ctx.seed))
            })
            .await??;
        }
        Commands::Regions => commands::regions(&ctx),
        Commands::Districts {
            name,
            neighborhoods,
        } => commands::districts(&ctx, &name, neighborhoods),
        Commands::Datasets => commands::datasets(&ctx),
        Commands::Generate { scope, output } => {
            commands::generate(&ctx, &scope, output.as_deref())?;
        }
        Commands::Mock { count } => commands::mock(&ctx, count)?,
        Commands::Totals { scope } => commands::totals(&ctx, &scope),
        Commands::Stats { scope, mock } => commands::stats(&ctx, &scope, mock),
        Commands::Classify { ids, dataset } => commands::classify(&ctx, &ids, dataset),
        Commands::Analyze { scope } => commands::analyze(&ctx, &scope).await,
        Commands::Chat { message, scope } => commands::chat(&ctx, &message, &scope).await,
        Commands::Repair { input, output } => {
            let output = output.unwrap_or_else(|| input.clone());
            let count = uzcrime_geography::repair::repair_file(&input, &output)?;
            println!("Wrote {} ({count} features)", output.display());
        }
        Commands::Inspect { path } => {
            let labels = uzcrime_geography::repair::inspect_labels(&path)?;
            println!("{}: {} features", path.display(), labels.len());
            for label in labels {
                println!("  {label}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "uzcrime", "stats", "--dataset", "kiber", "--filter", "fraud", "--lang", "en",
            "--seed", "7",
        ])
        .unwrap();

        assert_eq!(cli.lang, Language::En);
        assert_eq!(cli.seed, Some(7));
        let Commands::Stats { scope, mock } = cli.command else {
            panic!("expected stats");
        };
        assert_eq!(scope.dataset, DatasetKey::Kiber);
        assert_eq!(scope.filter, Some(CrimeFilterKey::Fraud));
        assert!(!mock);
    }
}
