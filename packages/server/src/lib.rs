#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the uzcrime map application.
//!
//! Boundaries and datasets are read from the data directory once at
//! startup into immutable snapshots; every endpoint is a pure read over
//! them. The only outbound calls are the AI analysis and chat endpoints,
//! which always answer with text, falling back to fixed messages when the
//! provider is missing or fails.

mod handlers;

use std::path::{Path, PathBuf};

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use uzcrime_ai::analyst::Analyst;
use uzcrime_geography::snapshot::GeoSnapshot;
use uzcrime_incidents::snapshot::IncidentSnapshot;

/// Data directory used when `UZCRIME_DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Frontend build served at `/` when present.
const STATIC_DIR: &str = "app/dist";

/// Shared application state.
pub struct AppState {
    /// Country, region, district and neighborhood boundaries.
    pub geo: GeoSnapshot,
    /// Generated incidents and region totals for every dataset.
    pub incidents: IncidentSnapshot,
    /// LLM-backed analyst; unconfigured when no credentials are set.
    pub analyst: Analyst,
}

impl AppState {
    /// Loads `<data_dir>/boundaries` and `<data_dir>/datasets`, and builds
    /// the analyst from the environment.
    #[must_use]
    pub fn load(data_dir: &Path, seed: Option<u64>) -> Self {
        Self {
            geo: GeoSnapshot::load(&data_dir.join("boundaries")),
            incidents: IncidentSnapshot::load(&data_dir.join("datasets"), seed),
            analyst: Analyst::from_env(),
        }
    }
}

/// Reads the data directory from `UZCRIME_DATA_DIR`.
#[must_use]
pub fn data_dir_from_env() -> PathBuf {
    std::env::var("UZCRIME_DATA_DIR").map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from)
}

/// Registers every `/api` route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/border", web::get().to(handlers::border))
            .route("/regions", web::get().to(handlers::regions))
            .route(
                "/regions/{name}/districts",
                web::get().to(handlers::districts),
            )
            .route(
                "/districts/{name}/neighborhoods",
                web::get().to(handlers::neighborhoods),
            )
            .route("/datasets", web::get().to(handlers::datasets))
            .route("/incidents", web::get().to(handlers::incidents))
            .route("/totals", web::get().to(handlers::totals))
            .route("/stats", web::get().to(handlers::stats))
            .route("/charts/regions", web::get().to(handlers::chart_regions))
            .route(
                "/charts/distribution",
                web::get().to(handlers::chart_distribution),
            )
            .route("/summary", web::get().to(handlers::summary))
            .route("/classify/{id}", web::get().to(handlers::classify))
            .route("/mock", web::get().to(handlers::mock))
            .route("/mock/stats", web::get().to(handlers::mock_stats))
            .route("/ai/greeting", web::get().to(handlers::ai_greeting))
            .route("/ai/analysis", web::post().to(handlers::ai_analysis))
            .route("/ai/chat", web::post().to(handlers::ai_chat)),
    );
}

/// Starts the uzcrime API server.
///
/// Loads the snapshots from `data_dir` and binds to `BIND_ADDR:PORT`
/// (default `127.0.0.1:8080`). The caller provides the async runtime and
/// initializes logging.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(data_dir: &Path, seed: Option<u64>) -> std::io::Result<()> {
    let state = web::Data::new(AppState::load(data_dir, seed));

    if !state.analyst.is_configured() {
        log::warn!("AI endpoints will return fallback messages");
    }

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let serve_static = Path::new(STATIC_DIR).is_dir();
    if !serve_static {
        log::debug!("No frontend build at {STATIC_DIR}, serving the API only");
    }

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
            .configure(|cfg| {
                if serve_static {
                    cfg.service(Files::new("/", STATIC_DIR).index_file("index.html"));
                }
            })
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
