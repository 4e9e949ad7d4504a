//! HTTP handler functions for the uzcrime API.

use actix_web::{HttpResponse, web};
use uzcrime_ai::analyst::chat_greeting;
use uzcrime_ai::providers::Message;
use uzcrime_analytics::{charts, filter, stats};
use uzcrime_analytics_models::RegionStats;
use uzcrime_crime_models::DatasetKey;
use uzcrime_incidents::classify;
use uzcrime_incidents_models::CrimeIncident;
use uzcrime_server_models::{
    AnalysisRequest, ApiChatRole, ApiChatTurn, ApiClassification, ApiDataset, ApiHealth, ApiText,
    ChatRequest, ClassifyParams, DEFAULT_DATASET, DatasetQueryParams, LanguageParams,
};

use crate::AppState;

/// Filtered incidents of one dataset and the statistics derived from its
/// totals under the same search.
struct DatasetView<'a> {
    incidents: Vec<&'a CrimeIncident>,
    stats: Vec<RegionStats>,
}

fn dataset_view<'a>(state: &'a AppState, params: &DatasetQueryParams) -> DatasetView<'a> {
    let dataset = params.dataset();
    let query = params.query();

    let incidents = filter::filter_incidents(state.incidents.incidents(dataset), dataset, &query);
    let totals = filter::filter_totals(state.incidents.totals(dataset), query.search.as_deref());
    let stats = stats::from_totals(&totals, filter::default_crime_type(&incidents));

    DatasetView { incidents, stats }
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/border`
pub async fn border(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.geo.border())
}

/// `GET /api/regions`
///
/// The merged region index: country outline plus every file-backed region.
pub async fn regions(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.geo.region_index())
}

/// `GET /api/regions/{name}/districts`
///
/// Unknown regions yield an empty collection, never an error.
pub async fn districts(state: web::Data<AppState>, name: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(state.geo.districts_for(&name))
}

/// `GET /api/districts/{name}/neighborhoods`
pub async fn neighborhoods(state: web::Data<AppState>, name: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(state.geo.neighborhoods_for(&name))
}

/// `GET /api/datasets`
///
/// Lists every dataset with its filter keys, labeled in `lang`.
pub async fn datasets(params: web::Query<LanguageParams>) -> HttpResponse {
    let language = params.lang.unwrap_or_default();
    let listing: Vec<ApiDataset> = DatasetKey::all()
        .iter()
        .map(|dataset| ApiDataset::new(*dataset, language))
        .collect();

    HttpResponse::Ok().json(listing)
}

/// `GET /api/incidents`
pub async fn incidents(
    state: web::Data<AppState>,
    params: web::Query<DatasetQueryParams>,
) -> HttpResponse {
    let dataset = params.dataset();
    let matched =
        filter::filter_incidents(state.incidents.incidents(dataset), dataset, &params.query());

    HttpResponse::Ok().json(matched)
}

/// `GET /api/totals`
///
/// Mapped region totals, filtered by region name.
pub async fn totals(
    state: web::Data<AppState>,
    params: web::Query<DatasetQueryParams>,
) -> HttpResponse {
    let query = params.query();
    let totals = filter::filter_totals(
        state.incidents.totals(params.dataset()),
        query.search.as_deref(),
    );

    HttpResponse::Ok().json(totals)
}

/// `GET /api/stats`
pub async fn stats(
    state: web::Data<AppState>,
    params: web::Query<DatasetQueryParams>,
) -> HttpResponse {
    HttpResponse::Ok().json(dataset_view(&state, &params).stats)
}

/// `GET /api/charts/regions`
///
/// Region statistics ordered by total, highest first.
pub async fn chart_regions(
    state: web::Data<AppState>,
    params: web::Query<DatasetQueryParams>,
) -> HttpResponse {
    let view = dataset_view(&state, &params);
    HttpResponse::Ok().json(charts::regions_by_total(&view.stats))
}

/// `GET /api/charts/distribution`
pub async fn chart_distribution(
    state: web::Data<AppState>,
    params: web::Query<DatasetQueryParams>,
) -> HttpResponse {
    let view = dataset_view(&state, &params);
    HttpResponse::Ok().json(charts::crime_type_distribution(
        view.incidents.iter().copied(),
    ))
}

/// `GET /api/summary`
pub async fn summary(
    state: web::Data<AppState>,
    params: web::Query<DatasetQueryParams>,
) -> HttpResponse {
    let view = dataset_view(&state, &params);
    HttpResponse::Ok().json(charts::dashboard_summary(view.incidents.len(), &view.stats))
}

/// `GET /api/classify/{id}`
pub async fn classify(id: web::Path<String>, params: web::Query<ClassifyParams>) -> HttpResponse {
    let dataset = params.dataset.unwrap_or(DEFAULT_DATASET);
    let filter_key = classify::classify(&id, dataset);

    HttpResponse::Ok().json(ApiClassification {
        id: id.into_inner(),
        dataset,
        filter_key,
        label: filter_key.label(params.lang.unwrap_or_default()).to_string(),
    })
}

/// `GET /api/mock`
///
/// Randomized Tashkent City incidents generated at startup.
pub async fn mock(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.incidents.mock_crimes())
}

/// `GET /api/mock/stats`
///
/// Per-district statistics over the mock incidents.
pub async fn mock_stats(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(stats::from_incidents(state.incidents.mock_crimes()))
}

/// `POST /api/ai/analysis`
///
/// Always answers `200` with text; provider failures become fallback
/// messages.
pub async fn ai_analysis(
    state: web::Data<AppState>,
    body: web::Json<AnalysisRequest>,
) -> HttpResponse {
    let view = dataset_view(&state, &body.scope);
    let text = state.analyst.summarize(&view.stats, body.language).await;

    HttpResponse::Ok().json(ApiText { text })
}

/// `GET /api/ai/greeting`
///
/// Opening assistant message of a new chat, in `lang`.
pub async fn ai_greeting(params: web::Query<LanguageParams>) -> HttpResponse {
    let text = chat_greeting(params.lang.unwrap_or_default()).to_string();
    HttpResponse::Ok().json(ApiText { text })
}

/// `POST /api/ai/chat`
pub async fn ai_chat(state: web::Data<AppState>, body: web::Json<ChatRequest>) -> HttpResponse {
    let view = dataset_view(&state, &body.scope);
    let history: Vec<Message> = body.history.iter().map(to_message).collect();

    let text = state
        .analyst
        .chat(
            &body.message,
            &view.stats,
            view.incidents.iter().copied(),
            &history,
            body.language,
        )
        .await;

    HttpResponse::Ok().json(ApiText { text })
}

fn to_message(turn: &ApiChatTurn) -> Message {
    match turn.role {
        ApiChatRole::User => Message::user(turn.text.clone()),
        ApiChatRole::Assistant => Message::assistant(turn.text.clone()),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};
    use chrono::{TimeZone as _, Utc};
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;
    use uzcrime_ai::analyst::{Analyst, MISSING_KEY_MESSAGE, chat_error_message};
    use uzcrime_analytics_models::DashboardSummary;
    use uzcrime_crime_models::{CrimeFilterKey, Language};
    use uzcrime_geography::snapshot::GeoSnapshot;
    use uzcrime_geography::{fixtures, index::empty_collection, registry};
    use uzcrime_incidents::dataset::RawRegionCount;
    use uzcrime_incidents::snapshot::IncidentSnapshot;
    use uzcrime_incidents_models::RegionTotal;

    use super::*;
    use crate::configure;

    fn test_state() -> web::Data<AppState> {
        let tashkent = registry::by_name("Toshkent sh.").unwrap();
        let geo = GeoSnapshot::from_sources(
            empty_collection(),
            vec![(tashkent, fixtures::tashkent_city_districts())],
        );

        let counts = vec![
            RawRegionCount::new("Toshkent_shahri", 250),
            RawRegionCount::new("Navoiy", 120),
        ];
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let incidents = IncidentSnapshot::from_counts(
            [(DatasetKey::Aniqlanadigan, counts)],
            now,
            &mut StdRng::seed_from_u64(11),
        );

        web::Data::new(AppState {
            geo,
            incidents,
            analyst: Analyst::unconfigured(),
        })
    }

    macro_rules! app {
        () => {
            test::init_service(App::new().app_data(test_state()).configure(configure)).await
        };
    }

    #[actix_web::test]
    async fn health_reports_healthy() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: ApiHealth = test::call_and_read_body_json(&app, req).await;
        assert!(body.healthy);
    }

    #[actix_web::test]
    async fn unknown_region_has_empty_districts() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/api/regions/Atlantis/districts")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["features"], serde_json::json!([]));

        let req = test::TestRequest::get()
            .uri("/api/regions/Toshkent%20sh./districts")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["features"].as_array().unwrap().len(), 5);
    }

    #[actix_web::test]
    async fn stats_follow_totals_and_search() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/stats").to_request();
        let body: Vec<RegionStats> = test::call_and_read_body_json(&app, req).await;
        let scores: Vec<(String, u8)> = body
            .into_iter()
            .map(|s| (s.region_name, s.risk_score))
            .collect();
        assert_eq!(
            scores,
            vec![
                ("Toshkent sh.".to_string(), 100),
                ("Navoiy viloyati".to_string(), 48),
            ]
        );

        let req = test::TestRequest::get()
            .uri("/api/totals?dataset=aniqlanadigan&search=navoiy")
            .to_request();
        let body: Vec<RegionTotal> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, vec![RegionTotal::new("Navoiy viloyati", 120)]);
    }

    #[actix_web::test]
    async fn incidents_are_filtered_by_classification() {
        let app = app!();
        let state = test_state();
        let all = state.incidents.incidents(DatasetKey::Aniqlanadigan);
        assert_eq!(all.len(), 4);

        let key = classify::classify(&all[0].id, DatasetKey::Aniqlanadigan);
        let expected = all
            .iter()
            .filter(|i| classify::classify(&i.id, DatasetKey::Aniqlanadigan) == key)
            .count();

        let req = test::TestRequest::get()
            .uri(&format!("/api/incidents?filter={key}"))
            .to_request();
        let body: Vec<CrimeIncident> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.len(), expected);
        assert!(body.iter().any(|i| i.id == all[0].id));
    }

    #[actix_web::test]
    async fn summary_counts_high_risk_regions() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/summary").to_request();
        let body: DashboardSummary = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.incident_count, 4);
        assert_eq!(body.high_risk_regions, 1);
        assert_eq!(body.region_count, 2);
    }

    #[actix_web::test]
    async fn classify_is_stable_and_labeled() {
        let app = app!();
        let expected = classify::classify("ANIQLANADIGAN-00001", DatasetKey::Aniqlanadigan);

        let req = test::TestRequest::get()
            .uri("/api/classify/ANIQLANADIGAN-00001?lang=en")
            .to_request();
        let body: ApiClassification = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.filter_key, expected);
        assert_eq!(body.label, expected.label(Language::En));
        assert!(
            DatasetKey::Aniqlanadigan
                .filter_keys()
                .contains(&body.filter_key)
        );
    }

    #[actix_web::test]
    async fn missing_dataset_is_empty_not_an_error() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/incidents?dataset=kiber")
            .to_request();
        let body: Vec<CrimeIncident> = test::call_and_read_body_json(&app, req).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn chat_greeting_follows_language() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/api/ai/greeting?lang=en")
            .to_request();
        let body: ApiText = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.text, chat_greeting(Language::En));
        assert!(body.text.starts_with("Hello. I am Sentinel"));

        let req = test::TestRequest::get().uri("/api/ai/greeting").to_request();
        let body: ApiText = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.text, chat_greeting(Language::default()));
    }

    #[actix_web::test]
    async fn ai_endpoints_fall_back_without_credentials() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/ai/analysis")
            .set_json(serde_json::json!({ "language": "en" }))
            .to_request();
        let body: ApiText = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.text, MISSING_KEY_MESSAGE);

        let req = test::TestRequest::post()
            .uri("/api/ai/chat")
            .set_json(serde_json::json!({
                "message": "Qaysi hudud xavfli?",
                "filter": CrimeFilterKey::Theft,
                "language": "ru",
            }))
            .to_request();
        let body: ApiText = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.text, chat_error_message(Language::Ru));
    }
}
