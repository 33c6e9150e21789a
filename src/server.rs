use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::api::{
    ApiFailure, ApiSuccess, GenerateIdeaRequest, GenerateIdeaResponse, HealthResponse,
    HotTopicsQuery, HotTopicsResponse, PredictRequest, TagRequest, TitleRequest, TitleResponse,
};
use creator_engine::config::EngineConfig;
use creator_engine::hot_topics::catalog_from_config;
use creator_engine::{
    extract_tags, filter_by_domains, generate_titles, generate_topic_from_hot, lookup_history,
    predict_performance, rank_titles, rank_topics, EngineError, HistoryStore, HotTopic,
    PerformanceReport, PostingTime, TagExtractionResult,
};

#[derive(Clone)]
pub struct AppState {
    config: Arc<EngineConfig>,
    history: Option<Arc<HistoryStore>>,
    catalog: Arc<Vec<HotTopic>>,
}

impl AppState {
    pub async fn from_config(config: EngineConfig) -> Result<Self, String> {
        let history = HistoryStore::from_config(&config.history).await?;
        let catalog = catalog_from_config(&config.hot_topics).await?;
        Ok(Self::new(config, history, catalog))
    }

    pub fn new(config: EngineConfig, history: Option<HistoryStore>, catalog: Vec<HotTopic>) -> Self {
        Self {
            config: Arc::new(config),
            history: history.map(Arc::new),
            catalog: Arc::new(catalog),
        }
    }
}

pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidInput(message) => Self::invalid(message),
        }
    }
}

impl ApiError {
    fn invalid(message: String) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "VAL_002",
            message,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::invalid(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiFailure {
            success: false,
            error: self.message,
            code: self.code.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<Json<ApiSuccess<T>>, ApiError>;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/predict", post(predict_handler))
        .route("/api/predict/performance", post(predict_handler))
        .route("/api/titles/variants", post(titles_handler))
        .route("/api/titles/ab-test", post(titles_handler))
        .route("/api/tags/extract", post(tags_handler))
        .route("/api/hot-topics", get(hot_topics_handler))
        .route("/api/hot-topics/generate", post(generate_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(args: crate::ServeArgs, config: EngineConfig) -> Result<(), String> {
    let state = AppState::from_config(config).await?;
    info!(
        topics = state.catalog.len(),
        history = state.history.is_some(),
        "engine state ready"
    );

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("failed to bind server: {}", err))?;
    info!(%addr, "listening");

    axum::serve(listener, router(state))
        .await
        .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> Json<ApiSuccess<HealthResponse>> {
    Json(ApiSuccess::new(HealthResponse::ok()))
}

async fn predict_handler(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> ApiResult<PerformanceReport> {
    let Json(request) = payload?;
    let (input, user_id) = request.into_input();
    debug!(title = ?input.title(), platform = ?input.platform, "predicting performance");

    let history = lookup_history(state.history.as_deref(), user_id.as_deref(), Utc::now());

    let report = predict_performance(&input, history.as_ref(), &PostingTime::now(), &state.config)?;
    Ok(Json(ApiSuccess::new(report)))
}

async fn titles_handler(
    payload: Result<Json<TitleRequest>, JsonRejection>,
) -> ApiResult<TitleResponse> {
    let Json(request) = payload?;
    let topic = request.topic.unwrap_or_default();
    let platforms = request.target_platform.unwrap_or_default();
    debug!(%topic, "generating title variants");

    let variants = generate_titles(&topic, request.content.as_deref(), &platforms)?;
    let titles = rank_titles(variants);
    Ok(Json(ApiSuccess::new(TitleResponse::new(
        topic.trim().to_string(),
        titles,
        platforms,
    ))))
}

async fn tags_handler(
    payload: Result<Json<TagRequest>, JsonRejection>,
) -> ApiResult<TagExtractionResult> {
    let Json(request) = payload?;
    let result = extract_tags(
        request.content.as_deref(),
        request.topic.as_deref(),
        request.platform.as_deref(),
        request.flags(),
    )?;
    Ok(Json(ApiSuccess::new(result)))
}

async fn hot_topics_handler(
    State(state): State<AppState>,
    query: Result<Query<HotTopicsQuery>, QueryRejection>,
) -> ApiResult<HotTopicsResponse> {
    let Query(query) = query?;
    let domains = query.domains();
    debug!(?domains, "ranking hot topics");

    let filtered = filter_by_domains(&state.catalog, &domains);
    let topics = rank_topics(filtered, &domains);
    Ok(Json(ApiSuccess::new(HotTopicsResponse {
        total: topics.len(),
        topics,
        domains,
        updated_at: Utc::now().to_rfc3339(),
    })))
}

async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateIdeaRequest>, JsonRejection>,
) -> ApiResult<GenerateIdeaResponse> {
    let Json(request) = payload?;
    let (id, domain, seed) = request.validate()?;
    let topic = state
        .catalog
        .iter()
        .find(|topic| topic.id == id)
        .cloned()
        .ok_or_else(|| ApiError {
            status: StatusCode::NOT_FOUND,
            code: "BUS_001",
            message: "Hot topic not found".to_string(),
        })?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let idea = generate_topic_from_hot(&topic, &domain, &mut rng);

    Ok(Json(ApiSuccess::new(GenerateIdeaResponse {
        original_topic: topic,
        generated_topic: idea,
        domain,
    })))
}
