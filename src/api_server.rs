//! HTTP shell adapter
//!
//! Exposes the trigger vocabulary over JSON. The loaded collection is shared
//! read-only behind an `Arc`; every request builds its own views, so there is
//! no cross-request cache and nothing mutates the base set.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::charts::{chart_set, ChartSet};
use crate::config::AppConfig;
use crate::data::PlantCollection;
use crate::filters::{describe, describe_text, FilterResolver, FilterSelection, Resolution, Trigger};
use crate::insight::{Insight, InsightGenerator};
use crate::records::EnrichedPlant;
use crate::store::open_store;
use crate::summary::{summarize, Summary};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub collection: Arc<PlantCollection>,
}

impl AppState {
    /// Open the configured store and load the collection (fatal on failure)
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let config = config.clone();
        let collection = tokio::task::spawn_blocking(move || -> anyhow::Result<PlantCollection> {
            tracing::info!("Opening store {}", config.store_path.display());
            let store = open_store(&config.store_path)?;
            PlantCollection::load(store.as_ref(), &config.derive_options())
        })
        .await??;

        tracing::info!("Loaded {} plants", collection.len());
        Ok(Self::from_collection(collection))
    }

    pub fn from_collection(collection: PlantCollection) -> Self {
        Self {
            collection: Arc::new(collection),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/filters/resolve", post(resolve_filters))
        .route("/api/dashboard", post(dashboard))
        .route("/api/insight", post(insight))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResolveRequest {
    pub selection: FilterSelection,
    pub triggers: Vec<Trigger>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub plants: Vec<EnrichedPlant>,
    pub summary: Summary,
    pub filters: Vec<String>,
    pub description: String,
    pub charts: ChartSet,
}

#[derive(Debug, Serialize)]
pub struct InsightResponse {
    pub insight: Option<Insight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "plants": state.collection.len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn resolve_filters(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> Result<Json<Resolution>, AppError> {
    let collection = state.collection.clone();

    let resolution = tokio::task::spawn_blocking(move || {
        let resolver = FilterResolver::new(collection.view());
        resolver.resolve(&request.selection, &request.triggers)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    if resolution.reset {
        tracing::debug!("Filters reset");
    }

    Ok(Json(resolution))
}

async fn dashboard(
    State(state): State<AppState>,
    Json(selection): Json<FilterSelection>,
) -> Result<Json<DashboardResponse>, AppError> {
    let collection = state.collection.clone();

    let response = tokio::task::spawn_blocking(move || {
        let view = selection.apply(&collection.view());
        DashboardResponse {
            plants: view.to_records(),
            summary: summarize(&view),
            filters: describe(&selection),
            description: describe_text(&selection),
            charts: chart_set(&view, &selection.genera),
        }
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(response))
}

async fn insight(
    State(state): State<AppState>,
    Json(selection): Json<FilterSelection>,
) -> Result<Json<InsightResponse>, AppError> {
    let collection = state.collection.clone();

    let insight = tokio::task::spawn_blocking(move || {
        let view = selection.apply(&collection.view());
        InsightGenerator::from_entropy().generate(&view, &selection.genera, &selection.species)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    let reason = insight.is_none().then_some("insufficient data");
    Ok(Json(InsightResponse { insight, reason }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        tracing::error!("{}", message);

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
