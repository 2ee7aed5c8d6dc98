//! HTTP routes.
//!
//! `/search`, `/abstract` and `/full` reshape arXiv responses into JSON;
//! `/static` serves files from the configured directory.

use std::path::Path;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ApiResult;
use crate::gateway::Gateway;
use crate::models::{AbstractResult, FullTextResult, SearchResult};

/// Query parameters for `/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub text: String,
}

/// Query parameters for `/abstract` and `/full`.
#[derive(Debug, Default, Deserialize)]
pub struct PaperQuery {
    #[serde(default)]
    pub paper: String,
}

/// Create the HTTP router.
pub fn create_router(gateway: Gateway, static_dir: impl AsRef<Path>) -> Router {
    let state = Arc::new(gateway);

    Router::new()
        .route("/health", get(health_check))
        .route("/search", get(search_papers))
        .route("/abstract", get(get_abstract))
        .route("/full", get(get_full_paper))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Mirrors the caller's origin so credentials stay allowed
                .layer(CorsLayer::very_permissive()),
        )
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "arxiv-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn search_papers(
    State(gateway): State<Arc<Gateway>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<SearchResult>>> {
    tracing::debug!(text = %query.text, "Handling search");
    Ok(Json(gateway.search(&query.text).await?))
}

async fn get_abstract(
    State(gateway): State<Arc<Gateway>>,
    Query(query): Query<PaperQuery>,
) -> ApiResult<Json<AbstractResult>> {
    tracing::debug!(paper = %query.paper, "Handling abstract");
    Ok(Json(gateway.abstract_of(&query.paper).await?))
}

async fn get_full_paper(
    State(gateway): State<Arc<Gateway>>,
    Query(query): Query<PaperQuery>,
) -> ApiResult<Json<FullTextResult>> {
    tracing::debug!(paper = %query.paper, "Handling full text");
    let result = gateway.full_text(&query.paper).await?;
    tracing::info!(paper = %result.paper_id, chars = result.text.len(), "Extracted full text");
    Ok(Json(result))
}
