use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    db::{MovieRepository, RatingStore},
    middleware::{make_span_with_request_id, request_id_middleware},
    services::{MovieCatalog, Recommender},
};

pub mod belly;
pub mod movies;
pub mod recommendations;

/// Shared application state
pub struct AppState {
    pub movies: Arc<dyn MovieRepository>,
    pub ratings: Arc<dyn RatingStore>,
    pub catalog: Arc<dyn MovieCatalog>,
    pub recommender: Arc<Recommender>,
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/movies", get(movies::discover))
        .route("/recommendations/:movie_id", get(recommendations::recommend))
        .route("/belly-rating", post(belly::submit))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "CineMatch backend is running" }))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
