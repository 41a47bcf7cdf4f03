use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::CatalogResponse,
    routes::AppState,
    services::catalog::{self, DEFAULT_GENRE_ID, DEFAULT_MIN_RATING},
};

#[derive(Debug, Deserialize)]
pub struct DiscoverQuery {
    #[serde(default = "default_genre")]
    genre: i64,
    #[serde(default = "default_rating")]
    rating: f64,
}

fn default_genre() -> i64 {
    DEFAULT_GENRE_ID
}

fn default_rating() -> f64 {
    DEFAULT_MIN_RATING
}

/// Handler for catalog discovery endpoint
pub async fn discover(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DiscoverQuery>, QueryRejection>,
) -> AppResult<Json<CatalogResponse>> {
    let Query(params) = query?;
    let results = catalog::discover_movies(state.catalog.clone(), params.genre, params.rating).await?;
    Ok(Json(CatalogResponse { results }))
}
