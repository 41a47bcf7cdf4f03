use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{MovieId, RecommendationsResponse},
    routes::AppState,
    services::recommendations,
};

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub mood: Option<String>,
}

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    path: Result<Path<MovieId>, PathRejection>,
    query: Result<Query<RecommendQuery>, QueryRejection>,
) -> AppResult<Json<RecommendationsResponse>> {
    let Path(movie_id) = path?;
    let Query(params) = query?;

    tracing::info!(
        request_id = %request_id,
        movie_id,
        mood = ?params.mood,
        "Processing recommendation request"
    );

    let recommendations = recommendations::get_recommendations(
        state.movies.clone(),
        state.recommender.clone(),
        movie_id,
        params.mood,
    )
    .await?;

    Ok(Json(RecommendationsResponse { recommendations }))
}
