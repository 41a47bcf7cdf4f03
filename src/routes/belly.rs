use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{BellyRatingRequest, BellyRatingResponse},
    routes::AppState,
    services::ratings,
};

/// Handler for belly rating submissions
pub async fn submit(
    State(state): State<Arc<AppState>>,
    body: Result<Json<BellyRatingRequest>, JsonRejection>,
) -> AppResult<Json<BellyRatingResponse>> {
    let Json(request) = body?;
    let score = ratings::submit_belly_rating(state.ratings.clone(), request).await?;
    Ok(Json(BellyRatingResponse::success(score)))
}
