use std::sync::Arc;

use crate::{
    db::RatingStore,
    error::{AppError, AppResult},
    models::{
        belly_rating::{MAX_BELLY_SCORE, MIN_BELLY_SCORE},
        BellyRating, BellyRatingRequest,
    },
};

/// Validates and stores a belly rating, returning the accepted score.
///
/// Ratings are kept for later use; the recommender does not read them yet.
pub async fn submit_belly_rating(
    store: Arc<dyn RatingStore>,
    request: BellyRatingRequest,
) -> AppResult<i32> {
    if request.user_id.trim().is_empty() {
        return Err(AppError::InvalidInput("user_id cannot be empty".to_string()));
    }

    if !(MIN_BELLY_SCORE..=MAX_BELLY_SCORE).contains(&request.score) {
        return Err(AppError::InvalidInput(format!(
            "score must be between {} and {}, got {}",
            MIN_BELLY_SCORE, MAX_BELLY_SCORE, request.score
        )));
    }

    let rating = BellyRating::from(request);
    let score = rating.score;

    tracing::info!(
        user_id = %rating.user_id,
        movie_id = rating.movie_id,
        score,
        "Belly rating received"
    );

    store.submit(rating).await?;

    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryRatingStore;

    fn request(user_id: &str, movie_id: i32, score: i32) -> BellyRatingRequest {
        BellyRatingRequest {
            user_id: user_id.to_string(),
            movie_id,
            score,
        }
    }

    #[tokio::test]
    async fn test_valid_rating_is_stored() {
        let store = Arc::new(InMemoryRatingStore::new());

        let score = submit_belly_rating(store.clone(), request("u1", 550, 9))
            .await
            .unwrap();

        assert_eq!(score, 9);
        let stored = store.get("u1", 550).await.unwrap().unwrap();
        assert_eq!(stored.score, 9);
    }

    #[tokio::test]
    async fn test_score_bounds_are_inclusive() {
        let store = Arc::new(InMemoryRatingStore::new());
        assert!(submit_belly_rating(store.clone(), request("u1", 1, 0)).await.is_ok());
        assert!(submit_belly_rating(store.clone(), request("u1", 2, 10)).await.is_ok());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_out_of_range_score_rejected() {
        let store = Arc::new(InMemoryRatingStore::new());

        let err = submit_belly_rating(store.clone(), request("u1", 550, 11))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let err = submit_belly_rating(store.clone(), request("u1", 550, -1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_blank_user_rejected() {
        let store = Arc::new(InMemoryRatingStore::new());
        let err = submit_belly_rating(store.clone(), request("   ", 550, 5))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
