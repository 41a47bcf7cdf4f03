use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MovieId;

/// Lowest belly score a user may submit
pub const MIN_BELLY_SCORE: i32 = 0;
/// Highest belly score a user may submit
pub const MAX_BELLY_SCORE: i32 = 10;

/// JSON payload for a belly rating submission
#[derive(Debug, Clone, Deserialize)]
pub struct BellyRatingRequest {
    pub user_id: String,
    pub movie_id: MovieId,
    pub score: i32,
}

/// Acknowledgement returned after a rating is stored
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BellyRatingResponse {
    pub status: String,
    pub score: i32,
}

impl BellyRatingResponse {
    pub fn success(score: i32) -> Self {
        Self {
            status: "success".to_string(),
            score,
        }
    }
}

/// A stored rating, one per (user, movie) pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BellyRating {
    pub user_id: String,
    pub movie_id: MovieId,
    pub score: i32,
    pub submitted_at: DateTime<Utc>,
}

impl From<BellyRatingRequest> for BellyRating {
    fn from(request: BellyRatingRequest) -> Self {
        Self {
            user_id: request.user_id,
            movie_id: request.movie_id,
            score: request.score,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serialization() {
        let json = serde_json::to_value(BellyRatingResponse::success(8)).unwrap();
        assert_eq!(json, serde_json::json!({"status": "success", "score": 8}));
    }

    #[test]
    fn test_request_into_rating() {
        let request: BellyRatingRequest =
            serde_json::from_str(r#"{"user_id": "u1", "movie_id": 550, "score": 9}"#).unwrap();
        let rating = BellyRating::from(request);
        assert_eq!(rating.user_id, "u1");
        assert_eq!(rating.movie_id, 550);
        assert_eq!(rating.score, 9);
    }
}
