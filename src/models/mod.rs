use serde::{Deserialize, Serialize};

pub mod belly_rating;
pub mod movie;

pub use belly_rating::{BellyRating, BellyRatingRequest, BellyRatingResponse};
pub use movie::{Movie, MovieId, MovieProfile};

/// A single recommended movie returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedMovie {
    pub id: MovieId,
    pub title: String,
    pub score: f64,
    pub reason: String,
}

/// Response body for `/recommendations/{movie_id}`
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<RecommendedMovie>,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// A movie as returned by TMDB's discover endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogMovie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
}

/// Raw page returned by `GET /discover/movie`
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbDiscoverResponse {
    #[serde(default)]
    pub results: Vec<CatalogMovie>,
}

/// Response body for `/movies`
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub results: Vec<CatalogMovie>,
}
