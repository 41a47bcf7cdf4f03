use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{BellyRating, Movie, MovieId},
};

pub mod memory;
pub mod postgres;
pub mod redis;

pub use memory::{InMemoryMovieRepository, InMemoryRatingStore};
pub use postgres::{create_pool, run_migrations, PgMovieRepository};
pub use self::redis::{create_redis_client, Cache, CacheKey, CacheWriterHandle};

/// Source of the candidate pool for recommendations
///
/// Implementations return the full, materialised list of movies. A failure
/// must surface as an error rather than an empty list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn all_movies(&self) -> AppResult<Vec<Movie>>;
}

/// Storage for user-submitted belly ratings
#[async_trait]
pub trait RatingStore: Send + Sync {
    /// Stores a rating, replacing any earlier score for the same user and movie
    async fn submit(&self, rating: BellyRating) -> AppResult<()>;

    async fn get(&self, user_id: &str, movie_id: MovieId) -> AppResult<Option<BellyRating>>;
}
