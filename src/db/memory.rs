use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{MovieRepository, RatingStore};
use crate::{
    error::AppResult,
    models::{BellyRating, Movie, MovieId},
};

/// Fixed candidate pool held in memory
#[derive(Debug, Default)]
pub struct InMemoryMovieRepository {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    /// Adds a movie, replacing any existing entry with the same id
    pub async fn upsert(&self, movie: Movie) {
        let mut movies = self.movies.write().await;
        match movies.iter_mut().find(|m| m.id == movie.id) {
            Some(existing) => *existing = movie,
            None => movies.push(movie),
        }
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn all_movies(&self) -> AppResult<Vec<Movie>> {
        Ok(self.movies.read().await.clone())
    }
}

/// Belly ratings keyed by (user, movie), lost on restart
#[derive(Debug, Default)]
pub struct InMemoryRatingStore {
    ratings: RwLock<HashMap<(String, MovieId), BellyRating>>,
}

impl InMemoryRatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.ratings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ratings.read().await.is_empty()
    }
}

#[async_trait]
impl RatingStore for InMemoryRatingStore {
    async fn submit(&self, rating: BellyRating) -> AppResult<()> {
        let key = (rating.user_id.clone(), rating.movie_id);
        self.ratings.write().await.insert(key, rating);
        Ok(())
    }

    async fn get(&self, user_id: &str, movie_id: MovieId) -> AppResult<Option<BellyRating>> {
        let key = (user_id.to_string(), movie_id);
        Ok(self.ratings.read().await.get(&key).cloned())
    }
}
