/// TMDB (The Movie Database) catalog provider
///
/// Uses `GET /discover/movie` filtered by genre and minimum vote average,
/// sorted by popularity. Responses are cached in Redis for an hour.
use std::time::Duration;

use reqwest::Client as HttpClient;

use super::MovieCatalog;
use crate::{
    cached,
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
    models::{CatalogMovie, TmdbDiscoverResponse},
};

const DISCOVER_CACHE_TTL: u64 = 3600; // 1 hour
const SORT_BY: &str = "popularity.desc";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    cache: Cache,
}

impl TmdbProvider {
    pub fn new(
        cache: Cache,
        api_key: String,
        api_url: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    fn discover_url(&self) -> String {
        format!("{}/discover/movie", self.api_url)
    }

    fn discover_params(&self, genre_id: i64, min_rating: f64) -> [(&'static str, String); 4] {
        [
            ("api_key", self.api_key.clone()),
            ("with_genres", genre_id.to_string()),
            ("vote_average.gte", min_rating.to_string()),
            ("sort_by", SORT_BY.to_string()),
        ]
    }

    async fn fetch_discover(&self, genre_id: i64, min_rating: f64) -> AppResult<Vec<CatalogMovie>> {
        let response = self
            .http_client
            .get(self.discover_url())
            .query(&self.discover_params(genre_id, min_rating))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB returned status {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        parse_discover(&body)
    }
}

fn parse_discover(body: &str) -> AppResult<Vec<CatalogMovie>> {
    let page: TmdbDiscoverResponse = serde_json::from_str(body).map_err(|e| {
        tracing::error!(error = %e, "Failed to deserialize TMDB response");
        AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e))
    })?;
    Ok(page.results)
}

#[async_trait::async_trait]
impl MovieCatalog for TmdbProvider {
    async fn discover_by_genre(
        &self,
        genre_id: i64,
        min_rating: f64,
    ) -> AppResult<Vec<CatalogMovie>> {
        if !min_rating.is_finite() {
            return Err(AppError::InvalidInput(
                "rating must be a finite number".to_string(),
            ));
        }

        cached!(
            self.cache,
            CacheKey::Discover {
                genre_id,
                min_rating,
            },
            DISCOVER_CACHE_TTL,
            async move {
                let movies = self.fetch_discover(genre_id, min_rating).await?;

                tracing::info!(
                    genre_id,
                    min_rating,
                    results = movies.len(),
                    provider = "tmdb",
                    "Discover completed"
                );

                Ok::<_, AppError>(movies)
            }
        )
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
