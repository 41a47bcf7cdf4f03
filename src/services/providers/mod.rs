/// Movie catalog providers
///
/// The catalog is the external source of candidate movies shown to users for
/// discovery. TMDB is the only implementation today.
use crate::{error::AppResult, models::CatalogMovie};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for external movie catalogs
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Movies in `genre_id` rated at least `min_rating`, most popular first
    async fn discover_by_genre(&self, genre_id: i64, min_rating: f64)
        -> AppResult<Vec<CatalogMovie>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
