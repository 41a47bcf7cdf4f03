use crate::{error::AppResult, models::CatalogMovie, services::providers::MovieCatalog};
use std::sync::Arc;

/// Genre used when the client does not ask for one (TMDB's "Action")
pub const DEFAULT_GENRE_ID: i64 = 28;

/// Minimum vote average used when the client does not ask for one
pub const DEFAULT_MIN_RATING: f64 = 7.0;

/// Service function for catalog discovery
///
/// Delegates to the configured MovieCatalog, keeping HTTP routing free of
/// provider details.
pub async fn discover_movies(
    catalog: Arc<dyn MovieCatalog>,
    genre_id: i64,
    min_rating: f64,
) -> AppResult<Vec<CatalogMovie>> {
    tracing::debug!(provider = catalog.name(), genre_id, min_rating, "Discovering movies");
    catalog.discover_by_genre(genre_id, min_rating).await
}
