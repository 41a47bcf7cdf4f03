/// Read-through caching over [`Cache`](crate::db::Cache).
///
/// Looks the key up first. On a hit the cached value is returned; on a miss
/// the block is awaited, its value queued for a background write with the
/// given TTL (seconds), and returned.
///
/// The cache is best effort: a failed lookup is logged and treated as a miss,
/// so an unreachable Redis never fails the request.
///
/// # Example
/// ```rust,ignore
/// let movies = cached!(self.cache, CacheKey::Discover { genre_id, min_rating }, 3600, async move {
///     fetch_from_tmdb().await
/// });
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        let key = $key;
        match $cache.get_from_cache(&key).await {
            Ok(Some(cached)) => {
                tracing::debug!(key = %key, "Cache hit");
                Ok(cached)
            }
            lookup => {
                if let Err(e) = lookup {
                    tracing::warn!(key = %key, error = %e, "Cache lookup failed, bypassing cache");
                } else {
                    tracing::debug!(key = %key, "Cache miss");
                }
                let value = $block.await?;
                $cache.set_in_background(&key, &value, $ttl);
                Ok(value)
            }
        }
    }};
}
