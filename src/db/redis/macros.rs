/// Read-through caching for async fetches.
///
/// Returns the cached value for `$key` if present. Otherwise awaits `$block`,
/// queues a successful result for a background write with `$ttl` seconds to
/// live, and evaluates to the block's `Result`. A failed cache read is logged
/// and treated as a miss.
///
/// # Example
/// ```rust,ignore
/// let entries: Vec<MediaEntry> = cached!(cache, key, 900, async move {
///     fetch_entries().await
/// })?;
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        let key = $key;
        let hit = match $cache.get_from_cache(&key).await {
            Ok(hit) => hit,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Cache read failed, fetching directly");
                None
            }
        };

        match hit {
            Some(cached) => Ok(cached),
            None => $block.await.map(|value| {
                $cache.set_in_background(&key, &value, $ttl);
                value
            }),
        }
    }};
}
