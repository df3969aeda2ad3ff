use chrono::{DateTime, Utc};
use std::future::Future;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::error::PoolError;
use crate::model::{BoardData, CacheStatus};

#[derive(Clone)]
struct CachedBoard {
    data: BoardData,
    cached_at: DateTime<Utc>,
}

/// Read-through cache holding the last board that refreshed successfully.
#[derive(Default)]
pub struct BoardCache {
    inner: RwLock<Option<CachedBoard>>,
}

fn is_fresh(cached: &CachedBoard, ttl: Duration, now: DateTime<Utc>) -> bool {
    match chrono::Duration::from_std(ttl) {
        Ok(ttl) => now - cached.cached_at < ttl,
        Err(_) => true,
    }
}

impl BoardCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached board while it is younger than `ttl`, otherwise
    /// runs `fetch`. A failed fetch falls back to the previous board when
    /// there is one. `use_cache = false` skips the freshness check.
    ///
    /// # Errors
    /// Returns the fetch error when nothing has been cached yet.
    pub async fn get_or_refresh<F, Fut>(
        &self,
        ttl: Duration,
        use_cache: bool,
        fetch: F,
    ) -> Result<(BoardData, CacheStatus), PoolError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<BoardData, PoolError>>,
    {
        if use_cache {
            if let Some(cached) = self.inner.read().await.as_ref() {
                if is_fresh(cached, ttl, Utc::now()) {
                    tracing::debug!(cached_at = %cached.cached_at, "board served from cache");
                    return Ok((cached.data.clone(), CacheStatus::Hit));
                }
            }
        }

        // one refresh at a time; whoever waited behind it reuses the result
        let mut slot = self.inner.write().await;
        if use_cache {
            if let Some(cached) = slot.as_ref() {
                if is_fresh(cached, ttl, Utc::now()) {
                    return Ok((cached.data.clone(), CacheStatus::Hit));
                }
            }
        }

        match fetch().await {
            Ok(data) => {
                *slot = Some(CachedBoard {
                    data: data.clone(),
                    cached_at: Utc::now(),
                });
                Ok((data, CacheStatus::Refreshed))
            }
            Err(err) => match slot.as_ref() {
                Some(stale) => {
                    tracing::error!(error = %err, cached_at = %stale.cached_at, "refresh failed, serving last good board");
                    Ok((stale.data.clone(), CacheStatus::Stale))
                }
                None => {
                    tracing::error!(error = %err, "refresh failed with nothing cached");
                    Err(err)
                }
            },
        }
    }
}
