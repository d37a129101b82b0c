//! Ranking and pagination over the post store, plus the read-through
//! cache that sits in front of it.
//!
//! The ordering is points descending with submitted_at descending as
//! the tie-break, so higher-scored links come first and among equal
//! scores the most recent wins. All cached listing pages share one
//! logical tag; any mutation invalidates the whole tag.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;
use crate::ports::{Cache, CacheError, PostRepository};

/// Pagination metadata for one ranked page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// One page of the ranked listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub pagination: Pagination,
}

/// Compute one ranked page directly from the store.
///
/// The slice itself is a single sorted offset/limit query, so a page
/// is a point-in-time snapshot; pages beyond range come back empty
/// rather than erroring. Callers guarantee `page >= 1` and `limit > 0`.
pub async fn ranked_page(
    repo: &dyn PostRepository,
    page: u64,
    limit: u64,
) -> Result<PostPage, RepoError> {
    let total_count = repo.count().await?;
    let total_pages = total_count.div_ceil(limit);

    // An offset that does not fit in u64 is past the data by definition,
    // so it gets the same empty page as any other out-of-range request.
    let posts = match (page - 1).checked_mul(limit) {
        Some(offset) if offset < total_count => repo.ranked_slice(offset, limit).await?,
        _ => Vec::new(),
    };

    Ok(PostPage {
        posts,
        pagination: Pagination {
            current_page: page,
            total_pages,
            total_count,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        },
    })
}

/// Key holding the current generation of the listing tag. Replacing
/// the generation orphans every page cached under the old one.
const TAG_KEY: &str = "posts:tag";

/// Fallback expiry guarding against a missed invalidation signal.
const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Read cache for ranked listing pages.
///
/// Pages are cached under a key derived from the tag generation plus
/// the page/limit parameters. Invalidation drops the generation, which
/// takes effect before the mutating request returns, so a client that
/// writes and immediately re-reads observes its own write. Concurrent
/// misses may recompute the same page more than once; that is accepted.
pub struct CachedFeed {
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl CachedFeed {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self::with_ttl(cache, DEFAULT_TTL)
    }

    pub fn with_ttl(cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    /// Serve a ranked page, recomputing on miss. Cache failures degrade
    /// to a direct store query rather than failing the read.
    pub async fn page(
        &self,
        repo: &dyn PostRepository,
        page: u64,
        limit: u64,
    ) -> Result<PostPage, RepoError> {
        let key = self.page_key(page, limit).await;

        if let Some(raw) = self.cache.get(&key).await {
            match serde_json::from_str::<PostPage>(&raw) {
                Ok(cached) => {
                    tracing::debug!(%key, "listing cache hit");
                    return Ok(cached);
                }
                Err(e) => {
                    tracing::warn!(%key, error = %e, "discarding undecodable cache entry");
                }
            }
        }

        let computed = ranked_page(repo, page, limit).await?;

        match serde_json::to_string(&computed) {
            Ok(raw) => {
                if let Err(e) = self.cache.set(&key, &raw, Some(self.ttl)).await {
                    tracing::warn!(%key, error = %e, "failed to populate listing cache");
                }
            }
            Err(e) => tracing::warn!(%key, error = %e, "failed to encode listing page"),
        }

        Ok(computed)
    }

    /// Invalidate every cached listing page at once.
    pub async fn invalidate_all(&self) -> Result<(), CacheError> {
        self.cache.delete(TAG_KEY).await
    }

    async fn page_key(&self, page: u64, limit: u64) -> String {
        let generation = match self.cache.get(TAG_KEY).await {
            Some(generation) => generation,
            None => {
                let generation = Uuid::new_v4().simple().to_string();
                if let Err(e) = self.cache.set(TAG_KEY, &generation, None).await {
                    tracing::warn!(error = %e, "failed to persist listing tag generation");
                }
                generation
            }
        };
        format!("posts:{generation}:page:{page}:limit:{limit}")
    }
}
