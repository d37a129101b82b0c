//! The board service - wires the repository, the ranking engine, and
//! the read cache together.
//!
//! Every successful mutation invalidates the listing cache before the
//! caller gets its response, which is what gives a writer
//! read-your-writes on the next listing fetch.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{NewPost, Post, Submitter, VoteOutcome};
use crate::error::{DomainError, RepoError};
use crate::feed::{CachedFeed, PostPage};
use crate::ports::{Cache, PostRepository};

pub struct Board {
    repo: Arc<dyn PostRepository>,
    feed: CachedFeed,
}

impl Board {
    pub fn new(repo: Arc<dyn PostRepository>, cache: Arc<dyn Cache>) -> Self {
        Self {
            repo,
            feed: CachedFeed::new(cache),
        }
    }

    /// Submit a new link. Validation and the duplicate check happen
    /// before any mutation; on success the post starts with the
    /// submitter's automatic self-vote.
    pub async fn submit(
        &self,
        title: &str,
        url: &str,
        submitter: Option<&Submitter>,
    ) -> Result<Post, DomainError> {
        let submitter = submitter.ok_or(DomainError::Unauthenticated)?;
        let submission = NewPost::new(title, url)?;
        let url = submission.url().to_owned();

        let post = self
            .repo
            .insert(Post::new(submission, submitter))
            .await
            .map_err(|e| match e {
                RepoError::Constraint(_) => DomainError::DuplicateUrl(url.clone()),
                other => store_error(other),
            })?;

        tracing::info!(post_id = %post.id, url = %post.url, "post submitted");
        self.invalidate().await?;
        Ok(post)
    }

    /// Toggle the caller's vote on a post.
    pub async fn toggle_vote(
        &self,
        post_id: Uuid,
        voter: Option<&Submitter>,
    ) -> Result<VoteOutcome, DomainError> {
        let voter = voter.ok_or(DomainError::Unauthenticated)?;

        let outcome = self
            .repo
            .toggle_vote(post_id, voter.id)
            .await
            .map_err(|e| match e {
                RepoError::NotFound => DomainError::NotFound { id: post_id },
                other => store_error(other),
            })?;

        tracing::debug!(
            %post_id,
            points = outcome.points,
            has_voted = outcome.has_voted,
            "vote toggled"
        );
        self.invalidate().await?;
        Ok(outcome)
    }

    /// Fetch a single post by id.
    pub async fn post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(store_error)?
            .ok_or(DomainError::NotFound { id })
    }

    /// One ranked page, served through the read cache.
    pub async fn page(&self, page: u64, limit: u64) -> Result<PostPage, DomainError> {
        if page == 0 {
            return Err(DomainError::Validation("page must be at least 1".into()));
        }
        if limit == 0 {
            return Err(DomainError::Validation("limit must be at least 1".into()));
        }
        self.feed
            .page(self.repo.as_ref(), page, limit)
            .await
            .map_err(store_error)
    }

    async fn invalidate(&self) -> Result<(), DomainError> {
        self.feed
            .invalidate_all()
            .await
            .map_err(|e| DomainError::Internal(format!("cache invalidation failed: {e}")))
    }
}

fn store_error(e: RepoError) -> DomainError {
    match e {
        RepoError::Connection(msg) | RepoError::Query(msg) => DomainError::StoreUnavailable(msg),
        RepoError::NotFound => DomainError::Internal("post vanished mid-operation".into()),
        RepoError::Constraint(msg) => DomainError::Internal(msg),
    }
}
