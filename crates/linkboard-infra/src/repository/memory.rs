//! In-memory post store - used when Postgres is not configured, and by
//! the test suite.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use linkboard_core::domain::{Post, VoteOutcome};
use linkboard_core::error::RepoError;
use linkboard_core::ports::PostRepository;

/// HashMap-backed post store.
///
/// A single write lock serializes every mutation, which gives the vote
/// toggle the same per-post atomicity the SQL store gets from
/// row-level conditional updates, and makes the url uniqueness check
/// race-free. Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        if posts.values().any(|p| p.url == post.url) {
            return Err(RepoError::Constraint(format!(
                "url already submitted: {}",
                post.url
            )));
        }
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn toggle_vote(&self, post_id: Uuid, voter: Uuid) -> Result<VoteOutcome, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&post_id).ok_or(RepoError::NotFound)?;

        let has_voted = match post.votes.iter().position(|v| *v == voter) {
            Some(pos) => {
                post.votes.remove(pos);
                post.points = (post.points - 1).max(0);
                false
            }
            None => {
                post.votes.push(voter);
                post.points += 1;
                true
            }
        };

        Ok(VoteOutcome {
            points: post.points,
            has_voted,
        })
    }

    async fn ranked_slice(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        let mut ranked: Vec<Post> = posts.values().cloned().collect();
        // id as the final tie-break keeps exact ties stable across queries
        ranked.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(b.submitted_at.cmp(&a.submitted_at))
                .then(b.id.cmp(&a.id))
        });
        Ok(ranked
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }
}
