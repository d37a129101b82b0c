use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, VoteOutcome};
use crate::error::RepoError;

/// Post store port. The repository is the only component permitted to
/// mutate the posts collection.
///
/// Connectivity failures surface as [`RepoError::Connection`]; no
/// retries happen inside an implementation - retry policy belongs to
/// the caller.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its unique id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Insert a new post. The store enforces url uniqueness; a
    /// duplicate url surfaces as [`RepoError::Constraint`]. Two
    /// concurrent submissions of the same url must not both succeed.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Flip `voter`'s vote on the post, adjusting `points` in lockstep
    /// with the voter set (floored at 0). The read-modify-write must be
    /// atomic per post id: concurrent toggles on the same post may not
    /// lose updates or corrupt the count.
    async fn toggle_vote(&self, post_id: Uuid, voter: Uuid) -> Result<VoteOutcome, RepoError>;

    /// One slice of the ranked ordering: points descending, then
    /// submitted_at descending, resolved as a single sorted
    /// offset/limit query so a slice is never structurally
    /// inconsistent.
    async fn ranked_slice(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// Total number of posts in the store at query time.
    async fn count(&self) -> Result<u64, RepoError>;
}
