//! PostgreSQL post repository.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbBackend, DbConn, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect, SqlErr, Statement,
};
use uuid::Uuid;

use linkboard_core::domain::{Post, VoteOutcome};
use linkboard_core::error::RepoError;
use linkboard_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// Vote toggle as one conditional UPDATE: the voter set and the score
/// move together under the row lock, so concurrent toggles on the same
/// post serialize at the store and no update is lost. RETURNING reads
/// the new row, giving the caller's resulting vote state.
const TOGGLE_VOTE_SQL: &str = r#"
UPDATE posts
   SET points = CASE WHEN $2 = ANY(votes) THEN GREATEST(points - 1, 0) ELSE points + 1 END,
       votes  = CASE WHEN $2 = ANY(votes) THEN array_remove(votes, $2) ELSE array_append(votes, $2) END
 WHERE id = $1
RETURNING points, $2 = ANY(votes) AS has_voted
"#;

/// SeaORM-backed post store. The connection handle is shared through
/// an `Arc` with whoever else needs it (the health check pings it).
pub struct PostgresPostRepository {
    db: Arc<DbConn>,
}

impl PostgresPostRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, new_post: Post) -> Result<Post, RepoError> {
        let model: post::ActiveModel = new_post.into();
        let inserted = model.insert(self.db.as_ref()).await.map_err(|e| {
            // url uniqueness lives in the unique index, not in a
            // check-then-insert in this repository
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(msg)) => RepoError::Constraint(msg),
                _ => map_db_err(e),
            }
        })?;

        Ok(inserted.into())
    }

    async fn toggle_vote(&self, post_id: Uuid, voter: Uuid) -> Result<VoteOutcome, RepoError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            TOGGLE_VOTE_SQL,
            [post_id.into(), voter.into()],
        );

        let row = self
            .db
            .query_one(stmt)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        let points: i32 = row.try_get("", "points").map_err(map_db_err)?;
        let has_voted: bool = row.try_get("", "has_voted").map_err(map_db_err)?;

        Ok(VoteOutcome { points, has_voted })
    }

    async fn ranked_slice(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        // single sorted query; id as the final tie-break keeps exact
        // ties stable between requests
        let result = PostEntity::find()
            .order_by_desc(post::Column::Points)
            .order_by_desc(post::Column::SubmittedAt)
            .order_by_desc(post::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find()
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(_) => {
            RepoError::Connection("failed to acquire connection from pool".to_string())
        }
        other => RepoError::Query(other.to_string()),
    }
}
