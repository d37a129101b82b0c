use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum length of a post title, in characters.
pub const MAX_TITLE_LEN: usize = 300;

/// Post entity - a submitted link with its score and voter set.
///
/// `points` and `votes` are maintained in lockstep by every mutation:
/// a post is created with one point and the author's automatic
/// self-vote, and the only mutation afterwards is the vote toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub points: i32,
    pub submitted_by_id: Uuid,
    /// Display-name snapshot taken at submission time; not refreshed
    /// if the author later renames.
    pub submitted_by_name: String,
    pub submitted_at: DateTime<Utc>,
    pub votes: Vec<Uuid>,
}

impl Post {
    /// Build a new post from a validated submission. The submitter's
    /// self-vote is counted immediately.
    pub fn new(submission: NewPost, submitter: &Submitter) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: submission.title,
            url: submission.url,
            points: 1,
            submitted_by_id: submitter.id,
            submitted_by_name: submitter.name.clone(),
            submitted_at: Utc::now(),
            votes: vec![submitter.id],
        }
    }

    pub fn has_voted(&self, voter: Uuid) -> bool {
        self.votes.contains(&voter)
    }
}

/// A validated link submission. Construction enforces the title and
/// url constraints, so a `NewPost` is always safe to persist.
#[derive(Debug, Clone)]
pub struct NewPost {
    title: String,
    url: String,
}

impl NewPost {
    pub fn new(title: &str, url: &str) -> Result<Self, DomainError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::Validation("title is required".into()));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::Validation(format!(
                "title must be at most {MAX_TITLE_LEN} characters"
            )));
        }

        let url = url.trim();
        if url.is_empty() {
            return Err(DomainError::Validation("url is required".into()));
        }
        Url::parse(url)
            .map_err(|_| DomainError::Validation("url is not a valid URL".into()))?;

        Ok(Self {
            title: title.to_owned(),
            url: url.to_owned(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Authenticated identity handle supplied by the identity provider.
///
/// `id` is the stable voter/author key; `name` is display-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitter {
    pub id: Uuid,
    pub name: String,
}

/// Result of a vote toggle: the post's new score and whether the
/// caller now has an active vote on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOutcome {
    pub points: i32,
    pub has_voted: bool,
}
