//! Domain entities - the core business objects.

mod post;

pub use post::{MAX_TITLE_LEN, NewPost, Post, Submitter, VoteOutcome};
