//! Data Transfer Objects - request/response types for the board API.
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Request to submit a link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitPostRequest {
    pub title: String,
    pub url: String,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub url: String,
    pub points: i32,
    pub submitted_by_id: String,
    pub submitted_by_name: String,
    pub submitted_at: String,
    pub votes: Vec<String>,
}

/// Outcome of a vote toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub points: i32,
    pub has_voted: bool,
}

/// Pagination block on a listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// One ranked page of posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub pagination: PaginationResponse,
}
