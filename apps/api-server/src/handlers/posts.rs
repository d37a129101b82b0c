//! Post submission, voting, and listing handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use linkboard_core::domain::{Post, Submitter};
use linkboard_core::feed::PostPage;
use linkboard_shared::dto::{
    PaginationResponse, PostListResponse, PostResponse, SubmitPostRequest, VoteResponse,
};

use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    page: Option<u64>,
    limit: Option<u64>,
}

/// GET /api/posts?page=&limit=
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(10);

    let listing = state.board.page(page, limit).await?;

    Ok(HttpResponse::Ok().json(list_response(listing)))
}

/// POST /api/posts
pub async fn submit(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    body: web::Json<SubmitPostRequest>,
) -> AppResult<HttpResponse> {
    let submitter = identity.0.map(Submitter::from);
    let req = body.into_inner();

    let post = state
        .board
        .submit(&req.title, &req.url, submitter.as_ref())
        .await?;

    Ok(HttpResponse::Created().json(post_response(post)))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.board.post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// POST /api/posts/{id}/vote
pub async fn vote(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let voter = identity.0.map(Submitter::from);

    let outcome = state
        .board
        .toggle_vote(path.into_inner(), voter.as_ref())
        .await?;

    Ok(HttpResponse::Ok().json(VoteResponse {
        points: outcome.points,
        has_voted: outcome.has_voted,
    }))
}

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        url: post.url,
        points: post.points,
        submitted_by_id: post.submitted_by_id.to_string(),
        submitted_by_name: post.submitted_by_name,
        submitted_at: post.submitted_at.to_rfc3339(),
        votes: post.votes.iter().map(Uuid::to_string).collect(),
    }
}

fn list_response(page: PostPage) -> PostListResponse {
    PostListResponse {
        posts: page.posts.into_iter().map(post_response).collect(),
        pagination: PaginationResponse {
            current_page: page.pagination.current_page,
            total_pages: page.pagination.total_pages,
            total_count: page.pagination.total_count,
            has_next_page: page.pagination.has_next_page,
            has_prev_page: page.pagination.has_prev_page,
        },
    }
}
