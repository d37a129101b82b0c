//! End-to-end board behavior against the in-memory store and cache:
//! submission, voting, ranking, and cache coherence.

use std::sync::Arc;

use uuid::Uuid;

use linkboard_core::domain::Submitter;
use linkboard_core::{Board, DomainError};

use crate::cache::InMemoryCache;
use crate::repository::InMemoryPostRepository;

fn board() -> Board {
    Board::new(
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(InMemoryCache::new()),
    )
}

fn user(name: &str) -> Submitter {
    Submitter {
        id: Uuid::new_v4(),
        name: name.into(),
    }
}

#[tokio::test]
async fn submit_then_vote_then_unvote() {
    let board = board();
    let alice = user("alice");
    let bob = user("bob");

    let post = board
        .submit("Example", "https://example.com", Some(&alice))
        .await
        .unwrap();
    assert_eq!(post.points, 1);
    assert_eq!(post.votes, vec![alice.id]);

    let voted = board.toggle_vote(post.id, Some(&bob)).await.unwrap();
    assert_eq!(voted.points, 2);
    assert!(voted.has_voted);

    let unvoted = board.toggle_vote(post.id, Some(&bob)).await.unwrap();
    assert_eq!(unvoted.points, 1);
    assert!(!unvoted.has_voted);
}

#[tokio::test]
async fn anonymous_mutations_are_rejected() {
    let board = board();

    let err = board
        .submit("Example", "https://example.com", None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthenticated));

    let err = board.toggle_vote(Uuid::new_v4(), None).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthenticated));
}

#[tokio::test]
async fn second_submission_of_same_url_is_a_duplicate() {
    let board = board();
    let alice = user("alice");

    board
        .submit("Example", "https://example.com", Some(&alice))
        .await
        .unwrap();

    let err = board
        .submit("Same link, other title", "https://example.com", Some(&alice))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::DuplicateUrl(_)));

    // the store still holds exactly one post with that url
    let page = board.page(1, 10).await.unwrap();
    assert_eq!(page.pagination.total_count, 1);
}

#[tokio::test]
async fn vote_on_missing_post_is_not_found() {
    let board = board();
    let alice = user("alice");
    let id = Uuid::new_v4();

    let err = board.toggle_vote(id, Some(&alice)).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { id: missing } if missing == id));
}

#[tokio::test]
async fn fetch_by_id_round_trips() {
    let board = board();
    let alice = user("alice");

    let post = board
        .submit("Example", "https://example.com", Some(&alice))
        .await
        .unwrap();

    let fetched = board.post(post.id).await.unwrap();
    assert_eq!(fetched.id, post.id);
    assert_eq!(fetched.url, "https://example.com");

    let err = board.post(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn listing_rejects_degenerate_parameters() {
    let board = board();

    assert!(matches!(
        board.page(0, 10).await.unwrap_err(),
        DomainError::Validation(_)
    ));
    assert!(matches!(
        board.page(1, 0).await.unwrap_err(),
        DomainError::Validation(_)
    ));
}

#[tokio::test]
async fn submission_is_visible_to_the_next_read() {
    let board = board();
    let alice = user("alice");

    // prime the cache with the pre-write page
    let before = board.page(1, 10).await.unwrap();
    assert_eq!(before.pagination.total_count, 0);

    let post = board
        .submit("Example", "https://example.com", Some(&alice))
        .await
        .unwrap();

    let after = board.page(1, 10).await.unwrap();
    let matching: Vec<_> = after.posts.iter().filter(|p| p.id == post.id).collect();
    assert_eq!(matching.len(), 1, "new post appears exactly once");
}

#[tokio::test]
async fn vote_is_visible_to_the_next_read() {
    let board = board();
    let alice = user("alice");
    let bob = user("bob");

    let post = board
        .submit("Example", "https://example.com", Some(&alice))
        .await
        .unwrap();
    board.page(1, 10).await.unwrap(); // cached

    board.toggle_vote(post.id, Some(&bob)).await.unwrap();

    let page = board.page(1, 10).await.unwrap();
    assert_eq!(page.posts[0].points, 2);
}

#[tokio::test]
async fn repeated_reads_are_served_consistently_from_cache() {
    let board = board();
    let alice = user("alice");

    for i in 0..5 {
        board
            .submit(&format!("post {i}"), &format!("https://example.com/{i}"), Some(&alice))
            .await
            .unwrap();
    }

    let first = board.page(1, 10).await.unwrap();
    let second = board.page(1, 10).await.unwrap();

    let first_ids: Vec<Uuid> = first.posts.iter().map(|p| p.id).collect();
    let second_ids: Vec<Uuid> = second.posts.iter().map(|p| p.id).collect();
    assert_eq!(first_ids, second_ids);
}

#[tokio::test]
async fn board_pages_partition_the_ranking() {
    let board = board();
    let alice = user("alice");

    for i in 0..25 {
        board
            .submit(&format!("post {i}"), &format!("https://example.com/{i}"), Some(&alice))
            .await
            .unwrap();
    }

    let p1 = board.page(1, 10).await.unwrap();
    let p2 = board.page(2, 10).await.unwrap();
    let p3 = board.page(3, 10).await.unwrap();

    assert_eq!(p1.posts.len(), 10);
    assert_eq!(p2.posts.len(), 10);
    assert_eq!(p3.posts.len(), 5);
    assert_eq!(p3.pagination.total_pages, 3);
    assert!(!p3.pagination.has_next_page);

    let mut all: Vec<Uuid> = Vec::new();
    for page in [&p1, &p2, &p3] {
        all.extend(page.posts.iter().map(|p| p.id));
    }
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 25, "no gaps, no overlaps");
}

#[tokio::test]
async fn voted_posts_rise_in_the_ranking() {
    let board = board();
    let alice = user("alice");

    let first = board
        .submit("first", "https://example.com/1", Some(&alice))
        .await
        .unwrap();
    let second = board
        .submit("second", "https://example.com/2", Some(&alice))
        .await
        .unwrap();

    // tie on points: the more recent submission leads
    let page = board.page(1, 10).await.unwrap();
    assert_eq!(page.posts[0].id, second.id);

    // an extra vote moves the older post to the top
    board.toggle_vote(first.id, Some(&user("bob"))).await.unwrap();
    let page = board.page(1, 10).await.unwrap();
    assert_eq!(page.posts[0].id, first.id);
}
