#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use uuid::Uuid;

    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;
    use linkboard_core::domain::Post;
    use linkboard_core::error::RepoError;
    use linkboard_core::ports::PostRepository;

    fn model(points: i32) -> post::Model {
        post::Model {
            id: Uuid::new_v4(),
            title: "Example".to_owned(),
            url: format!("https://example.com/{points}"),
            points,
            submitted_by_id: Uuid::new_v4(),
            submitted_by_name: "alice".to_owned(),
            submitted_at: chrono::Utc::now().into(),
            votes: vec![],
        }
    }

    #[tokio::test]
    async fn find_post_by_id() {
        let expected = model(3);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![expected.clone()]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));

        let found: Option<Post> = repo.find_by_id(expected.id).await.unwrap();

        let found = found.unwrap();
        assert_eq!(found.id, expected.id);
        assert_eq!(found.points, 3);
        assert_eq!(found.title, "Example");
    }

    #[tokio::test]
    async fn toggle_vote_reads_returning_row() {
        let row = BTreeMap::from([
            ("points", Value::Int(Some(2))),
            ("has_voted", Value::Bool(Some(true))),
        ]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));

        let outcome = repo
            .toggle_vote(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(outcome.points, 2);
        assert!(outcome.has_voted);
    }

    #[tokio::test]
    async fn toggle_vote_on_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(Vec::<Vec<BTreeMap<&str, Value>>>::from([vec![]]))
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));

        let err = repo
            .toggle_vote(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::NotFound));
    }

    // Mock connections are not Clone, so the handle must be usable by
    // the repository and another holder at the same time.
    #[tokio::test]
    async fn connection_handle_is_shared_not_cloned() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<post::Model>::new()])
                .into_connection(),
        );

        let repo = PostgresPostRepository::new(db.clone());

        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
        assert_eq!(Arc::strong_count(&db), 2);
    }

    #[tokio::test]
    async fn ranked_slice_maps_rows_to_domain_posts() {
        let first = model(5);
        let second = model(3);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![first.clone(), second.clone()]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));

        let posts = repo.ranked_slice(0, 10).await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, first.id);
        assert_eq!(posts[1].id, second.id);
    }
}
