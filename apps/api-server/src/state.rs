//! Application state - shared across all handlers.

use std::sync::Arc;

use linkboard_core::Board;
use linkboard_core::ports::{Cache, PostRepository, TokenService};
use linkboard_infra::auth::JwtTokenService;
use linkboard_infra::cache::InMemoryCache;
use linkboard_infra::repository::InMemoryPostRepository;

#[cfg(feature = "postgres")]
use linkboard_infra::database::{self, DatabaseConfig, DbConn, PostgresPostRepository};

#[cfg(feature = "redis")]
use linkboard_infra::cache::{RedisCache, RedisConfig};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<Board>,
    pub tokens: Arc<dyn TokenService>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DbConn>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let (db, repo): (Option<Arc<DbConn>>, Arc<dyn PostRepository>) = {
            match &config.database_url {
                Some(url) => {
                    let db_config = DatabaseConfig {
                        url: url.clone(),
                        max_connections: config.db_max_connections,
                        min_connections: config.db_min_connections,
                    };
                    match database::connect(&db_config).await {
                        Ok(conn) => {
                            // One handle serves the repository and the
                            // health check; DbConn itself is not Clone
                            // in every build configuration.
                            let conn = Arc::new(conn);
                            let repo = Arc::new(PostgresPostRepository::new(conn.clone()));
                            (Some(conn), repo)
                        }
                        Err(e) => {
                            tracing::error!(
                                "Failed to connect to database: {}. Using in-memory fallback.",
                                e
                            );
                            (None, Arc::new(InMemoryPostRepository::new()))
                        }
                    }
                }
                None => {
                    tracing::warn!(
                        "DATABASE_URL not set. Running without database (in-memory mode)."
                    );
                    (None, Arc::new(InMemoryPostRepository::new()))
                }
            }
        };

        #[cfg(not(feature = "postgres"))]
        let repo: Arc<dyn PostRepository> = {
            tracing::info!("Running without postgres feature - using in-memory post store");
            Arc::new(InMemoryPostRepository::new())
        };

        #[cfg(feature = "redis")]
        let cache: Arc<dyn Cache> = match &config.redis_url {
            Some(url) => {
                let redis_config = RedisConfig {
                    url: url.clone(),
                    ..RedisConfig::default()
                };
                match RedisCache::new(redis_config).await {
                    Ok(cache) => Arc::new(cache),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to Redis: {}. Using in-memory cache.",
                            e
                        );
                        Arc::new(InMemoryCache::new())
                    }
                }
            }
            None => Arc::new(InMemoryCache::new()),
        };

        #[cfg(not(feature = "redis"))]
        let cache: Arc<dyn Cache> = Arc::new(InMemoryCache::new());

        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());

        tracing::info!("Application state initialized");

        Self {
            board: Arc::new(Board::new(repo, cache)),
            tokens,
            #[cfg(feature = "postgres")]
            db,
        }
    }
}
