//! # Linkboard Infrastructure
//!
//! Concrete implementations of the ports defined in `linkboard-core`:
//! the Postgres and in-memory post stores, the Redis and in-memory
//! caches, and the JWT identity collaborator.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL post store via SeaORM
//! - `redis` - Redis-backed listing cache

pub mod auth;
pub mod cache;
pub mod database;
pub mod repository;

// Re-exports - In-Memory
pub use cache::InMemoryCache;
pub use repository::InMemoryPostRepository;

pub use auth::{JwtConfig, JwtTokenService};

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use cache::{RedisCache, RedisConfig};

#[cfg(test)]
mod board_tests;
