//! # Linkboard Core
//!
//! The domain layer of the linkboard backend: the post entity, the
//! ranked feed with its read-through cache, and the ports that
//! infrastructure implements. This crate contains pure business logic
//! with zero infrastructure dependencies.

pub mod board;
pub mod domain;
pub mod error;
pub mod feed;
pub mod ports;

pub use board::Board;
pub use error::DomainError;
