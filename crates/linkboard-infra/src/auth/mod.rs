//! Identity collaborator implementation.

mod jwt;

pub use jwt::{JwtConfig, JwtTokenService};
