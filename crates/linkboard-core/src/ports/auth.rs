//! Identity provider port.
//!
//! The board trusts whatever identity the provider hands it: `user_id`
//! is the stable voter/author key, `name` a display-only snapshot.

use uuid::Uuid;

/// Claims carried by an authentication token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub name: String,
    pub exp: i64,
}

/// Token service trait - validates opaque bearer tokens into claims.
pub trait TokenService: Send + Sync {
    /// Generate a token for a user.
    fn generate_token(&self, user_id: Uuid, name: &str) -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("token expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("missing authorization header")]
    MissingAuth,
}
