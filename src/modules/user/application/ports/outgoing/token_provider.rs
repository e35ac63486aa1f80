use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::application::domain::entities::UserProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claim set embedded in a session token: the public user fields plus expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user: UserProfile,
    pub exp: i64, // Expiration timestamp
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub trait TokenProvider: Send + Sync {
    fn issue_session_token(&self, user: &UserProfile) -> Result<IssuedToken, TokenError>;
    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
