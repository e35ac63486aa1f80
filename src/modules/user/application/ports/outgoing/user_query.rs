use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::user::application::domain::entities::UserProfile;

#[derive(Debug, Clone, PartialEq)]
pub struct RoleQueryResult {
    pub id: i32,
    pub code: String,
    pub name: String,
}

/// Result DTO for user queries.
/// Carries the stored hash, so it must never leave the application layer as is.
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: String,
    pub role_id: i32,
    pub role: Option<RoleQueryResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserQueryResult {
    /// Public fields without the role.
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            uuid: self.id,
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            role: None,
        }
    }

    pub fn role_code(&self) -> Option<String> {
        self.role.as_ref().map(|role| role.code.to_lowercase())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<UserQueryResult, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<UserQueryResult, UserQueryError>;
    async fn find_by_username(&self, username: &str) -> Result<UserQueryResult, UserQueryError>;
}
