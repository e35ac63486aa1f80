use async_trait::async_trait;
use uuid::Uuid;

use crate::user::application::domain::entities::UserProfile;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: String,
    pub role_id: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateUserData {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    /// `None` leaves the stored hash untouched.
    pub password_hash: Option<String>,
}

/// Confirmation of a write. Never includes the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct UserResult {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
}

impl From<UserResult> for UserProfile {
    fn from(user: UserResult) -> Self {
        UserProfile {
            uuid: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            phone_number: user.phone_number,
            role: None,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    async fn update_user(
        &self,
        user_id: Uuid,
        data: UpdateUserData,
    ) -> Result<UserResult, UserRepositoryError>;
}
