use async_trait::async_trait;

use crate::user::application::{
    domain::entities::{UserId, UserProfile},
    errors::AccountError,
};

#[async_trait]
pub trait FetchUserUseCase: Send + Sync {
    /// Re-projects the user already authenticated by the caller.
    async fn current_user(&self, session: &UserProfile) -> Result<UserProfile, AccountError>;

    async fn by_id(&self, user_id: UserId) -> Result<UserProfile, AccountError>;
}
