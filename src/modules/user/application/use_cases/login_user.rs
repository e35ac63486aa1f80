use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::user::application::{domain::entities::UserProfile, errors::AccountError};

#[derive(Clone, Debug)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct LoginOutput {
    pub user: UserProfile,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, input: LoginInput) -> Result<LoginOutput, AccountError>;
}
