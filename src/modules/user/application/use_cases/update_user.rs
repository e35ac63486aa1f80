use async_trait::async_trait;

use crate::user::application::{
    domain::entities::{UserId, UserProfile},
    errors::AccountError,
};

#[derive(Clone, Debug)]
pub struct UpdateUserInput {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        input: UpdateUserInput,
    ) -> Result<UserProfile, AccountError>;
}
