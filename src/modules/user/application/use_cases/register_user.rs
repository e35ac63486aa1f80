use async_trait::async_trait;

use crate::user::application::{domain::entities::UserProfile, errors::AccountError};

#[derive(Clone, Debug)]
pub struct RegisterUserInput {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone_number: String,
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    /// Creates the account and returns its public fields.
    async fn execute(&self, input: RegisterUserInput) -> Result<UserProfile, AccountError>;
}
