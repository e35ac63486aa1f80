use async_trait::async_trait;
use std::sync::Arc;

use crate::user::application::{
    domain::entities::{Role, UserProfile},
    errors::AccountError,
    helpers::existing_user,
    ports::outgoing::{
        user_repository::CreateUserData, PasswordHasher, UserQuery, UserRepository,
    },
    use_cases::register_user::{RegisterUserInput, RegisterUserUseCase},
};

pub struct RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        user_query: Q,
        user_repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: RegisterUserInput) -> Result<UserProfile, AccountError> {
        // Hashing runs before any check, so a hasher failure wins over every
        // validation error.
        let password_hash = self.password_hasher.hash_password(&input.password).await?;

        if existing_user(self.user_query.find_by_username(&input.username).await)?.is_some() {
            return Err(AccountError::UsernameExists);
        }

        if existing_user(self.user_query.find_by_email(&input.email).await)?.is_some() {
            return Err(AccountError::EmailExists);
        }

        if input.password != input.confirm_password {
            return Err(AccountError::PasswordMismatch);
        }

        let created = self
            .user_repository
            .create_user(CreateUserData {
                name: input.name,
                username: input.username,
                email: input.email,
                password_hash,
                phone_number: input.phone_number,
                role_id: Role::DEFAULT.id(),
            })
            .await?;

        tracing::debug!(user_id = %created.id, "User record created");

        Ok(created.into())
    }
}
