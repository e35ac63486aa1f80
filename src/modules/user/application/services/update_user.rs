use async_trait::async_trait;
use std::sync::Arc;

use crate::user::application::{
    domain::entities::{UserId, UserProfile},
    errors::AccountError,
    helpers::existing_user,
    ports::outgoing::{
        user_repository::UpdateUserData, PasswordHasher, UserQuery, UserRepository,
    },
    use_cases::update_user::{UpdateUserInput, UpdateUserUseCase},
};

pub struct UpdateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> UpdateUserService<Q, R>
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

    async fn new_password_hash(
        &self,
        input: &UpdateUserInput,
    ) -> Result<Option<String>, AccountError> {
        let Some(password) = &input.password else {
            return Ok(None);
        };

        if input.confirm_password.as_ref() != Some(password) {
            return Err(AccountError::PasswordMismatch);
        }

        Ok(Some(self.password_hasher.hash_password(password).await?))
    }
}

#[async_trait]
impl<Q, R> UpdateUserUseCase for UpdateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        input: UpdateUserInput,
    ) -> Result<UserProfile, AccountError> {
        let current = self.user_query.find_by_id(user_id.value()).await?;

        if input.username != current.username
            && existing_user(self.user_query.find_by_username(&input.username).await)?.is_some()
        {
            return Err(AccountError::UsernameExists);
        }

        if input.email != current.email
            && existing_user(self.user_query.find_by_email(&input.email).await)?.is_some()
        {
            return Err(AccountError::EmailExists);
        }

        let password_hash = self.new_password_hash(&input).await?;

        let updated = self
            .user_repository
            .update_user(
                current.id,
                UpdateUserData {
                    name: input.name,
                    username: input.username,
                    email: input.email,
                    phone_number: input.phone_number,
                    password_hash,
                },
            )
            .await?;

        Ok(updated.into())
    }
}
