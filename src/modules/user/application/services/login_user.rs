use async_trait::async_trait;
use std::sync::Arc;

use crate::user::application::{
    domain::entities::UserProfile,
    errors::AccountError,
    ports::outgoing::{PasswordHasher, TokenProvider, UserQuery},
    use_cases::login_user::{LoginInput, LoginOutput, LoginUserUseCase},
};

pub struct LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    user_query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        user_query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, input: LoginInput) -> Result<LoginOutput, AccountError> {
        let user = self.user_query.find_by_username(&input.username).await?;

        let is_valid = self
            .password_hasher
            .verify_password(&input.password, &user.password_hash)
            .await?;

        if !is_valid {
            return Err(AccountError::InvalidCredentials);
        }

        let profile = UserProfile {
            role: user.role_code(),
            ..user.to_profile()
        };

        let issued = self.token_provider.issue_session_token(&profile)?;

        Ok(LoginOutput {
            user: profile,
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }
}
