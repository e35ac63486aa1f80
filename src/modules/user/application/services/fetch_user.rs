use async_trait::async_trait;

use crate::user::application::{
    domain::entities::{UserId, UserProfile},
    errors::AccountError,
    ports::outgoing::UserQuery,
    use_cases::fetch_user::FetchUserUseCase,
};

pub struct FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    user_query: Q,
}

impl<Q> FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> FetchUserUseCase for FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn current_user(&self, session: &UserProfile) -> Result<UserProfile, AccountError> {
        Ok(session.clone())
    }

    async fn by_id(&self, user_id: UserId) -> Result<UserProfile, AccountError> {
        let user = self.user_query.find_by_id(user_id.value()).await?;
        Ok(user.to_profile())
    }
}
