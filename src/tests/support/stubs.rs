use async_trait::async_trait;

use crate::user::application::{
    domain::entities::{UserId, UserProfile},
    errors::AccountError,
    use_cases::{
        fetch_user::FetchUserUseCase,
        login_user::{LoginInput, LoginOutput, LoginUserUseCase},
        register_user::{RegisterUserInput, RegisterUserUseCase},
        update_user::{UpdateUserInput, UpdateUserUseCase},
    },
};

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _input: RegisterUserInput) -> Result<UserProfile, AccountError> {
        unimplemented!()
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _input: LoginInput) -> Result<LoginOutput, AccountError> {
        unimplemented!()
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserUseCase;

#[async_trait]
impl UpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _input: UpdateUserInput,
    ) -> Result<UserProfile, AccountError> {
        unimplemented!()
    }
}

#[derive(Default, Clone)]
pub struct StubFetchUserUseCase;

#[async_trait]
impl FetchUserUseCase for StubFetchUserUseCase {
    async fn current_user(&self, _session: &UserProfile) -> Result<UserProfile, AccountError> {
        unimplemented!()
    }

    async fn by_id(&self, _user_id: UserId) -> Result<UserProfile, AccountError> {
        unimplemented!()
    }
}
