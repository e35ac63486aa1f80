use crate::tests::support::stubs::*;
use crate::user::application::use_cases::{
    fetch_user::FetchUserUseCase, login_user::LoginUserUseCase,
    register_user::RegisterUserUseCase, update_user::UpdateUserUseCase,
};
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Builds an `AppState` whose use cases panic unless replaced.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn RegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn LoginUserUseCase + Send + Sync>,
    update_user: Arc<dyn UpdateUserUseCase + Send + Sync>,
    fetch_user: Arc<dyn FetchUserUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            update_user: Arc::new(StubUpdateUserUseCase),
            fetch_user: Arc::new(StubFetchUserUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl RegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl UpdateUserUseCase + Send + Sync + 'static) -> Self {
        self.update_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_user(mut self, uc: impl FetchUserUseCase + Send + Sync + 'static) -> Self {
        self.fetch_user = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            update_user_use_case: self.update_user,
            fetch_user_use_case: self.fetch_user,
        })
    }
}
