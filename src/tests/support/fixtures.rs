use actix_web::web;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::user::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::user::application::{
    domain::entities::UserProfile,
    ports::outgoing::{TokenProvider, UserQueryResult},
    use_cases::register_user::RegisterUserInput,
};

pub const TEST_JWT_SECRET: &str = "FAKE_JWT_SECRET_FOR_TESTS_DO_NOT_USE_0123";
pub const TEST_JWT_EXPIRE_MINUTES: i64 = 60;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        expire_minutes: TEST_JWT_EXPIRE_MINUTES,
    })
}

/// Token provider in the shape the auth extractor looks up.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(Arc::new(test_jwt_service()) as Arc<dyn TokenProvider + Send + Sync>)
}

/// `Authorization` header value for `user`, signed with the test secret.
pub fn bearer_for(user: &UserProfile) -> String {
    let issued = test_jwt_service()
        .issue_session_token(user)
        .expect("test token should sign");
    format!("Bearer {}", issued.token)
}

pub fn register_input(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> RegisterUserInput {
    RegisterUserInput {
        name: format!("{username} name"),
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
        phone_number: "081234567890".to_string(),
    }
}

pub fn user_query_result(id: Uuid) -> UserQueryResult {
    let now = Utc::now();
    UserQueryResult {
        id,
        name: "Test User".to_string(),
        username: "testuser".to_string(),
        email: "test@example.com".to_string(),
        password_hash: "hashed_password".to_string(),
        phone_number: "081234567890".to_string(),
        role_id: 2,
        role: None,
        created_at: now,
        updated_at: now,
    }
}
