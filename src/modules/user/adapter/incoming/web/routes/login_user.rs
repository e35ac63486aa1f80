use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::use_cases::login_user::LoginInput;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use super::errors::account_error_response;
use super::user_response::{first_blank, UserResponse};

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "alice")]
    pub username: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Authenticated user, including role
    user: UserResponse,

    /// Signed session token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    token: String,

    /// RFC 3339 expiry of `token`
    #[schema(example = "2025-03-04T11:54:20Z")]
    expires_at: String,
}

/// User login
///
/// Authenticates with username and password and returns a signed session token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "user": {
                        "uuid": "123e4567-e89b-12d3-a456-426614174000",
                        "name": "Alice Liddell",
                        "username": "alice",
                        "email": "alice@example.com",
                        "phoneNumber": "081234567890",
                        "role": "customer"
                    },
                    "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "expiresAt": "2025-03-04T11:54:20Z"
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "password is incorrect"
                }
            })
        ),
        (status = 404, description = "Unknown username", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Login attempt");

    if let Some(field) = first_blank(&[("username", &dto.username), ("password", &dto.password)]) {
        warn!(field, "Login rejected: blank field");
        return ApiResponse::bad_request("VALIDATION_ERROR", &format!("{field} is required"));
    }

    let input = LoginInput {
        username: dto.username,
        password: dto.password,
    };

    match data.login_user_use_case.execute(input).await {
        Ok(output) => {
            info!(
                user_id = %output.user.uuid,
                username = %output.user.username,
                "User logged in successfully"
            );

            ApiResponse::success(LoginResponse {
                user: output.user.into(),
                token: output.token,
                expires_at: output.expires_at.to_rfc3339(),
            })
        }
        Err(e) => account_error_response(&e),
    }
}
