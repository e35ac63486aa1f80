use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::use_cases::register_user::RegisterUserInput;
use crate::AppState;
use actix_web::{post, web, Responder};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use super::errors::account_error_response;
use super::user_response::{first_blank, profile_field_too_long, UserResponse};

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[schema(example = "Alice Liddell")]
    pub name: String,

    /// Unique login name
    #[schema(example = "alice")]
    pub username: String,

    #[schema(example = "alice@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// Must equal `password`
    #[schema(example = "SecurePass123!")]
    pub confirm_password: String,

    #[schema(example = "081234567890")]
    pub phone_number: String,
}

/// Register a new user
///
/// Creates an account with the default role and returns its public fields.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (
            status = 201,
            description = "User created successfully",
            body = inline(SuccessResponse<UserResponse>),
            example = json!({
                "success": true,
                "data": {
                    "uuid": "123e4567-e89b-12d3-a456-426614174000",
                    "name": "Alice Liddell",
                    "username": "alice",
                    "email": "alice@example.com",
                    "phoneNumber": "081234567890"
                }
            })
        ),
        (status = 400, description = "Invalid input or password mismatch", body = ErrorResponse),
        (
            status = 409,
            description = "Username or email already taken",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "USERNAME_EXISTS",
                    "message": "username already exists"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, email = %dto.email, "Registration attempt");

    if let Some(field) = first_blank(&[
        ("name", &dto.name),
        ("username", &dto.username),
        ("email", &dto.email),
        ("password", &dto.password),
        ("confirmPassword", &dto.confirm_password),
        ("phoneNumber", &dto.phone_number),
    ]) {
        warn!(field, "Registration rejected: blank field");
        return ApiResponse::bad_request("VALIDATION_ERROR", &format!("{field} is required"));
    }

    if let Some((field, max)) =
        profile_field_too_long(&dto.name, &dto.username, &dto.email, &dto.phone_number)
    {
        warn!(field, max, "Registration rejected: field too long");
        return ApiResponse::bad_request(
            "VALIDATION_ERROR",
            &format!("{field} must be at most {max} characters"),
        );
    }

    if !EmailAddress::is_valid(&dto.email) {
        warn!(email = %dto.email, "Registration rejected: malformed email");
        return ApiResponse::bad_request("VALIDATION_ERROR", "email is not a valid address");
    }

    let input = RegisterUserInput {
        name: dto.name,
        username: dto.username,
        email: dto.email,
        password: dto.password,
        confirm_password: dto.confirm_password,
        phone_number: dto.phone_number,
    };

    match data.register_user_use_case.execute(input).await {
        Ok(profile) => {
            info!(user_id = %profile.uuid, username = %profile.username, "User registered");
            ApiResponse::created(UserResponse::from(profile))
        }
        Err(e) => account_error_response(&e),
    }
}
