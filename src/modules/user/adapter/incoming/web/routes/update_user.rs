use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::user::application::{
    domain::entities::UserId, use_cases::update_user::UpdateUserInput,
};
use crate::AppState;
use actix_web::{put, web, Responder};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::errors::account_error_response;
use super::user_response::{first_blank, profile_field_too_long, UserResponse};

/// Replacement profile fields. Omit `password` to keep the current one.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[schema(example = "Alice Liddell")]
    pub name: String,

    #[schema(example = "alice")]
    pub username: String,

    #[schema(example = "alice@example.com")]
    pub email: String,

    #[schema(example = "081234567890")]
    pub phone_number: String,

    #[serde(default)]
    #[schema(example = "NewSecurePass123!")]
    pub password: Option<String>,

    #[serde(default)]
    #[schema(example = "NewSecurePass123!")]
    pub confirm_password: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Update user
///
/// Replaces the profile fields of the given user. A new password requires a
/// matching confirmation.
#[utoipa::path(
    put,
    path = "/api/auth/{uuid}",
    tag = "users",
    security(("BearerAuth" = [])),
    params(("uuid" = String, Path, description = "User UUID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = inline(SuccessResponse<UserResponse>)),
        (status = 400, description = "Invalid input or password mismatch", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Username or email already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/auth/{uuid}")]
pub async fn update_user_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw_id = path.into_inner();
    let user_id = match Uuid::parse_str(&raw_id) {
        Ok(id) => id,
        Err(_) => {
            warn!(uuid = %raw_id, "Rejected malformed user id");
            return ApiResponse::bad_request("VALIDATION_ERROR", "uuid is not a valid UUID");
        }
    };

    let dto = req.into_inner();

    info!(requested_by = %user.profile.uuid, user_id = %user_id, "Update attempt");

    // Any authenticated caller may update any account.
    if user.profile.user_id() != UserId::from(user_id) {
        warn!(
            requested_by = %user.profile.uuid,
            user_id = %user_id,
            "Updating another user's account"
        );
    }

    if let Some(field) = first_blank(&[
        ("name", &dto.name),
        ("username", &dto.username),
        ("email", &dto.email),
        ("phoneNumber", &dto.phone_number),
    ]) {
        warn!(field, "Update rejected: blank field");
        return ApiResponse::bad_request("VALIDATION_ERROR", &format!("{field} is required"));
    }

    if let Some((field, max)) =
        profile_field_too_long(&dto.name, &dto.username, &dto.email, &dto.phone_number)
    {
        warn!(field, max, "Update rejected: field too long");
        return ApiResponse::bad_request(
            "VALIDATION_ERROR",
            &format!("{field} must be at most {max} characters"),
        );
    }

    if !EmailAddress::is_valid(&dto.email) {
        warn!(email = %dto.email, "Update rejected: malformed email");
        return ApiResponse::bad_request("VALIDATION_ERROR", "email is not a valid address");
    }

    let input = UpdateUserInput {
        name: dto.name,
        username: dto.username,
        email: dto.email,
        phone_number: dto.phone_number,
        password: non_empty(dto.password),
        confirm_password: non_empty(dto.confirm_password),
    };

    match data.update_user_use_case.execute(user_id.into(), input).await {
        Ok(profile) => {
            info!(user_id = %profile.uuid, "User updated");
            ApiResponse::success(UserResponse::from(profile))
        }
        Err(e) => account_error_response(&e),
    }
}
