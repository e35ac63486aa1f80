use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::{debug, warn};
use uuid::Uuid;

use super::errors::account_error_response;
use super::user_response::UserResponse;

/// Current user
///
/// Returns the user carried by the bearer token.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = inline(SuccessResponse<UserResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/auth/user")]
pub async fn get_current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    debug!(user_id = %user.profile.uuid, "Fetching current user");

    match data.fetch_user_use_case.current_user(&user.profile).await {
        Ok(profile) => ApiResponse::success(UserResponse::from(profile)),
        Err(e) => account_error_response(&e),
    }
}

/// Get user by id
///
/// Looks up any user by UUID and returns the public fields.
#[utoipa::path(
    get,
    path = "/api/auth/{uuid}",
    tag = "users",
    security(("BearerAuth" = [])),
    params(("uuid" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "User found", body = inline(SuccessResponse<UserResponse>)),
        (status = 400, description = "Malformed UUID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/{uuid}")]
pub async fn get_user_by_id_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
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

    debug!(requested_by = %user.profile.uuid, user_id = %user_id, "Fetching user by id");

    match data.fetch_user_use_case.by_id(user_id.into()).await {
        Ok(profile) => ApiResponse::success(UserResponse::from(profile)),
        Err(e) => account_error_response(&e),
    }
}
