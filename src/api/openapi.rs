use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::user::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, RegisterUserRequest, UpdateUserRequest, UserResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "Registration, login and profile management for user accounts"
    ),
    paths(
        crate::user::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::user::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::user::adapter::incoming::web::routes::fetch_user::get_current_user_handler,
        crate::user::adapter::incoming::web::routes::fetch_user::get_user_by_id_handler,
        crate::user::adapter::incoming::web::routes::update_user::update_user_handler,
    ),
    components(
        schemas(
            SuccessResponse<UserResponse>,
            ErrorResponse,
            ErrorDetail,
            RegisterUserRequest,
            LoginRequestDto,
            LoginResponse,
            UpdateUserRequest,
            UserResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "User lookup and profile updates"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token returned by /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
