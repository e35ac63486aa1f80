use actix_web::HttpResponse;
use tracing::{error, warn};

use crate::shared::api::ApiResponse;
use crate::user::application::errors::AccountError;

/// Maps an account failure onto the response envelope. Infrastructure details
/// are logged and never returned.
pub fn account_error_response(err: &AccountError) -> HttpResponse {
    match err {
        AccountError::NotFound => {
            warn!("Request failed: user not found");
            ApiResponse::not_found("USER_NOT_FOUND", &err.to_string())
        }
        AccountError::InvalidCredentials => {
            warn!("Request failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", &err.to_string())
        }
        AccountError::UsernameExists => {
            warn!("Request failed: username already taken");
            ApiResponse::conflict("USERNAME_EXISTS", &err.to_string())
        }
        AccountError::EmailExists => {
            warn!("Request failed: email already taken");
            ApiResponse::conflict("EMAIL_EXISTS", &err.to_string())
        }
        AccountError::PasswordMismatch => {
            warn!("Request failed: password confirmation mismatch");
            ApiResponse::bad_request("PASSWORD_MISMATCH", &err.to_string())
        }
        AccountError::Persistence(msg) => {
            error!(error = %msg, "Persistence failure");
            ApiResponse::internal_error()
        }
        AccountError::Crypto(msg) => {
            error!(error = %msg, "Crypto failure");
            ApiResponse::internal_error()
        }
    }
}
