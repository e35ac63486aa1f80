mod errors;
pub mod fetch_user;
pub mod login_user;
pub mod register_user;
pub mod update_user;
mod user_response;

pub use fetch_user::{get_current_user_handler, get_user_by_id_handler};
pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse};
pub use register_user::{register_user_handler, RegisterUserRequest};
pub use update_user::{update_user_handler, UpdateUserRequest};
pub use user_response::UserResponse;
