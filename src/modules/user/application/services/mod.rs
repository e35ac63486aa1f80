pub mod fetch_user;
pub mod login_user;
pub mod register_user;
pub mod update_user;

pub use fetch_user::FetchUserService;
pub use login_user::LoginUserService;
pub use register_user::RegisterUserService;
pub use update_user::UpdateUserService;
