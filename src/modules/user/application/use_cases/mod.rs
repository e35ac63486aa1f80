pub mod fetch_user;
pub mod login_user;
pub mod register_user;
pub mod update_user;
