mod existing_user;

pub use existing_user::existing_user;
