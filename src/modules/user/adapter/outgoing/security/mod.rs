pub mod bcrypt_hasher;

use std::sync::Arc;

use crate::config::HasherConfig;
use crate::user::application::ports::outgoing::PasswordHasher;

pub use bcrypt_hasher::BcryptHasher;

pub fn password_hasher_from_config(config: &HasherConfig) -> Arc<dyn PasswordHasher + Send + Sync> {
    Arc::new(BcryptHasher::with_cost(config.bcrypt_cost))
}
