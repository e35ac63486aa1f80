use crate::user::application::ports::outgoing::{
    HashError, TokenError, UserQueryError, UserRepositoryError,
};

/// Errors surfaced by every account operation.
///
/// Store failures are folded into `NotFound` or `Persistence` so no driver
/// error reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("user not found")]
    NotFound,

    #[error("password is incorrect")]
    InvalidCredentials,

    #[error("username already exists")]
    UsernameExists,

    #[error("email already exists")]
    EmailExists,

    #[error("password does not match")]
    PasswordMismatch,

    #[error("persistence error: {0}")]
    Persistence(String),

    #[error("crypto error: {0}")]
    Crypto(String),
}

impl From<UserQueryError> for AccountError {
    fn from(err: UserQueryError) -> Self {
        match err {
            UserQueryError::NotFound => AccountError::NotFound,
            UserQueryError::DatabaseError(msg) => AccountError::Persistence(msg),
        }
    }
}

impl From<UserRepositoryError> for AccountError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UserNotFound => AccountError::NotFound,
            UserRepositoryError::UserAlreadyExists => {
                AccountError::Persistence("unique constraint violated".to_string())
            }
            UserRepositoryError::DatabaseError(msg) => AccountError::Persistence(msg),
        }
    }
}

impl From<HashError> for AccountError {
    fn from(err: HashError) -> Self {
        AccountError::Crypto(err.to_string())
    }
}

impl From<TokenError> for AccountError {
    fn from(err: TokenError) -> Self {
        AccountError::Crypto(err.to_string())
    }
}
