use crate::user::application::errors::AccountError;
use crate::user::application::ports::outgoing::{UserQueryError, UserQueryResult};

/// Turns a lookup into an existence check: a missing user is `Ok(None)`,
/// any other store failure stays an error.
pub fn existing_user(
    lookup: Result<UserQueryResult, UserQueryError>,
) -> Result<Option<UserQueryResult>, AccountError> {
    match lookup {
        Ok(user) => Ok(Some(user)),
        Err(UserQueryError::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
