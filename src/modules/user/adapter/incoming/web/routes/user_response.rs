use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::user::application::domain::entities::UserProfile;

/// Public user fields as returned over HTTP.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub uuid: String,

    #[schema(example = "Alice Liddell")]
    pub name: String,

    #[schema(example = "alice")]
    pub username: String,

    #[schema(example = "alice@example.com")]
    pub email: String,

    #[schema(example = "081234567890")]
    pub phone_number: String,

    /// Present on session-derived responses only
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "customer")]
    pub role: Option<String>,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            uuid: profile.uuid.to_string(),
            name: profile.name,
            username: profile.username,
            email: profile.email,
            phone_number: profile.phone_number,
            role: profile.role,
        }
    }
}

/// Returns the name of the first blank field, if any.
pub(super) fn first_blank<'a, S: AsRef<str>>(fields: &[(&'a str, S)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(_, value)| value.as_ref().trim().is_empty())
        .map(|(name, _)| *name)
}

/// Widths of the `users` columns, in characters.
pub(super) const NAME_MAX_LEN: usize = 100;
pub(super) const USERNAME_MAX_LEN: usize = 50;
pub(super) const EMAIL_MAX_LEN: usize = 255;
pub(super) const PHONE_NUMBER_MAX_LEN: usize = 15;

/// Returns the first field longer than its limit, with that limit.
pub(super) fn first_too_long<'a>(fields: &[(&'a str, &str, usize)]) -> Option<(&'a str, usize)> {
    fields
        .iter()
        .find(|(_, value, max)| value.chars().count() > *max)
        .map(|(name, _, max)| (*name, *max))
}

/// Checks the profile fields shared by registration and update against the
/// column widths.
pub(super) fn profile_field_too_long(
    name: &str,
    username: &str,
    email: &str,
    phone_number: &str,
) -> Option<(&'static str, usize)> {
    first_too_long(&[
        ("name", name, NAME_MAX_LEN),
        ("username", username, USERNAME_MAX_LEN),
        ("email", email, EMAIL_MAX_LEN),
        ("phoneNumber", phone_number, PHONE_NUMBER_MAX_LEN),
    ])
}
