use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<UserId> for Uuid {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role a new account is created with.
///
/// The numeric id matches the `CUSTOMER` row seeded by the `roles` migration.
/// Other seeded roles are only read back through the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
}

impl Role {
    pub const DEFAULT: Role = Role::Customer;

    pub fn id(self) -> i32 {
        match self {
            Role::Customer => 2,
        }
    }

    #[cfg(test)]
    pub fn code(self) -> &'static str {
        match self {
            Role::Customer => "CUSTOMER",
        }
    }
}

/// Public projection of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uuid: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserProfile {
    pub fn user_id(&self) -> UserId {
        self.uuid.into()
    }
}
