use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::user::application::domain::entities::Role;
use crate::user::application::ports::outgoing::{
    user_query::RoleQueryResult,
    user_repository::{CreateUserData, UpdateUserData, UserResult},
    UserQuery, UserQueryError, UserQueryResult, UserRepository, UserRepositoryError,
};

/// Shared in-memory user table. Clones see the same rows, so one instance can
/// back both the query and the repository port. Username and email are unique
/// like the real indexes.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    rows: Arc<Mutex<Vec<UserQueryResult>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw row, hash included.
    pub fn stored(&self, id: Uuid) -> Option<UserQueryResult> {
        self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn find_by<F>(&self, pred: F) -> Result<UserQueryResult, UserQueryError>
    where
        F: Fn(&UserQueryResult) -> bool,
    {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| pred(u))
            .cloned()
            .ok_or(UserQueryError::NotFound)
    }

    fn role_for(role_id: i32) -> Option<RoleQueryResult> {
        (role_id == Role::DEFAULT.id()).then(|| RoleQueryResult {
            id: role_id,
            code: Role::DEFAULT.code().to_string(),
            name: "Customer".to_string(),
        })
    }

    fn to_result(row: &UserQueryResult) -> UserResult {
        UserResult {
            id: row.id,
            name: row.name.clone(),
            username: row.username.clone(),
            email: row.email.clone(),
            phone_number: row.phone_number.clone(),
        }
    }
}

#[async_trait]
impl UserQuery for InMemoryUserStore {
    async fn find_by_id(&self, user_id: Uuid) -> Result<UserQueryResult, UserQueryError> {
        self.find_by(|u| u.id == user_id)
    }

    async fn find_by_email(&self, email: &str) -> Result<UserQueryResult, UserQueryError> {
        self.find_by(|u| u.email == email)
    }

    async fn find_by_username(&self, username: &str) -> Result<UserQueryResult, UserQueryError> {
        self.find_by(|u| u.username == username)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let mut rows = self.rows.lock().unwrap();

        if rows
            .iter()
            .any(|u| u.username == data.username || u.email == data.email)
        {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let now = Utc::now();
        let row = UserQueryResult {
            id: Uuid::new_v4(),
            name: data.name,
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            phone_number: data.phone_number,
            role_id: data.role_id,
            role: Self::role_for(data.role_id),
            created_at: now,
            updated_at: now,
        };
        let result = Self::to_result(&row);
        rows.push(row);

        Ok(result)
    }

    async fn update_user(
        &self,
        user_id: Uuid,
        data: UpdateUserData,
    ) -> Result<UserResult, UserRepositoryError> {
        let mut rows = self.rows.lock().unwrap();

        if rows
            .iter()
            .any(|u| u.id != user_id && (u.username == data.username || u.email == data.email))
        {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let row = rows
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        row.name = data.name;
        row.username = data.username;
        row.email = data.email;
        row.phone_number = data.phone_number;
        if let Some(password_hash) = data.password_hash {
            row.password_hash = password_hash;
        }
        row.updated_at = Utc::now();

        Ok(Self::to_result(row))
    }
}
