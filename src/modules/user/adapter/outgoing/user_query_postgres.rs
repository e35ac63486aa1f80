use super::sea_orm_entity::{RoleEntity, RoleModel, UserColumn, UserEntity, UserModel};
use crate::user::application::ports::outgoing::user_query::{
    RoleQueryResult, UserQuery, UserQueryError, UserQueryResult,
};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Select};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_query_result(model: UserModel, role: Option<RoleModel>) -> UserQueryResult {
        UserQueryResult {
            id: model.id,
            name: model.name,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            phone_number: model.phone_number,
            role_id: model.role_id,
            role: role.map(|role| RoleQueryResult {
                id: role.id,
                code: role.code,
                name: role.name,
            }),
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }

    /// Runs a single-user select with the role joined in.
    async fn fetch_one(&self, select: Select<UserEntity>) -> Result<UserQueryResult, UserQueryError> {
        let row = select
            .find_also_related(RoleEntity)
            .one(&*self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "User lookup failed");
                UserQueryError::DatabaseError(e.to_string())
            })?;

        row.map(|(user, role)| Self::map_to_query_result(user, role))
            .ok_or(UserQueryError::NotFound)
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<UserQueryResult, UserQueryError> {
        self.fetch_one(UserEntity::find_by_id(user_id)).await
    }

    async fn find_by_email(&self, email: &str) -> Result<UserQueryResult, UserQueryError> {
        self.fetch_one(UserEntity::find().filter(UserColumn::Email.eq(email)))
            .await
    }

    async fn find_by_username(&self, username: &str) -> Result<UserQueryResult, UserQueryError> {
        self.fetch_one(UserEntity::find().filter(UserColumn::Username.eq(username)))
            .await
    }
}
