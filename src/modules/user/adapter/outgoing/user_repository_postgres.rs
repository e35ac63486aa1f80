use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::user::application::ports::outgoing::user_repository::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError, UserResult,
};

use super::sea_orm_entity::{UserActiveModel, UserEntity, UserModel};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user_result(model: UserModel) -> UserResult {
        UserResult {
            id: model.id,
            name: model.name,
            username: model.username,
            email: model.email,
            phone_number: model.phone_number,
        }
    }

    fn map_write_error(e: DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }

    /// Overwrites the profile fields. The hash is only marked dirty when a new
    /// one is given.
    fn apply_update(model: UserModel, data: UpdateUserData) -> UserActiveModel {
        let mut active_user: UserActiveModel = model.into();
        active_user.name = Set(data.name);
        active_user.username = Set(data.username);
        active_user.email = Set(data.email);
        active_user.phone_number = Set(data.phone_number);
        if let Some(password_hash) = data.password_hash {
            active_user.password_hash = Set(password_hash);
        }
        active_user
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            phone_number: Set(user.phone_number),
            role_id: Set(user.role_id),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(Self::map_to_user_result(inserted))
    }

    async fn update_user(
        &self,
        user_id: Uuid,
        data: UpdateUserData,
    ) -> Result<UserResult, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let updated = Self::apply_update(user, data)
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(Self::map_to_user_result(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_test_user_data() -> CreateUserData {
        CreateUserData {
            name: "Gregor Brenkenstein".to_string(),
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hashed_password".to_string(),
            phone_number: "08123456789".to_string(),
            role_id: 2,
        }
    }

    fn stored_user(user_id: Uuid) -> UserModel {
        let now = Utc::now();
        UserModel {
            id: user_id,
            name: "Test User".to_string(),
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "old_password_hash".to_string(),
            phone_number: "0800".to_string(),
            role_id: 2,
            created_at: now.fixed_offset(),
            updated_at: now.fixed_offset(),
        }
    }

    fn update_data(password_hash: Option<&str>) -> UpdateUserData {
        UpdateUserData {
            name: "Renamed".to_string(),
            username: "renamed".to_string(),
            email: "renamed@example.com".to_string(),
            phone_number: "0999".to_string(),
            password_hash: password_hash.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let user_data = create_test_user_data();
        let curr_time = Utc::now();

        let mock_user_model = UserModel {
            id: Uuid::new_v4(),
            name: user_data.name.clone(),
            username: user_data.username.clone(),
            email: user_data.email.clone(),
            password_hash: user_data.password_hash.clone(),
            phone_number: user_data.phone_number.clone(),
            role_id: user_data.role_id,
            created_at: curr_time.into(),
            updated_at: curr_time.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_user_model.clone()]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let user_result = repository.create_user(user_data.clone()).await.unwrap();

        assert_eq!(user_result.id, mock_user_model.id);
        assert_eq!(user_result.username, user_data.username);
        assert_eq!(user_result.email, user_data.email);
        assert_eq!(user_result.name, user_data.name);
        assert_eq!(user_result.phone_number, user_data.phone_number);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_key_error() {
        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint".to_string(),
            )])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(mock_db));

        let result = repository.create_user(create_test_user_data()).await;

        assert!(matches!(
            result.unwrap_err(),
            UserRepositoryError::UserAlreadyExists
        ));
    }

    #[tokio::test]
    async fn test_create_user_database_error() {
        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(mock_db));

        match repository.create_user(create_test_user_data()).await {
            Err(UserRepositoryError::DatabaseError(msg)) => {
                assert!(msg.contains("connection timeout"));
            }
            other => panic!("Expected DatabaseError variant, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_user_success() {
        let user_id = Uuid::new_v4();
        let existing = stored_user(user_id);
        let updated = UserModel {
            name: "Renamed".to_string(),
            username: "renamed".to_string(),
            email: "renamed@example.com".to_string(),
            phone_number: "0999".to_string(),
            password_hash: "new_hash".to_string(),
            ..existing.clone()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![existing]])
            .append_query_results(vec![vec![updated]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .update_user(user_id, update_data(Some("new_hash")))
            .await
            .unwrap();

        assert_eq!(result.id, user_id);
        assert_eq!(result.username, "renamed");
        assert_eq!(result.email, "renamed@example.com");
        assert_eq!(result.phone_number, "0999");
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .update_user(Uuid::new_v4(), update_data(None))
            .await;

        assert!(matches!(result, Err(UserRepositoryError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_update_user_unique_violation() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored_user(user_id)]])
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
            )])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository.update_user(user_id, update_data(None)).await;

        assert!(matches!(result, Err(UserRepositoryError::UserAlreadyExists)));
    }

    #[test]
    fn test_apply_update_without_hash_leaves_hash_unchanged() {
        let active = UserRepositoryPostgres::apply_update(
            stored_user(Uuid::new_v4()),
            update_data(None),
        );

        assert!(!active.password_hash.is_set());
        assert!(active.username.is_set());
        assert!(active.email.is_set());
    }

    #[test]
    fn test_apply_update_with_hash_sets_it() {
        let active = UserRepositoryPostgres::apply_update(
            stored_user(Uuid::new_v4()),
            update_data(Some("new_hash")),
        );

        assert_eq!(active.password_hash, Set("new_hash".to_string()));
    }
}
