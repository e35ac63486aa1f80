use async_trait::async_trait;
use bcrypt::{hash, verify};

use crate::user::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// Salted bcrypt hashing. Work runs on the blocking pool.
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Cost is the log2 work factor, valid between 4 and 31.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || {
            hash(password, cost).map_err(|e| {
                tracing::error!(error = %e, cost, "bcrypt hashing failed");
                HashError::HashFailed
            })
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || {
            verify(password, &hashed).map_err(|e| {
                tracing::warn!(error = %e, "bcrypt verification failed");
                HashError::VerifyFailed
            })
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the tests fast.
    fn hasher() -> BcryptHasher {
        BcryptHasher::with_cost(4)
    }

    #[tokio::test]
    async fn test_bcrypt_hash_and_verify_password() {
        let hasher = hasher();
        let password = "SecurePassword123";

        let hashed_password = hasher.hash_password(password).await;
        assert!(hashed_password.is_ok());

        let hashed_password = hashed_password.unwrap();
        assert_ne!(hashed_password, password);

        let verify_correct = hasher.verify_password(password, &hashed_password).await;
        assert!(verify_correct.unwrap());

        let verify_wrong = hasher
            .verify_password("WrongPassword", &hashed_password)
            .await;
        assert!(!verify_wrong.unwrap());

        let verify_invalid_hash = hasher.verify_password(password, "invalid-hash").await;
        assert!(matches!(verify_invalid_hash, Err(HashError::VerifyFailed)));
    }

    #[tokio::test]
    async fn test_same_password_hashes_differently() {
        let hasher = hasher();

        let first = hasher.hash_password("p1").await.unwrap();
        let second = hasher.hash_password("p1").await.unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify_password("p1", &first).await.unwrap());
        assert!(hasher.verify_password("p1", &second).await.unwrap());
    }

    #[tokio::test]
    async fn test_hash_with_invalid_cost_fails() {
        let hasher = BcryptHasher::with_cost(3);

        let result = hasher.hash_password("p1").await;

        assert!(matches!(result, Err(HashError::HashFailed)));
    }
}
