//! Mock implementation of ReferrerRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Referrer;
use crate::errors::DomainError;

use super::trait_::ReferrerRepository;

/// In-memory referrer repository for testing
///
/// Enforces email uniqueness atomically under its write lock, so it
/// reproduces the store's conflict behavior for create races.
pub struct MockReferrerRepository {
    referrers: Arc<RwLock<HashMap<Uuid, Referrer>>>,
}

impl MockReferrerRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            referrers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored identities
    pub async fn count(&self) -> usize {
        self.referrers.read().await.len()
    }
}

impl Default for MockReferrerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReferrerRepository for MockReferrerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Referrer>, DomainError> {
        let referrers = self.referrers.read().await;
        Ok(referrers.values().find(|r| r.email == email).cloned())
    }

    async fn create(&self, referrer: Referrer) -> Result<Referrer, DomainError> {
        let mut referrers = self.referrers.write().await;

        if referrers.values().any(|r| r.email == referrer.email) {
            return Err(DomainError::UniqueViolation {
                field: "email".to_string(),
            });
        }

        referrers.insert(referrer.id, referrer.clone());
        Ok(referrer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MockReferrerRepository::new();
        let referrer = Referrer::new("Jane", "jane@example.com", "0412345678");

        repo.create(referrer.clone()).await.unwrap();

        let found = repo.find_by_email("jane@example.com").await.unwrap();
        assert_eq!(found, Some(referrer));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let repo = MockReferrerRepository::new();
        repo.create(Referrer::new("Jane", "jane@example.com", "0412345678"))
            .await
            .unwrap();

        let result = repo
            .create(Referrer::new("Janet", "jane@example.com", "0499999999"))
            .await;

        assert!(matches!(
            result,
            Err(DomainError::UniqueViolation { field }) if field == "email"
        ));
        assert_eq!(repo.count().await, 1);
    }
}
