//! Mock implementation of ReferralRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Referral;
use crate::errors::DomainError;

use super::trait_::ReferralRepository;

/// In-memory referral repository for testing
pub struct MockReferralRepository {
    referrals: Arc<RwLock<HashMap<Uuid, Referral>>>,
}

impl MockReferralRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            referrals: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Total number of stored referrals
    pub async fn count(&self) -> usize {
        self.referrals.read().await.len()
    }
}

impl Default for MockReferralRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReferralRepository for MockReferralRepository {
    async fn create(&self, referral: Referral) -> Result<Referral, DomainError> {
        let mut referrals = self.referrals.write().await;
        referrals.insert(referral.id, referral.clone());
        Ok(referral)
    }

    async fn count_for_referrer(&self, referrer_id: Uuid) -> Result<u64, DomainError> {
        let referrals = self.referrals.read().await;
        Ok(referrals
            .values()
            .filter(|r| r.referrer_id == referrer_id)
            .count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Vertical;

    #[tokio::test]
    async fn test_create_and_count() {
        let repo = MockReferralRepository::new();
        let referrer_id = Uuid::new_v4();

        for friend in ["a@example.com", "b@example.com"] {
            let referral =
                Referral::new(referrer_id, "Friend", friend, "1234567890", Vertical::FinTech);
            repo.create(referral).await.unwrap();
        }

        assert_eq!(repo.count_for_referrer(referrer_id).await.unwrap(), 2);
        assert_eq!(repo.count_for_referrer(Uuid::new_v4()).await.unwrap(), 0);
    }
}
