//! Referral repository trait defining the interface for referral persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Referral;
use crate::errors::DomainError;

/// Repository trait for Referral record persistence
///
/// Referrals are append-only in this workflow: there are no update or
/// delete operations.
#[async_trait]
pub trait ReferralRepository: Send + Sync {
    /// Persist a new referral record
    ///
    /// # Returns
    /// * `Ok(Referral)` - The created record
    /// * `Err(DomainError)` - Creation failed (e.g. the referenced
    ///   referrer does not exist)
    async fn create(&self, referral: Referral) -> Result<Referral, DomainError>;

    /// Count referrals linked to a referrer identity
    async fn count_for_referrer(&self, referrer_id: Uuid) -> Result<u64, DomainError>;
}
