//! MySQL implementation of the ReferralRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rf_core::domain::entities::Referral;
use rf_core::errors::DomainError;
use rf_core::repositories::ReferralRepository;

/// MySQL implementation of ReferralRepository
pub struct MySqlReferralRepository {
    pool: MySqlPool,
}

impl MySqlReferralRepository {
    /// Create a new MySQL referral repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferralRepository for MySqlReferralRepository {
    async fn create(&self, referral: Referral) -> Result<Referral, DomainError> {
        let query = r#"
            INSERT INTO referrals (
                id, referrer_id, friend_name, friend_email,
                friend_phone, vertical, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(referral.id.to_string())
            .bind(referral.referrer_id.to_string())
            .bind(&referral.friend_name)
            .bind(&referral.friend_email)
            .bind(&referral.friend_phone)
            .bind(referral.vertical.as_str())
            .bind(referral.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let is_fk = e
                    .as_database_error()
                    .map(|db| db.is_foreign_key_violation())
                    .unwrap_or(false);
                // The only FK on referrals is referrer_id
                if is_fk {
                    DomainError::NotFound {
                        resource: "referrer".to_string(),
                    }
                } else {
                    DomainError::Database {
                        message: format!("Failed to create referral: {}", e),
                    }
                }
            })?;

        Ok(referral)
    }

    async fn count_for_referrer(&self, referrer_id: Uuid) -> Result<u64, DomainError> {
        let query = r#"
            SELECT COUNT(*) as count
            FROM referrals
            WHERE referrer_id = ?
        "#;

        let row = sqlx::query(query)
            .bind(referrer_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to count referrals: {}", e),
            })?;

        let count: i64 = row.try_get("count").map_err(|e| DomainError::Database {
            message: format!("Failed to get count: {}", e),
        })?;

        Ok(count as u64)
    }
}
