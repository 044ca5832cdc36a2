//! MySQL implementation of the ReferrerRepository trait.
//!
//! The `referrers.email` column carries a UNIQUE constraint; this store is
//! the single authority on referrer identity. A constraint rejection on
//! insert is translated into [`DomainError::UniqueViolation`] so the
//! service layer can recover from create races without inspecting driver
//! message text.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rf_core::domain::entities::Referrer;
use rf_core::errors::DomainError;
use rf_core::repositories::ReferrerRepository;

/// MySQL implementation of ReferrerRepository
pub struct MySqlReferrerRepository {
    pool: MySqlPool,
}

impl MySqlReferrerRepository {
    /// Create a new MySQL referrer repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Referrer entity
    fn row_to_referrer(row: &sqlx::mysql::MySqlRow) -> Result<Referrer, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Referrer {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            phone: row.try_get("phone").map_err(|e| DomainError::Database {
                message: format!("Failed to get phone: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl ReferrerRepository for MySqlReferrerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Referrer>, DomainError> {
        let query = r#"
            SELECT id, name, email, phone, created_at
            FROM referrers
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_referrer(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, referrer: Referrer) -> Result<Referrer, DomainError> {
        let query = r#"
            INSERT INTO referrers (id, name, email, phone, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(referrer.id.to_string())
            .bind(&referrer.name)
            .bind(&referrer.email)
            .bind(&referrer.phone)
            .bind(referrer.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let is_unique = e
                    .as_database_error()
                    .map(|db| db.is_unique_violation())
                    .unwrap_or(false);
                if is_unique {
                    DomainError::UniqueViolation {
                        field: "email".to_string(),
                    }
                } else {
                    DomainError::Database {
                        message: format!("Failed to create referrer: {}", e),
                    }
                }
            })?;

        Ok(referrer)
    }
}
