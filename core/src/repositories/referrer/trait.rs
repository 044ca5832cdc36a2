//! Referrer repository trait defining the interface for identity persistence.

use async_trait::async_trait;

use crate::domain::entities::Referrer;
use crate::errors::DomainError;

/// Repository trait for Referrer identity persistence
///
/// The store behind this trait is the single source of truth for email
/// uniqueness. Implementations MUST report a uniqueness constraint
/// rejection from [`create`] as [`DomainError::UniqueViolation`] so the
/// service layer can recover from create races structurally instead of
/// inspecting error text.
///
/// [`create`]: ReferrerRepository::create
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use rf_core::repositories::ReferrerRepository;
/// use rf_core::domain::entities::Referrer;
/// use rf_core::errors::DomainError;
///
/// struct MySqlReferrerRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl ReferrerRepository for MySqlReferrerRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<Referrer>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     async fn create(&self, referrer: Referrer) -> Result<Referrer, DomainError> {
///         // Implementation here
///         Ok(referrer)
///     }
/// }
/// ```
#[async_trait]
pub trait ReferrerRepository: Send + Sync {
    /// Find a referrer by normalized email
    ///
    /// # Returns
    /// * `Ok(Some(Referrer))` - Identity found
    /// * `Ok(None)` - No identity exists for this email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Referrer>, DomainError>;

    /// Create a new referrer identity
    ///
    /// # Returns
    /// * `Ok(Referrer)` - The created identity
    /// * `Err(DomainError::UniqueViolation)` - Another identity already
    ///   holds this email (expected under concurrent first submissions)
    /// * `Err(DomainError)` - Other database error
    async fn create(&self, referrer: Referrer) -> Result<Referrer, DomainError>;
}
