//! Referral submission service implementation

use std::sync::Arc;

use crate::domain::entities::{Referral, Referrer};
use crate::domain::value_objects::{ReferralPayload, Submission, ValidatedReferral};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ReferralRepository, ReferrerRepository};
use crate::services::notification::{mask_email, MailTransport, NotificationService};

use super::validator;

/// Service orchestrating referral submissions
///
/// Generic over its persistence and transport collaborators so tests can
/// inject in-memory doubles. One submission runs four steps in order:
/// validate, resolve the referrer identity, persist the referral, then
/// attempt the friend notification. The first two can reject the
/// submission; the notification step cannot.
pub struct ReferralService<R, L, T>
where
    R: ReferrerRepository,
    L: ReferralRepository,
    T: MailTransport,
{
    referrer_repository: Arc<R>,
    referral_repository: Arc<L>,
    notification_service: NotificationService<T>,
}

impl<R, L, T> ReferralService<R, L, T>
where
    R: ReferrerRepository,
    L: ReferralRepository,
    T: MailTransport,
{
    /// Create a new referral service
    pub fn new(
        referrer_repository: Arc<R>,
        referral_repository: Arc<L>,
        notification_service: NotificationService<T>,
    ) -> Self {
        Self {
            referrer_repository,
            referral_repository,
            notification_service,
        }
    }

    /// Process one referral submission end to end
    ///
    /// # Flow
    /// 1. Validate the raw payload (all field errors reported together)
    /// 2. Find or create the referrer identity keyed by normalized email
    /// 3. Persist the referral record linked to that identity
    /// 4. Attempt the friend notification
    ///
    /// # Returns
    /// * `Ok(Submission)` - The referral was persisted; the embedded
    ///   notification outcome may still report a failed send
    /// * `Err(DomainError::Validation)` - The payload was rejected; no
    ///   state was touched
    /// * `Err(DomainError)` - Identity resolution or persistence failed
    pub async fn submit(&self, payload: &ReferralPayload) -> DomainResult<Submission> {
        let validated = validator::validate(payload)?;

        let referrer = self.resolve_referrer(&validated).await?;

        let referral = self
            .referral_repository
            .create(Referral::new(
                referrer.id,
                validated.friend_name.clone(),
                validated.friend_email.clone(),
                validated.friend_phone.clone(),
                validated.vertical,
            ))
            .await?;

        tracing::info!(
            referral_id = %referral.id,
            referrer_id = %referrer.id,
            vertical = %referral.vertical,
            event = "referral_recorded",
            "Referral recorded"
        );

        let notification = self
            .notification_service
            .notify_referred_friend(
                &validated.friend_email,
                &validated.friend_name,
                &validated.user_name,
            )
            .await;

        Ok(Submission {
            referral,
            notification,
        })
    }

    /// Find the referrer identity for a normalized email, creating it on
    /// first contact
    ///
    /// The identity store enforces email uniqueness, so a concurrent first
    /// submission can reject our create with a unique violation. That race
    /// is recovered by re-fetching once: the winner's row is the identity
    /// for both submissions. If the re-fetch still finds nothing the
    /// violation is propagated as a genuine conflict.
    async fn resolve_referrer(&self, validated: &ValidatedReferral) -> DomainResult<Referrer> {
        if let Some(existing) = self
            .referrer_repository
            .find_by_email(&validated.user_email)
            .await?
        {
            tracing::debug!(
                referrer_id = %existing.id,
                email = %mask_email(&validated.user_email),
                event = "referrer_found",
                "Existing referrer identity reused"
            );
            return Ok(existing);
        }

        let candidate = Referrer::new(
            validated.user_name.clone(),
            &validated.user_email,
            validated.user_phone.clone(),
        );

        match self.referrer_repository.create(candidate).await {
            Ok(created) => {
                tracing::info!(
                    referrer_id = %created.id,
                    email = %mask_email(&created.email),
                    event = "referrer_created",
                    "New referrer identity created"
                );
                Ok(created)
            }
            Err(DomainError::UniqueViolation { field }) => {
                tracing::debug!(
                    email = %mask_email(&validated.user_email),
                    event = "referrer_create_race",
                    "Concurrent identity creation detected, re-fetching winner"
                );
                match self
                    .referrer_repository
                    .find_by_email(&validated.user_email)
                    .await?
                {
                    Some(winner) => Ok(winner),
                    None => Err(DomainError::UniqueViolation { field }),
                }
            }
            Err(err) => Err(err),
        }
    }
}
