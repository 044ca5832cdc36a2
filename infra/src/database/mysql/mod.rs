//! MySQL repository implementations over SQLx.

pub mod referral_repository_impl;
pub mod referrer_repository_impl;

pub use referral_repository_impl::MySqlReferralRepository;
pub use referrer_repository_impl::MySqlReferrerRepository;
