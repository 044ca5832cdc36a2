//! Tests for the referral submission service
