//! Vertical classification attached to every referral.

use serde::{Deserialize, Serialize};

/// The fixed set of program verticals a friend can be referred into
///
/// Submissions carrying any other value are rejected during validation.
/// The display string is the canonical wire and storage form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vertical {
    #[serde(rename = "Product Management")]
    ProductManagement,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Business Analytics")]
    BusinessAnalytics,
    #[serde(rename = "FinTech")]
    FinTech,
    #[serde(rename = "Digital Transformation")]
    DigitalTransformation,
    #[serde(rename = "Senior Leadership")]
    SeniorLeadership,
}

impl Vertical {
    /// All allowed verticals, in display order
    pub const ALL: [Vertical; 6] = [
        Vertical::ProductManagement,
        Vertical::DataScience,
        Vertical::BusinessAnalytics,
        Vertical::FinTech,
        Vertical::DigitalTransformation,
        Vertical::SeniorLeadership,
    ];

    /// Canonical display string, stored and serialized verbatim
    pub fn as_str(&self) -> &'static str {
        match self {
            Vertical::ProductManagement => "Product Management",
            Vertical::DataScience => "Data Science",
            Vertical::BusinessAnalytics => "Business Analytics",
            Vertical::FinTech => "FinTech",
            Vertical::DigitalTransformation => "Digital Transformation",
            Vertical::SeniorLeadership => "Senior Leadership",
        }
    }
}

impl std::fmt::Display for Vertical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Vertical {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vertical::ALL
            .iter()
            .find(|v| v.as_str() == s.trim())
            .copied()
            .ok_or_else(|| format!("Invalid vertical: {}", s))
    }
}
