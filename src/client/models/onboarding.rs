//! Onboarding models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Address, Link};

/// Onboarding progress of the current organization.
///
/// Values the client does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OnboardingStatus {
    /// The merchant still has to provide information
    NeedsData,
    /// Mollie is reviewing the provided information
    InReview,
    /// Onboarding is finished; payments and settlements are enabled
    Completed,
    Other(String),
}

impl OnboardingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OnboardingStatus::NeedsData => "needs-data",
            OnboardingStatus::InReview => "in-review",
            OnboardingStatus::Completed => "completed",
            OnboardingStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for OnboardingStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "needs-data" => OnboardingStatus::NeedsData,
            "in-review" => OnboardingStatus::InReview,
            "completed" => OnboardingStatus::Completed,
            _ => OnboardingStatus::Other(raw),
        }
    }
}

impl From<OnboardingStatus> for String {
    fn from(status: OnboardingStatus) -> Self {
        match status {
            OnboardingStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for OnboardingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Onboarding status resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Onboarding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    /// Organization name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_up_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OnboardingStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_receive_payments: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_receive_settlements: Option<bool>,

    #[serde(rename = "_links", default, skip_serializing_if = "OnboardingLinks::is_empty")]
    pub links: OnboardingLinks,
}

/// Links returned with the onboarding status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingLinks {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,

    /// Dashboard page where the merchant continues onboarding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Link>,
}

impl OnboardingLinks {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Payload for submitting onboarding data.
///
/// Only populated fields are sent; the API keeps its stored value for
/// everything omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingData {
    #[serde(default, skip_serializing_if = "OnboardingOrganization::is_empty")]
    pub organization: OnboardingOrganization,

    #[serde(default, skip_serializing_if = "OnboardingProfile::is_empty")]
    pub profile: OnboardingProfile,
}

/// Organization part of [`OnboardingData`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingOrganization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_regulation: Option<String>,
}

impl OnboardingOrganization {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Website profile part of [`OnboardingData`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Website URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_category: Option<String>,
}

impl OnboardingProfile {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
