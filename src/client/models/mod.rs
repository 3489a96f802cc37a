//! Mollie API data models
//!
//! Plain data-transfer records decoded from (or encoded into) API bodies.
//! Models are organized by resource type.

mod common;
mod onboarding;
mod organization;

pub use common::{Address, ErrorLinks, ErrorResponse, Link};
pub use onboarding::{
    Onboarding, OnboardingData, OnboardingLinks, OnboardingOrganization, OnboardingProfile,
    OnboardingStatus,
};
pub use organization::{
    Organization, OrganizationLinks, OrganizationPartnerLinks, OrganizationPartnerStatus,
    PartnerType, UserAgentToken,
};
