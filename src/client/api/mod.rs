//! Resource accessors split by API area
//!
//! - [`OrganizationsService`] - organization records and partner status
//! - [`OnboardingService`] - onboarding status and data submission
//!
//! Each accessor holds a handle to the shared [`Transport`](super::Transport)
//! and is exposed as a field of [`MollieClient`](super::MollieClient).

mod onboarding;
mod organizations;

pub use onboarding::OnboardingService;
pub use organizations::OrganizationsService;
