//! Typed client for the [Mollie](https://www.mollie.com) organizations,
//! partner status and onboarding APIs.
//!
//! Every operation builds a request against a documented route, attaches the
//! bearer token, performs one round trip and decodes the JSON answer. There
//! are no retries and no caching: errors are handed back to the caller.
//!
//! ```no_run
//! use mollie_api::{ClientSettings, MollieClient, RequestContext};
//! use mollie_api::models::OnboardingStatus;
//!
//! # async fn run() -> mollie_api::Result<()> {
//! let client = MollieClient::new(ClientSettings::new("access_token"))?;
//! let ctx = RequestContext::background();
//!
//! let onboarding = client.onboarding.get_onboarding_status(&ctx).await?;
//! match onboarding.status {
//!     Some(OnboardingStatus::Completed) => println!("ready for payments"),
//!     Some(status) => println!("onboarding still {}", status),
//!     None => println!("onboarding status unknown"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::models;
pub use client::{
    ApiRequest, ApiResponse, ClientSettings, HttpTransport, MollieClient, OnboardingService,
    OrganizationsService, RequestContext, Transport,
};
pub use config::Config;
pub use error::{ApiError, ConfigError, Error, Result};
