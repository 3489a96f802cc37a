//! Mollie API client

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;

pub mod api;
pub mod context;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod transport;

pub use api::{OnboardingService, OrganizationsService};
pub use context::RequestContext;
pub use transport::{
    ApiRequest, ApiResponse, ClientSettings, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpTransport,
    Transport,
};

/// Entry point to the API.
///
/// Holds one shared [`Transport`] and exposes the resource accessors as
/// fields. Construct once and share; cloning is cheap.
///
/// # Example
/// ```no_run
/// # use mollie_api::{ClientSettings, MollieClient, RequestContext};
/// # async fn run() -> mollie_api::Result<()> {
/// let client = MollieClient::new(ClientSettings::new("test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM"))?;
/// let org = client.organizations.get_current(&RequestContext::background()).await?;
/// println!("{:?}", org.name);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MollieClient {
    transport: Arc<dyn Transport>,
    pub organizations: OrganizationsService,
    pub onboarding: OnboardingService,
}

impl MollieClient {
    /// Create a client over HTTP.
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let transport = HttpTransport::new(settings)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.settings()?)
    }

    /// Create a client over any transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            organizations: OrganizationsService::new(transport.clone()),
            onboarding: OnboardingService::new(transport.clone()),
            transport,
        }
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }
}
