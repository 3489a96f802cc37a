//! Organizations API

use std::sync::Arc;

use reqwest::Method;

use crate::client::context::RequestContext;
use crate::client::models::{Organization, OrganizationPartnerStatus};
use crate::client::transport::{self, Transport};
use crate::error::Result;

/// Read-only access to organization resources
#[derive(Clone)]
pub struct OrganizationsService {
    transport: Arc<dyn Transport>,
}

impl OrganizationsService {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Retrieve an organization by its id.
    ///
    /// The id is passed through unvalidated; the API rejects unknown ids.
    pub async fn get(&self, ctx: &RequestContext, id: &str) -> Result<Organization> {
        self.fetch(ctx, &format!("v2/organizations/{}", id)).await
    }

    /// Retrieve the organization the access token belongs to.
    pub async fn get_current(&self, ctx: &RequestContext) -> Result<Organization> {
        self.fetch(ctx, "v2/organizations/me").await
    }

    /// Retrieve the partner status of the current organization.
    ///
    /// See: <https://docs.mollie.com/reference/v2/organizations-api/get-partner>
    pub async fn get_partner_status(
        &self,
        ctx: &RequestContext,
    ) -> Result<OrganizationPartnerStatus> {
        transport::send(
            self.transport.as_ref(),
            ctx,
            Method::GET,
            "v2/organizations/me/partner",
            None,
        )
        .await?
        .decode()
    }

    async fn fetch(&self, ctx: &RequestContext, path: &str) -> Result<Organization> {
        transport::get_json(self.transport.as_ref(), ctx, path).await
    }
}
