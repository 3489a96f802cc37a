//! Onboarding API

use std::sync::Arc;

use log::debug;
use reqwest::Method;

use crate::client::context::RequestContext;
use crate::client::models::{Onboarding, OnboardingData};
use crate::client::transport::{self, Transport};
use crate::error::Result;

const ONBOARDING_PATH: &str = "v2/onboarding/me";

/// Onboarding status and data submission for the current organization
#[derive(Clone)]
pub struct OnboardingService {
    transport: Arc<dyn Transport>,
}

impl OnboardingService {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Retrieve the onboarding status of the current organization.
    ///
    /// Compare [`Onboarding::status`] with
    /// [`OnboardingStatus::Completed`](crate::client::models::OnboardingStatus::Completed)
    /// to know whether the organization can accept payments.
    pub async fn get_onboarding_status(&self, ctx: &RequestContext) -> Result<Onboarding> {
        transport::get_json(self.transport.as_ref(), ctx, ONBOARDING_PATH).await
    }

    /// Submit onboarding data. The API acknowledges without a body.
    pub async fn submit_onboarding_data(
        &self,
        ctx: &RequestContext,
        data: &OnboardingData,
    ) -> Result<()> {
        let body = transport::encode_body(data)?;
        let response = transport::send(
            self.transport.as_ref(),
            ctx,
            Method::POST,
            ONBOARDING_PATH,
            Some(body),
        )
        .await?;

        debug!("onboarding data accepted with status {}", response.status);
        Ok(())
    }
}
