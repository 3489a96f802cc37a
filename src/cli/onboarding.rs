//! Onboarding command implementations

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use tabled::Tabled;

use mollie_api::models::{Onboarding, OnboardingData, OnboardingStatus};
use mollie_api::{ConfigError, Result};

use crate::cli::{CommandContext, OutputFormat};
use crate::output::{self, json, table};

/// Onboarding data to submit; flags override values read from `--file`
#[derive(Debug, Clone, Args, Default)]
pub struct SubmitArgs {
    /// JSON file with the full onboarding payload
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Organization name
    #[arg(long)]
    pub org_name: Option<String>,

    /// Chamber of commerce registration number
    #[arg(long)]
    pub registration_number: Option<String>,

    /// VAT number
    #[arg(long)]
    pub vat_number: Option<String>,

    /// Website profile name
    #[arg(long)]
    pub profile_name: Option<String>,

    /// Website URL
    #[arg(long)]
    pub website: Option<String>,

    /// Profile contact email
    #[arg(long)]
    pub email: Option<String>,
}

impl SubmitArgs {
    /// Merge file contents and flags into a payload.
    pub fn into_data(self) -> Result<OnboardingData> {
        let mut data = match &self.file {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                serde_json::from_str(&contents).map_err(|e| {
                    ConfigError::Invalid(format!("{}: {}", path.display(), e))
                })?
            }
            None => OnboardingData::default(),
        };

        let org = &mut data.organization;
        org.name = self.org_name.or(org.name.take());
        org.registration_number = self.registration_number.or(org.registration_number.take());
        org.vat_number = self.vat_number.or(org.vat_number.take());

        let profile = &mut data.profile;
        profile.name = self.profile_name.or(profile.name.take());
        profile.url = self.website.or(profile.url.take());
        profile.email = self.email.or(profile.email.take());

        Ok(data)
    }
}

/// Onboarding status for table display
#[derive(Tabled)]
struct OnboardingDisplay {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "PAYMENTS")]
    payments: String,
    #[tabled(rename = "SETTLEMENTS")]
    settlements: String,
}

impl From<&Onboarding> for OnboardingDisplay {
    fn from(o: &Onboarding) -> Self {
        Self {
            name: output::or_dash(&o.name),
            status: o
                .status
                .as_ref()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
            payments: output::yes_no(o.can_receive_payments).to_string(),
            settlements: output::yes_no(o.can_receive_settlements).to_string(),
        }
    }
}

/// Run the onboarding status command
pub async fn status(ctx: &CommandContext) -> Result<()> {
    let onboarding = ctx
        .client
        .onboarding
        .get_onboarding_status(&ctx.request)
        .await?;

    match ctx.format {
        OutputFormat::Table => {
            println!(
                "{}",
                table::format_table(&[OnboardingDisplay::from(&onboarding)])
            );
            if onboarding.status != Some(OnboardingStatus::Completed) {
                if let Some(link) = &onboarding.links.dashboard {
                    println!("Continue onboarding at {}", link.href.cyan());
                }
            }
        }
        OutputFormat::Json => println!("{}", json::format_json(&onboarding)?),
    }

    Ok(())
}

/// Run the onboarding submit command
pub async fn submit(ctx: &CommandContext, args: SubmitArgs) -> Result<()> {
    let data = args.into_data()?;
    ctx.client
        .onboarding
        .submit_onboarding_data(&ctx.request, &data)
        .await?;

    println!("{} Onboarding data submitted", "✓".green());
    Ok(())
}
