//! Organization command implementations

use tabled::Tabled;

use mollie_api::Result;
use mollie_api::models::{Organization, OrganizationPartnerStatus};

use crate::cli::{CommandContext, OutputFormat};
use crate::output::{self, json, table};

/// Organization for table display
#[derive(Tabled)]
struct OrgDisplay {
    #[tabled(rename = "ORG ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "LOCALE")]
    locale: String,
    #[tabled(rename = "COUNTRY")]
    country: String,
}

impl From<&Organization> for OrgDisplay {
    fn from(org: &Organization) -> Self {
        Self {
            id: output::or_dash(&org.id),
            name: output::or_dash(&org.name),
            email: output::or_dash(&org.email),
            locale: output::or_dash(&org.locale),
            country: output::or_dash(&org.address.as_ref().and_then(|a| a.country.clone())),
        }
    }
}

/// User agent token for table display
#[derive(Tabled)]
struct TokenDisplay {
    #[tabled(rename = "TOKEN")]
    token: String,
    #[tabled(rename = "STARTS")]
    starts_at: String,
    #[tabled(rename = "ENDS")]
    ends_at: String,
}

/// Run the org get command
pub async fn get(ctx: &CommandContext, org_id: &str) -> Result<()> {
    let org = ctx.client.organizations.get(&ctx.request, org_id).await?;
    print_org(&org, ctx.format)
}

/// Run the org current command
pub async fn current(ctx: &CommandContext) -> Result<()> {
    let org = ctx.client.organizations.get_current(&ctx.request).await?;
    print_org(&org, ctx.format)
}

/// Run the org partner command
pub async fn partner(ctx: &CommandContext) -> Result<()> {
    let status = ctx
        .client
        .organizations
        .get_partner_status(&ctx.request)
        .await?;

    match ctx.format {
        OutputFormat::Table => print_partner(&status),
        OutputFormat::Json => println!("{}", json::format_json(&status)?),
    }

    Ok(())
}

fn print_org(org: &Organization, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", table::format_table(&[OrgDisplay::from(org)])),
        OutputFormat::Json => println!("{}", json::format_json(org)?),
    }
    Ok(())
}

fn print_partner(status: &OrganizationPartnerStatus) {
    let partner_type = status
        .partner_type
        .as_ref()
        .map(|t| t.to_string())
        .unwrap_or_else(|| "none".to_string());

    println!("Partner type: {}", partner_type);
    println!(
        "Commission partner: {}",
        output::yes_no(status.is_commission_partner)
    );
    println!(
        "Contract update available: {}",
        output::yes_no(status.partner_contract_update_available)
    );
    if let Some(signed_at) = status.partner_contract_signed_at {
        println!("Contract signed: {}", signed_at.to_rfc3339());
    }

    if !status.user_agent_tokens.is_empty() {
        let rows: Vec<TokenDisplay> = status
            .user_agent_tokens
            .iter()
            .map(|t| TokenDisplay {
                token: t.token.clone(),
                starts_at: t.starts_at.map(|d| d.to_rfc3339()).unwrap_or_default(),
                ends_at: t
                    .ends_at
                    .map(|d| d.to_rfc3339())
                    .unwrap_or_else(|| "-".to_string()),
            })
            .collect();
        println!("{}", table::format_table(&rows));
    }
}
