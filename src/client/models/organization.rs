//! Organization and partner status models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Address, Link};

/// Organization resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Always `organization` when returned by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    /// Organization ID, e.g. `org_12345678`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Preferred locale, e.g. `nl_NL`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Chamber of commerce registration number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,

    /// VAT regulation (`dutch`, `british`, `shifted`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_regulation: Option<String>,

    #[serde(rename = "_links", default, skip_serializing_if = "OrganizationLinks::is_empty")]
    pub links: OrganizationLinks,
}

/// Links returned with an organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationLinks {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chargebacks: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customers: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoices: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlements: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Link>,
}

impl OrganizationLinks {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// How an organization participates in the partner program.
///
/// Values the client does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PartnerType {
    Oauth,
    SignUpLink,
    UserAgent,
    Other(String),
}

impl PartnerType {
    pub fn as_str(&self) -> &str {
        match self {
            PartnerType::Oauth => "oauth",
            PartnerType::SignUpLink => "signuplink",
            PartnerType::UserAgent => "useragent",
            PartnerType::Other(raw) => raw,
        }
    }
}

impl From<String> for PartnerType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "oauth" => PartnerType::Oauth,
            "signuplink" => PartnerType::SignUpLink,
            "useragent" => PartnerType::UserAgent,
            _ => PartnerType::Other(raw),
        }
    }
}

impl From<PartnerType> for String {
    fn from(kind: PartnerType) -> Self {
        match kind {
            PartnerType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PartnerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-limited user agent token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAgentToken {
    pub token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,

    /// `None` while the token has no end of validity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

/// Links returned with a partner status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationPartnerLinks {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Link>,

    #[serde(rename = "signuplink", skip_serializing_if = "Option::is_none")]
    pub signup_link: Option<Link>,
}

impl OrganizationPartnerLinks {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Partner status of the current organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationPartnerStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_commission_partner: Option<bool>,

    #[serde(
        default,
        alias = "partnerContractUpdate_available",
        skip_serializing_if = "Option::is_none"
    )]
    pub partner_contract_update_available: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    /// Absent when the organization is not a partner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_type: Option<PartnerType>,

    /// Only populated for `useragent` partners
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_agent_tokens: Vec<UserAgentToken>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_contract_signed_at: Option<DateTime<Utc>>,

    #[serde(
        rename = "_links",
        default,
        skip_serializing_if = "OrganizationPartnerLinks::is_empty"
    )]
    pub links: OrganizationPartnerLinks,
}
