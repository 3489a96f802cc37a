//! Shared value types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hyperlink to a related resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,

    /// Media type of the target, e.g. `application/hal+json`
    #[serde(rename = "type")]
    pub content_type: String,
}

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_and_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_additional: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// ISO 3166-1 alpha-2 country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Error document returned by the API for non-2xx answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub detail: String,

    /// Request field the error refers to, for validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ErrorLinks>,
}

/// Links attached to an error document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Link>,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.title)?;
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}
