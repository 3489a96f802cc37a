//! Canned API response bodies for unit tests
//!
//! Shapes follow the documented Mollie responses. Import via
//! `use crate::client::fixtures` in test modules.

pub const GET_ORGANIZATION_RESPONSE: &str = r#"{
    "resource": "organization",
    "id": "org_12345678",
    "name": "Mollie B.V.",
    "email": "info@mollie.com",
    "locale": "nl_NL",
    "address": {
        "streetAndNumber": "Keizersgracht 126",
        "postalCode": "1015 CW",
        "city": "Amsterdam",
        "country": "NL"
    },
    "registrationNumber": "30204462",
    "vatNumber": "NL815839091B01",
    "vatRegulation": "dutch",
    "_links": {
        "self": {
            "href": "https://api.mollie.com/v2/organizations/org_12345678",
            "type": "application/hal+json"
        },
        "chargebacks": {
            "href": "https://api.mollie.com/v2/chargebacks",
            "type": "application/hal+json"
        },
        "documentation": {
            "href": "https://docs.mollie.com/reference/v2/organizations-api/get-organization",
            "type": "text/html"
        }
    }
}"#;

pub const GET_PARTNER_STATUS_RESPONSE: &str = r#"{
    "resource": "partner",
    "partnerType": "oauth",
    "isCommissionPartner": true,
    "userAgentTokens": [
        {
            "token": "unique_token_1",
            "startsAt": "2018-03-20T13:13:37+00:00",
            "endsAt": null
        },
        {
            "token": "unique_token_2",
            "startsAt": "2018-02-20T13:13:37+00:00",
            "endsAt": "2018-03-20T13:13:37+00:00"
        }
    ],
    "partnerContractSignedAt": "2018-03-20T13:13:37+00:00",
    "partnerContractUpdateAvailable": true,
    "_links": {
        "self": {
            "href": "https://api.mollie.com/v2/organizations/me/partner",
            "type": "application/hal+json"
        },
        "documentation": {
            "href": "https://docs.mollie.com/reference/v2/organizations-api/get-partner",
            "type": "text/html"
        },
        "signuplink": {
            "href": "https://www.mollie.com/dashboard/signup/myCode?lang=en",
            "type": "text/html"
        }
    }
}"#;

pub const GET_ONBOARDING_STATUS_RESPONSE: &str = r#"{
    "resource": "onboarding",
    "name": "Mollie B.V.",
    "signedUpAt": "2018-12-20T10:49:08+00:00",
    "status": "completed",
    "canReceivePayments": true,
    "canReceiveSettlements": true,
    "_links": {
        "self": {
            "href": "https://api.mollie.com/v2/onboarding/me",
            "type": "application/hal+json"
        },
        "dashboard": {
            "href": "https://www.mollie.com/dashboard/onboarding",
            "type": "text/html"
        },
        "organization": {
            "href": "https://api.mollie.com/v2/organization/org_12345",
            "type": "application/hal+json"
        },
        "documentation": {
            "href": "https://docs.mollie.com/reference/v2/onboarding-api/get-onboarding-status",
            "type": "text/html"
        }
    }
}"#;

/// Parse `json` the way a re-encoded model prints it: `null` members
/// dropped, RFC 3339 timestamps in UTC.
pub fn canonical(json: &str) -> serde_json::Value {
    fn normalize(value: serde_json::Value) -> serde_json::Value {
        use serde_json::Value;
        match value {
            Value::Object(map) => Value::Object(
                map.into_iter()
                    .filter(|(_, v)| !v.is_null())
                    .map(|(k, v)| (k, normalize(v)))
                    .collect(),
            ),
            Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
            Value::String(s) => match chrono::DateTime::parse_from_rfc3339(&s) {
                Ok(ts) => serde_json::to_value(ts.with_timezone(&chrono::Utc)).unwrap(),
                Err(_) => Value::String(s),
            },
            other => other,
        }
    }

    normalize(serde_json::from_str(json).unwrap())
}

pub const NOT_FOUND_ERROR_RESPONSE: &str = r#"{
    "status": 404,
    "title": "Not Found",
    "detail": "No organization exists with token org_unknown.",
    "_links": {
        "documentation": {
            "href": "https://docs.mollie.com/overview/handling-errors",
            "type": "text/html"
        }
    }
}"#;
