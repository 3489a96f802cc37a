//! Output formatting for CLI results

pub mod json;
pub mod table;

/// Cell text for an optional value
pub fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

/// Cell text for a flag the API may leave out
pub fn yes_no(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    }
}
