//! Config command implementation

use clap::Args;
use colored::Colorize;

use mollie_api::config::AuthMode;
use mollie_api::{Config, ConfigError, Result};

use crate::cli::GlobalOptions;

/// Values to write; omitted flags leave the stored value untouched
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// API key (live_... or test_...)
    #[arg(long)]
    pub api_token: Option<String>,

    /// Organization access token (access_...)
    #[arg(long)]
    pub org_token: Option<String>,

    /// Which token to send
    #[arg(long, value_parser = parse_auth_mode)]
    pub auth: Option<AuthMode>,

    /// API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

fn parse_auth_mode(value: &str) -> std::result::Result<AuthMode, String> {
    match value {
        "api" => Ok(AuthMode::Api),
        "org" => Ok(AuthMode::Org),
        other => Err(format!("unknown auth mode '{}', expected 'api' or 'org'", other)),
    }
}

/// Run the config set command
pub fn set(opts: &GlobalOptions, args: SetArgs) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    let mut config = if path.exists() {
        Config::load_from(path.clone())?
    } else {
        Config::default()
    };

    if let Some(token) = args.api_token {
        config.api_token = Some(token);
    }
    if let Some(token) = args.org_token {
        config.org_token = Some(token);
    }
    if let Some(auth) = args.auth {
        config.auth = auth;
    }
    if let Some(url) = args.base_url {
        if !url.ends_with('/') {
            return Err(ConfigError::Invalid("base URL must end with '/'".to_string()).into());
        }
        config.base_url = url;
    }
    if let Some(secs) = args.timeout_secs {
        config.timeout_secs = secs;
    }

    config.save_to(path.clone())?;
    println!(
        "{} Saved configuration to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );

    Ok(())
}
