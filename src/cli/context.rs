//! Command execution context

use log::debug;
use mollie_api::config::AuthMode;
use mollie_api::{Config, MollieClient, RequestContext, Result};

use crate::cli::{GlobalOptions, OutputFormat};

/// API client, output format and request context for one command.
pub struct CommandContext {
    pub client: MollieClient,
    pub format: OutputFormat,
    /// Cancelled on Ctrl-C
    pub request: RequestContext,
}

impl CommandContext {
    /// Load configuration, apply flag overrides and build the client.
    ///
    /// # Errors
    /// Returns error if the config file cannot be parsed or no token is set.
    pub fn new(opts: &GlobalOptions, request: RequestContext) -> Result<Self> {
        let config = resolve_config(opts)?;
        let client = MollieClient::from_config(&config)?;

        debug!("using base URL {}", config.base_url);

        Ok(Self {
            client,
            format: opts.format,
            request,
        })
    }
}

/// Config file + environment, then command-line overrides.
pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load_at(opts.config_ref())?;

    if let Some(token) = &opts.api_token {
        match config.auth {
            AuthMode::Api => config.api_token = Some(token.clone()),
            AuthMode::Org => config.org_token = Some(token.clone()),
        }
    }
    if let Some(url) = &opts.base_url {
        config.base_url = url.clone();
    }

    Ok(config)
}
