//! Shared CLI arguments

use crate::cli::Cli;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

/// Global CLI options passed to all command handlers.
///
/// Precedence: CLI flag > environment variable > config file > default.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.mollie/config.yaml)
    pub config: Option<String>,

    pub api_token: Option<String>,

    pub base_url: Option<String>,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_token: cli.api_token.clone(),
            base_url: cli.base_url.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
