//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod config;
pub mod context;
pub mod onboarding;
pub mod org;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Command-line companion for the Mollie organizations and onboarding APIs
#[derive(Parser, Debug)]
#[command(name = "mollie")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "MOLLIE_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "MOLLIE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Access token to send instead of the configured one
    #[arg(long = "token", global = true)]
    pub api_token: Option<String>,

    /// Override the API base URL
    #[arg(long = "api-url", global = true)]
    pub base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "MOLLIE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Inspect organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// Check or submit onboarding
    #[command(subcommand)]
    Onboarding(OnboardingCommands),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// Show an organization by ID
    Get {
        /// Organization ID (org_...)
        org_id: String,
    },

    /// Show the organization owning the access token
    Current,

    /// Show partner status of the current organization
    Partner,
}

/// Onboarding subcommands
#[derive(Subcommand, Debug)]
pub enum OnboardingCommands {
    /// Show onboarding status
    Status,

    /// Submit onboarding data
    Submit(onboarding::SubmitArgs),
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write values to the configuration file
    Set(config::SetArgs),
}
