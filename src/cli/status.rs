//! Status command implementation

use colored::Colorize;

use mollie_api::Result;
use mollie_api::config::AuthMode;

use crate::cli::GlobalOptions;
use crate::cli::context::resolve_config;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Mollie Configuration Status".bold());

    let path = mollie_api::Config::resolve_path(opts.config_ref())?;
    if path.exists() {
        println!("Config file: {}", path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            path.display().to_string().cyan(),
            "(not found)".dimmed()
        );
    }

    let config = resolve_config(opts)?;
    println!("Base URL: {}", config.base_url);
    println!();

    let mode = match config.auth {
        AuthMode::Api => "API key",
        AuthMode::Org => "organization token",
    };
    if config.token().is_ok() {
        println!("{} Authenticating with {}", "✓".green(), mode);
    } else {
        println!("{} No {} configured", "✗".red(), mode);
        println!("  → Set MOLLIE_API_TOKEN or run 'mollie config set'");
    }

    if !config.base_url.ends_with('/') {
        println!("{} Base URL must end with '/'", "⚠".yellow());
    }

    Ok(())
}
