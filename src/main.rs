//! mollie CLI - companion for the Mollie organizations and onboarding APIs

use clap::Parser;
use log::debug;

mod cli;
mod output;

use cli::{
    Cli, CommandContext, Commands, ConfigCommands, GlobalOptions, OnboardingCommands, OrgCommands,
};
use mollie_api::{RequestContext, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `warn` by default, `debug` with `--debug`; `RUST_LOG` wins over both.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("mollie version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Config(ConfigCommands::Set(args)) => cli::config::set(&opts, args),
        Commands::Org(org_cmd) => {
            let ctx = command_context(&opts)?;
            match org_cmd {
                OrgCommands::Get { org_id } => cli::org::get(&ctx, &org_id).await,
                OrgCommands::Current => cli::org::current(&ctx).await,
                OrgCommands::Partner => cli::org::partner(&ctx).await,
            }
        }
        Commands::Onboarding(onboarding_cmd) => {
            let ctx = command_context(&opts)?;
            match onboarding_cmd {
                OnboardingCommands::Status => cli::onboarding::status(&ctx).await,
                OnboardingCommands::Submit(args) => cli::onboarding::submit(&ctx, args).await,
            }
        }
    }
}

/// Build the command context with a request context cancelled on Ctrl-C.
fn command_context(opts: &GlobalOptions) -> Result<CommandContext> {
    let request = RequestContext::background();
    let on_interrupt = request.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received, cancelling request");
            on_interrupt.cancel();
        }
    });

    CommandContext::new(opts, request)
}
