//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load configuration
    let config = Config::load()?;

    // Determine output format
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // Keys resolve flag -> env (via clap) -> config file
    let ctx = commands::Context {
        whois_key: cli.whois_key.or_else(|| config.whois_api_key.clone()),
        security_key: cli.security_key.or_else(|| config.security_api_key.clone()),
        abuse_key: cli.abuse_key.or_else(|| config.abuse_api_key.clone()),
        output_format,
        verbose: cli.verbose,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Research(args) => commands::research::execute(ctx, args).await,
        Commands::Debug(args) => commands::debug::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(ctx, args).await,
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "domainscope=debug"
    } else {
        "domainscope=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
