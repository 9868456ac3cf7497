//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Aggregated domain research from the command line
///
/// Looks up WHOIS registration data, security reputation, and DNS records
/// for a domain in one shot. Runs without API keys using clearly-labeled
/// placeholder data.
#[derive(Parser, Debug)]
#[command(name = "domainscope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// WHOIS provider API key
    #[arg(long, env = "DOMAINSCOPE_WHOIS_KEY", global = true)]
    pub whois_key: Option<String>,

    /// Security reputation provider API key
    #[arg(long, env = "DOMAINSCOPE_SECURITY_KEY", global = true)]
    pub security_key: Option<String>,

    /// IP abuse provider API key (used by the debug command)
    #[arg(long, env = "DOMAINSCOPE_ABUSE_KEY", global = true)]
    pub abuse_key: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Research a domain (cached aggregation)
    Research(ResearchArgs),

    /// Uncached diagnostic lookup, including IP abuse intelligence
    Debug(DebugArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Research command
// ============================================================================

#[derive(Args, Debug)]
pub struct ResearchArgs {
    /// Domain name to research (e.g., "example.com")
    pub domain: String,
}

// ============================================================================
// Debug command
// ============================================================================

#[derive(Args, Debug)]
pub struct DebugArgs {
    /// Domain name to diagnose
    pub domain: String,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., whois_api_key, output_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_research_parses_domain() {
        let cli = Cli::try_parse_from(["domainscope", "research", "example.com"]).unwrap();
        match cli.command {
            Commands::Research(args) => assert_eq!(args.domain, "example.com"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_output_flag_is_global() {
        let cli =
            Cli::try_parse_from(["domainscope", "research", "example.com", "--output", "json"])
                .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }
}
