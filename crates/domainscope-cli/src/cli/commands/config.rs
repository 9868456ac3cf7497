//! `domainscope config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: Context) -> Result<()> {
    let config = Config::load()?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&config)?);
        }
        OutputFormat::Pretty => {
            println!("{}", "Current Configuration:".bold());
            println!();

            println!("  {} {}", "whois_api_key:".bold(), mask(config.whois_api_key.as_deref()));
            println!(
                "  {} {}",
                "security_api_key:".bold(),
                mask(config.security_api_key.as_deref())
            );
            println!("  {} {}", "abuse_api_key:".bold(), mask(config.abuse_api_key.as_deref()));
            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or(OutputFormat::Pretty)
            );
        }
    }

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "whois_api_key" => {
            config.whois_api_key = Some(value.to_string());
            println!("{} WHOIS API key set.", "Success:".green().bold());
        }
        "security_api_key" => {
            config.security_api_key = Some(value.to_string());
            println!("{} security API key set.", "Success:".green().bold());
        }
        "abuse_api_key" => {
            config.abuse_api_key = Some(value.to_string());
            println!("{} abuse API key set.", "Success:".green().bold());
        }
        "output_format" | "output" => {
            config.output_format = Some(value.parse()?);
            println!(
                "{} output format set to {}.",
                "Success:".green().bold(),
                value.cyan()
            );
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 whois_api_key     - WHOIS provider API key\n  \
                 security_api_key  - Security reputation provider API key\n  \
                 abuse_api_key     - IP abuse provider API key\n  \
                 output_format     - Default output format (pretty/json/yaml)",
                key
            );
        }
    }

    config.save()?;

    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}

/// Mask a credential for display
fn mask(key: Option<&str>) -> String {
    key.map_or_else(
        || "(not set)".dimmed().to_string(),
        |k| {
            if k.len() > 8 {
                format!("{}...{}", &k[..4], &k[k.len() - 4..])
            } else {
                "****".to_string()
            }
        },
    )
}
