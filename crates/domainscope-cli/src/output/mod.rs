//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use domainscope::{DnsRecordSet, DomainResearchResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed report with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Render a research report in the requested format.
pub fn render_report(format: OutputFormat, report: &DomainResearchResult) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(report)?);
        }
        OutputFormat::Pretty => print_report_pretty(report),
    }

    Ok(())
}

fn print_report_pretty(report: &DomainResearchResult) {
    let cache_note = if report.cached { " (cached)" } else { "" };
    println!(
        "{} {}{}",
        "Domain:".bold(),
        report.domain.cyan().bold(),
        cache_note.dimmed()
    );
    println!("  {} {}", "Fetched:".bold(), report.timestamp);
    println!();

    if let Some(whois) = &report.whois {
        println!("{}", "Registration:".bold().underline());
        if let Some(registrar) = &whois.registrar {
            println!("  {} {}", "Registrar:".bold(), registrar);
        }
        if let Some(created) = &whois.created {
            println!("  {} {}", "Created:".bold(), created);
        }
        if let Some(expires) = &whois.expires {
            println!("  {} {}", "Expires:".bold(), expires);
        }
        if !whois.name_servers.is_empty() {
            println!("  {} {}", "Name servers:".bold(), whois.name_servers.join(", "));
        }
        if let Some(org) = &whois.registrant_org {
            let country = whois.registrant_country.as_deref().unwrap_or("?");
            println!("  {} {} ({})", "Registrant:".bold(), org, country);
        }
        println!();
    } else {
        println!("{} {}", "Registration:".bold().underline(), "unavailable".dimmed());
        println!();
    }

    if let Some(security) = &report.security {
        println!("{}", "Security:".bold().underline());
        let label = if security.malicious {
            security.reputation.red().bold()
        } else {
            security.reputation.green()
        };
        println!("  {} {}", "Reputation:".bold(), label);
        println!("  {} {}", "Threats detected:".bold(), security.threats_detected);
        if let Some(scanned) = &security.last_scanned {
            println!("  {} {}", "Last scanned:".bold(), scanned);
        }
        println!();
    } else {
        println!("{} {}", "Security:".bold().underline(), "unavailable".dimmed());
        println!();
    }

    if let Some(dns) = &report.dns {
        println!("{}", "DNS Records:".bold().underline());
        print_record_lines(dns);
        println!();
    } else {
        println!("{} {}", "DNS Records:".bold().underline(), "unavailable".dimmed());
        println!();
    }

    if let Some(abuse) = &report.abuse {
        println!("{}", "IP Abuse:".bold().underline());
        let score = if abuse.is_abusive {
            abuse.confidence_score.to_string().red().bold()
        } else {
            abuse.confidence_score.to_string().green()
        };
        println!("  {} {} (confidence {})", "Address:".bold(), abuse.ip.cyan(), score);
        if let Some(isp) = &abuse.isp {
            let country = abuse.country.as_deref().unwrap_or("?");
            println!("  {} {} ({})", "ISP:".bold(), isp, country);
        }
        if let Some(usage) = &abuse.usage_type {
            println!("  {} {}", "Usage:".bold(), usage);
        }
        println!("  {} {}", "Reports:".bold(), abuse.total_reports);
        if abuse.is_whitelisted {
            println!("  {}", "whitelisted".green());
        }
        println!();
    }

    if !report.errors.is_empty() {
        println!("{}", "Warnings:".yellow().bold().underline());
        for error in &report.errors {
            println!("  {} {}", "!".yellow(), error);
        }
    }
}

fn print_record_lines(dns: &DnsRecordSet) {
    for (label, values) in [
        ("A", &dns.a),
        ("MX", &dns.mx),
        ("TXT", &dns.txt),
        ("NS", &dns.ns),
    ] {
        if values.is_empty() {
            println!("  {:4} {}", label.yellow(), "(none)".dimmed());
        } else {
            for value in values {
                println!("  {:4} {}", label.yellow(), value);
            }
        }
    }
}
