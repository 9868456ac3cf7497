//! Command implementations.

pub mod config;
pub mod debug;
pub mod research;

use anyhow::Result;
use domainscope::{DomainResearcher, ResearchCredentials};

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// WHOIS provider API key
    pub whois_key: Option<String>,

    /// Security reputation provider API key
    pub security_key: Option<String>,

    /// IP abuse provider API key
    pub abuse_key: Option<String>,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,
}

impl Context {
    /// Wire up a researcher from whichever credentials are available.
    ///
    /// Missing keys select the placeholder providers, so this never fails.
    #[must_use]
    pub fn researcher(&self) -> DomainResearcher {
        DomainResearcher::from_credentials(ResearchCredentials {
            whois_api_key: self.whois_key.clone(),
            security_api_key: self.security_key.clone(),
            abuse_api_key: self.abuse_key.clone(),
        })
    }
}

/// Validate and normalize a user-supplied domain name.
///
/// The aggregator expects a syntactically plausible hostname; the CLI is
/// the caller, so the check lives here.
pub fn validate_domain(domain: &str) -> Result<String> {
    let domain = domain.trim().to_lowercase();

    if domain.is_empty() {
        anyhow::bail!("Empty domain");
    }

    if domain.len() > 253 {
        anyhow::bail!("Domain name too long");
    }

    if !domain.contains('.')
        || domain.contains("..")
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        anyhow::bail!("Invalid domain format: {domain}");
    }

    Ok(domain)
}
