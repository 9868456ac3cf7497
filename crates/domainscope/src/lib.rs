//! Aggregated WHOIS, DNS, and security-reputation research for domains.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use domainscope::{DomainResearcher, ResearchCredentials};
//!
//! #[tokio::main]
//! async fn main() -> domainscope::Result<()> {
//!     let researcher = DomainResearcher::from_credentials(ResearchCredentials {
//!         whois_api_key: std::env::var("WHOIS_API_KEY").ok(),
//!         security_api_key: std::env::var("SECURITY_API_KEY").ok(),
//!         abuse_api_key: None,
//!     });
//!
//!     let report = researcher.research_domain("example.com").await?;
//!
//!     println!("Registrar: {:?}", report.whois.and_then(|w| w.registrar));
//!     if !report.errors.is_empty() {
//!         eprintln!("Partial data: {:?}", report.errors);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

// Re-export core types
pub use domainscope_core::*;

// Re-export provider clients
pub use domainscope_providers as providers;

// Re-export the aggregator
pub use domainscope_research::{
    DomainResearcher, DomainResearcherBuilder, ResearchCache, ResearchCredentials,
    ResearcherConfig,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
