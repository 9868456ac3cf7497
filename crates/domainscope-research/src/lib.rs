//! Concurrent domain-research aggregation with TTL caching.
//!
//! The [`DomainResearcher`] fans out to the WHOIS, security-reputation, and
//! DNS providers concurrently, tolerates any subset of them failing, merges
//! whatever arrived into a single [`DomainResearchResult`], and memoizes the
//! merged report per domain for a bounded time window.
//!
//! # Example
//!
//! ```rust,ignore
//! use domainscope_research::{DomainResearcher, ResearchCredentials};
//!
//! #[tokio::main]
//! async fn main() -> domainscope_core::Result<()> {
//!     let researcher = DomainResearcher::from_credentials(ResearchCredentials {
//!         whois_api_key: std::env::var("WHOIS_API_KEY").ok(),
//!         security_api_key: std::env::var("SECURITY_API_KEY").ok(),
//!         abuse_api_key: None,
//!     });
//!
//!     let report = researcher.research_domain("example.com").await?;
//!     println!("cached: {}, errors: {:?}", report.cached, report.errors);
//!     Ok(())
//! }
//! ```
//!
//! [`DomainResearchResult`]: domainscope_core::DomainResearchResult

mod aggregator;
mod cache;
mod outcome;

pub use aggregator::{
    DomainResearcher, DomainResearcherBuilder, ResearchCredentials, ResearcherConfig,
};
pub use cache::{Clock, ResearchCache, SystemClock};
pub use outcome::Outcome;
