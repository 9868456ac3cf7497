//! Core types and errors for the domainscope research stack.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - **Types**: the aggregated [`DomainResearchResult`] report and its
//!   per-provider record shapes
//! - **Errors**: comprehensive error handling with [`ResearchError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use domainscope_core::{DomainResearchResult, Result};
//!
//! fn summarize(report: DomainResearchResult) -> Result<()> {
//!     println!("Domain: {}", report.domain);
//!     if let Some(whois) = &report.whois {
//!         println!("Registrar: {:?}", whois.registrar);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
pub mod types;

pub use error::{ResearchError, Result};
pub use types::*;
