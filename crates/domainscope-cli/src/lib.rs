//! # domainscope-cli
//!
//! Command-line interface for the domainscope research stack.
//!
//! ## Features
//!
//! - **Research**: cached WHOIS + security + DNS aggregation for a domain
//! - **Debug**: uncached diagnostic lookup including IP abuse intelligence
//! - **Multiple output formats**: pretty, JSON, YAML
//! - **Degraded mode**: runs without API keys using placeholder providers

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
