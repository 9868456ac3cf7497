//! HTTP clients for the upstream data providers queried during domain
//! research.
//!
//! Each provider is modeled as a small trait with two implementations: a
//! live client speaking the provider's HTTP API, and (for the credentialed
//! providers) a placeholder returning fixed stand-in data so the system runs
//! in development without real keys. Which variant a deployment gets is
//! decided once, at construction time, from the available credentials.
//!
//! Every live client exposes a builder with a `base_url` override so tests
//! can point it at a mock HTTP server.

mod abuse;
mod dns;
mod http;
mod security;
mod whois;

pub use abuse::{AbuseProvider, LiveAbuseProvider, LiveAbuseProviderBuilder};
pub use dns::{DnsResolver, DohResolver, DohResolverBuilder};
pub use security::{
    LiveSecurityProvider, LiveSecurityProviderBuilder, PlaceholderSecurityProvider,
    SecurityProvider,
};
pub use whois::{
    LiveWhoisProvider, LiveWhoisProviderBuilder, PlaceholderWhoisProvider, WhoisProvider,
};
