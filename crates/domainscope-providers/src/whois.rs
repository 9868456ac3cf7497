//! WHOIS registry lookups over the provider's JSON HTTP API.

use async_trait::async_trait;
use domainscope_core::{Result, WhoisRecord};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::http;

/// Default WHOIS API endpoint
const DEFAULT_BASE_URL: &str = "https://www.whoisxmlapi.com";

/// Registry lookup for domain registration metadata
#[async_trait]
pub trait WhoisProvider: Send + Sync {
    /// Fetch the WHOIS record for a domain
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord>;
}

/// Live WHOIS client speaking the provider's JSON API
pub struct LiveWhoisProvider {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl LiveWhoisProvider {
    /// Create a client with the given API key using default settings
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        LiveWhoisProviderBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> LiveWhoisProviderBuilder {
        LiveWhoisProviderBuilder::new(api_key)
    }
}

#[async_trait]
impl WhoisProvider for LiveWhoisProvider {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord> {
        let url = format!("{}/whoisserver/WhoisService", self.base_url);
        debug!(domain, "WHOIS lookup");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("domainName", domain),
                ("outputFormat", "JSON"),
            ])
            .send()
            .await
            .map_err(|e| http::transport_error(&e))?;

        let body: WhoisResponse = http::read_json(response).await?;
        Ok(body.whois_record.into_record())
    }
}

/// Builder for configuring a [`LiveWhoisProvider`]
pub struct LiveWhoisProviderBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl LiveWhoisProviderBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: http::DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> LiveWhoisProvider {
        LiveWhoisProvider {
            http: http::build_client(self.timeout),
            api_key: self.api_key,
            base_url: self.base_url,
        }
    }
}

/// Fixed stand-in used when no WHOIS credential is configured.
///
/// Keeps the response shape intact in development: every field of the
/// record is present and clearly labeled as placeholder data.
pub struct PlaceholderWhoisProvider;

impl PlaceholderWhoisProvider {
    /// The record returned for every lookup
    #[must_use]
    pub fn record() -> WhoisRecord {
        WhoisRecord {
            registrar: Some("Example Registrar, LLC (placeholder)".to_string()),
            created: Some("1995-01-01T00:00:00Z".to_string()),
            expires: Some("2030-01-01T00:00:00Z".to_string()),
            name_servers: vec![
                "ns1.placeholder.invalid".to_string(),
                "ns2.placeholder.invalid".to_string(),
            ],
            registrant_org: Some("Placeholder Data (no WHOIS credential)".to_string()),
            registrant_country: Some("US".to_string()),
        }
    }
}

#[async_trait]
impl WhoisProvider for PlaceholderWhoisProvider {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord> {
        debug!(domain, "WHOIS placeholder lookup");
        Ok(Self::record())
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct WhoisResponse {
    #[serde(rename = "WhoisRecord")]
    whois_record: WireWhoisRecord,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireWhoisRecord {
    #[serde(rename = "registrarName")]
    registrar_name: Option<String>,

    #[serde(rename = "createdDate")]
    created_date: Option<String>,

    #[serde(rename = "expiresDate")]
    expires_date: Option<String>,

    #[serde(rename = "nameServers")]
    name_servers: Option<WireNameServers>,

    registrant: Option<WireRegistrant>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireNameServers {
    #[serde(rename = "hostNames")]
    host_names: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireRegistrant {
    organization: Option<String>,
    country: Option<String>,
}

impl WireWhoisRecord {
    fn into_record(self) -> WhoisRecord {
        let (org, country) = self
            .registrant
            .map_or((None, None), |r| (r.organization, r.country));

        WhoisRecord {
            registrar: self.registrar_name,
            created: self.created_date,
            expires: self.expires_date,
            name_servers: self.name_servers.map(|ns| ns.host_names).unwrap_or_default(),
            registrant_org: org,
            registrant_country: country,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_record_mapping() {
        let json = r#"{
            "WhoisRecord": {
                "registrarName": "MarkMonitor Inc.",
                "createdDate": "1995-08-14T04:00:00Z",
                "expiresDate": "2026-08-13T04:00:00Z",
                "nameServers": {"hostNames": ["a.iana-servers.net", "b.iana-servers.net"]},
                "registrant": {"organization": "Internet Assigned Numbers Authority", "country": "US"}
            }
        }"#;

        let parsed: WhoisResponse = serde_json::from_str(json).unwrap();
        let record = parsed.whois_record.into_record();

        assert_eq!(record.registrar.as_deref(), Some("MarkMonitor Inc."));
        assert_eq!(record.name_servers.len(), 2);
        assert_eq!(record.registrant_country.as_deref(), Some("US"));
    }

    #[test]
    fn test_wire_record_tolerates_missing_sections() {
        let json = r#"{"WhoisRecord": {"registrarName": "Some Registrar"}}"#;

        let parsed: WhoisResponse = serde_json::from_str(json).unwrap();
        let record = parsed.whois_record.into_record();

        assert_eq!(record.registrar.as_deref(), Some("Some Registrar"));
        assert!(record.name_servers.is_empty());
        assert!(record.registrant_org.is_none());
    }

    #[tokio::test]
    async fn test_placeholder_has_every_field() {
        let record = PlaceholderWhoisProvider.lookup("example.com").await.unwrap();

        assert!(record.registrar.is_some());
        assert!(record.created.is_some());
        assert!(record.expires.is_some());
        assert!(!record.name_servers.is_empty());
        assert!(record.registrant_org.is_some());
        assert!(record.registrant_country.is_some());
    }
}
