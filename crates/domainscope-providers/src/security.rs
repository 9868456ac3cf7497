//! Security reputation lookups against the scanning provider's v3 API.

use async_trait::async_trait;
use chrono::DateTime;
use domainscope_core::{Result, SecurityRecord};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::http;

/// Default security reputation API endpoint
const DEFAULT_BASE_URL: &str = "https://www.virustotal.com/api/v3";

/// Reputation lookup for a domain
#[async_trait]
pub trait SecurityProvider: Send + Sync {
    /// Fetch the security reputation summary for a domain
    async fn lookup(&self, domain: &str) -> Result<SecurityRecord>;
}

/// Live client for the security reputation provider
pub struct LiveSecurityProvider {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl LiveSecurityProvider {
    /// Create a client with the given API key using default settings
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        LiveSecurityProviderBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> LiveSecurityProviderBuilder {
        LiveSecurityProviderBuilder::new(api_key)
    }
}

#[async_trait]
impl SecurityProvider for LiveSecurityProvider {
    async fn lookup(&self, domain: &str) -> Result<SecurityRecord> {
        let url = format!("{}/domains/{domain}", self.base_url);
        debug!(domain, "security reputation lookup");

        let response = self
            .http
            .get(&url)
            .header("x-apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| http::transport_error(&e))?;

        let body: SecurityResponse = http::read_json(response).await?;
        Ok(body.data.attributes.into_record())
    }
}

/// Builder for configuring a [`LiveSecurityProvider`]
pub struct LiveSecurityProviderBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl LiveSecurityProviderBuilder {
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
    pub fn build(self) -> LiveSecurityProvider {
        LiveSecurityProvider {
            http: http::build_client(self.timeout),
            api_key: self.api_key,
            base_url: self.base_url,
        }
    }
}

/// Stand-in used when no security credential is configured.
///
/// Every lookup reports a clean domain, keeping the response shape stable
/// in development.
pub struct PlaceholderSecurityProvider;

#[async_trait]
impl SecurityProvider for PlaceholderSecurityProvider {
    async fn lookup(&self, domain: &str) -> Result<SecurityRecord> {
        debug!(domain, "security placeholder lookup");
        Ok(SecurityRecord::clean())
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct SecurityResponse {
    data: SecurityData,
}

#[derive(Debug, Deserialize)]
struct SecurityData {
    attributes: SecurityAttributes,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SecurityAttributes {
    last_analysis_stats: AnalysisStats,
    last_analysis_date: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnalysisStats {
    malicious: u32,
    suspicious: u32,
    harmless: u32,
    undetected: u32,
}

impl SecurityAttributes {
    fn into_record(self) -> SecurityRecord {
        let stats = self.last_analysis_stats;
        let reputation = if stats.malicious > 0 {
            "malicious"
        } else if stats.suspicious > 0 {
            "suspicious"
        } else {
            "clean"
        };

        SecurityRecord {
            malicious: stats.malicious > 0,
            reputation: reputation.to_string(),
            threats_detected: stats.malicious + stats.suspicious,
            last_scanned: self
                .last_analysis_date
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .map(|dt| dt.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes(json: &str) -> SecurityAttributes {
        let response: SecurityResponse = serde_json::from_str(json).unwrap();
        response.data.attributes
    }

    #[test]
    fn test_clean_stats_map_to_clean_record() {
        let record = attributes(
            r#"{"data": {"attributes": {
                "last_analysis_stats": {"malicious": 0, "suspicious": 0, "harmless": 70, "undetected": 12},
                "last_analysis_date": 1700000000
            }}}"#,
        )
        .into_record();

        assert!(!record.malicious);
        assert_eq!(record.reputation, "clean");
        assert_eq!(record.threats_detected, 0);
        assert!(record.last_scanned.is_some());
    }

    #[test]
    fn test_malicious_stats_map_to_flagged_record() {
        let record = attributes(
            r#"{"data": {"attributes": {
                "last_analysis_stats": {"malicious": 3, "suspicious": 2, "harmless": 60, "undetected": 10}
            }}}"#,
        )
        .into_record();

        assert!(record.malicious);
        assert_eq!(record.reputation, "malicious");
        assert_eq!(record.threats_detected, 5);
        assert!(record.last_scanned.is_none());
    }

    #[test]
    fn test_suspicious_only_stats() {
        let record = attributes(
            r#"{"data": {"attributes": {
                "last_analysis_stats": {"malicious": 0, "suspicious": 1, "harmless": 65, "undetected": 9}
            }}}"#,
        )
        .into_record();

        assert!(!record.malicious);
        assert_eq!(record.reputation, "suspicious");
        assert_eq!(record.threats_detected, 1);
    }
}
