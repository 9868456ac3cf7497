//! IP abuse intelligence lookups, used only by the diagnostic path.

use async_trait::async_trait;
use domainscope_core::{AbuseRecord, Result};
use serde::Deserialize;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

use crate::http;

/// Default abuse intelligence API endpoint
const DEFAULT_BASE_URL: &str = "https://api.abuseipdb.com/api/v2";

/// Report window requested from the provider, in days
const MAX_AGE_DAYS: &str = "90";

/// Confidence score at which an address is considered abusive
const ABUSE_CONFIDENCE_THRESHOLD: u8 = 50;

/// Abuse intelligence lookup for a single IP address
#[async_trait]
pub trait AbuseProvider: Send + Sync {
    /// Fetch the abuse summary for an address
    async fn check(&self, ip: IpAddr) -> Result<AbuseRecord>;
}

/// Live client for the abuse intelligence provider
pub struct LiveAbuseProvider {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl LiveAbuseProvider {
    /// Create a client with the given API key using default settings
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        LiveAbuseProviderBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> LiveAbuseProviderBuilder {
        LiveAbuseProviderBuilder::new(api_key)
    }
}

#[async_trait]
impl AbuseProvider for LiveAbuseProvider {
    async fn check(&self, ip: IpAddr) -> Result<AbuseRecord> {
        let url = format!("{}/check", self.base_url);
        let ip_str = ip.to_string();
        debug!(ip = %ip, "abuse lookup");

        let response = self
            .http
            .get(&url)
            .query(&[("ipAddress", ip_str.as_str()), ("maxAgeInDays", MAX_AGE_DAYS)])
            .header("Key", &self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| http::transport_error(&e))?;

        let body: AbuseResponse = http::read_json(response).await?;
        Ok(body.data.into_record(&ip_str))
    }
}

/// Builder for configuring a [`LiveAbuseProvider`]
pub struct LiveAbuseProviderBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl LiveAbuseProviderBuilder {
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
    pub fn build(self) -> LiveAbuseProvider {
        LiveAbuseProvider {
            http: http::build_client(self.timeout),
            api_key: self.api_key,
            base_url: self.base_url,
        }
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct AbuseResponse {
    data: AbuseData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AbuseData {
    #[serde(rename = "abuseConfidenceScore")]
    abuse_confidence_score: u8,

    #[serde(rename = "countryCode")]
    country_code: Option<String>,

    isp: Option<String>,

    #[serde(rename = "usageType")]
    usage_type: Option<String>,

    #[serde(rename = "totalReports")]
    total_reports: u32,

    #[serde(rename = "isWhitelisted")]
    is_whitelisted: Option<bool>,
}

impl AbuseData {
    fn into_record(self, ip: &str) -> AbuseRecord {
        AbuseRecord {
            ip: ip.to_string(),
            confidence_score: self.abuse_confidence_score,
            is_abusive: self.abuse_confidence_score >= ABUSE_CONFIDENCE_THRESHOLD,
            country: self.country_code,
            isp: self.isp,
            usage_type: self.usage_type,
            total_reports: self.total_reports,
            is_whitelisted: self.is_whitelisted.unwrap_or(false),
        }
    }
}
