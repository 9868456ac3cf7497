//! DNS resolution over HTTPS using the `application/dns-json` wire format.

use async_trait::async_trait;
use domainscope_core::{RecordType, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::http;

/// Default DNS-over-HTTPS endpoint
const DEFAULT_BASE_URL: &str = "https://cloudflare-dns.com/dns-query";

/// Default per-query timeout; DNS answers fast or not at all
const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-record-type DNS resolution
#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Resolve a single record type for a domain.
    ///
    /// A domain with no records of the requested type yields an empty list,
    /// not an error.
    async fn resolve(&self, domain: &str, rtype: RecordType) -> Result<Vec<String>>;
}

/// DNS-over-HTTPS resolver
pub struct DohResolver {
    http: reqwest::Client,
    base_url: String,
}

impl DohResolver {
    /// Create a resolver against the default public endpoint
    #[must_use]
    pub fn new() -> Self {
        DohResolverBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> DohResolverBuilder {
        DohResolverBuilder::new()
    }
}

impl Default for DohResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for DohResolver {
    async fn resolve(&self, domain: &str, rtype: RecordType) -> Result<Vec<String>> {
        debug!(domain, rtype = %rtype, "DoH query");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("name", domain), ("type", rtype.as_str())])
            .header("Accept", "application/dns-json")
            .send()
            .await
            .map_err(|e| http::transport_error(&e))?;

        let body: DohResponse = http::read_json(response).await?;
        Ok(body.records_of(rtype))
    }
}

/// Builder for configuring a [`DohResolver`]
pub struct DohResolverBuilder {
    base_url: String,
    timeout: Duration,
}

impl DohResolverBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Set the endpoint URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-query timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the resolver
    #[must_use]
    pub fn build(self) -> DohResolver {
        DohResolver {
            http: http::build_client(self.timeout),
            base_url: self.base_url,
        }
    }
}

impl Default for DohResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DohResponse {
    #[serde(rename = "Status")]
    status: u32,

    #[serde(rename = "Answer")]
    answer: Vec<DohAnswer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DohAnswer {
    #[serde(rename = "type")]
    rtype: u16,

    data: String,
}

impl DohResponse {
    /// Answers matching the requested type, cleaned for presentation.
    ///
    /// The `Answer` array can mix types when the resolver chases a CNAME;
    /// only entries with the requested type code are kept.
    fn records_of(self, rtype: RecordType) -> Vec<String> {
        self.answer
            .into_iter()
            .filter(|a| a.rtype == rtype.code())
            .map(|a| clean_record_data(&a.data, rtype))
            .collect()
    }
}

/// Strip wire-format decorations from a record value
fn clean_record_data(data: &str, rtype: RecordType) -> String {
    match rtype {
        // TXT data arrives wrapped in quotes
        RecordType::Txt => data.trim_matches('"').to_string(),
        // Host names carry a trailing root dot
        RecordType::Ns | RecordType::Mx => data.trim_end_matches('.').to_string(),
        RecordType::A => data.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_filtered_by_type_code() {
        let json = r#"{
            "Status": 0,
            "Answer": [
                {"name": "example.com", "type": 5, "TTL": 300, "data": "edge.example.net."},
                {"name": "example.com", "type": 1, "TTL": 300, "data": "93.184.216.34"}
            ]
        }"#;

        let response: DohResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.records_of(RecordType::A), vec!["93.184.216.34"]);
    }

    #[test]
    fn test_missing_answer_array_is_empty() {
        let response: DohResponse = serde_json::from_str(r#"{"Status": 3}"#).unwrap();
        assert_eq!(response.status, 3);
        assert!(response.records_of(RecordType::Mx).is_empty());
    }

    #[test]
    fn test_txt_records_unquoted() {
        assert_eq!(
            clean_record_data("\"v=spf1 -all\"", RecordType::Txt),
            "v=spf1 -all"
        );
    }

    #[test]
    fn test_host_names_lose_trailing_dot() {
        assert_eq!(
            clean_record_data("a.iana-servers.net.", RecordType::Ns),
            "a.iana-servers.net"
        );
        assert_eq!(
            clean_record_data("10 mail.example.com.", RecordType::Mx),
            "10 mail.example.com"
        );
    }
}
