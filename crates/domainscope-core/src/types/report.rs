use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AbuseRecord, DnsRecordSet, SecurityRecord, WhoisRecord};

/// Aggregated research report for a single domain.
///
/// Each provider branch is independently nullable: a `None` field means
/// "data source unavailable", never "request failed". Every branch that did
/// not complete successfully contributes one entry to [`errors`].
///
/// [`errors`]: DomainResearchResult::errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainResearchResult {
    /// The domain that was researched (normalized to lowercase)
    pub domain: String,

    /// WHOIS registration data, if the lookup succeeded
    pub whois: Option<WhoisRecord>,

    /// Security reputation data, if the lookup succeeded
    pub security: Option<SecurityRecord>,

    /// Resolved DNS records, if any record-type lookup succeeded
    pub dns: Option<DnsRecordSet>,

    /// IP abuse data; populated only by the diagnostic path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abuse: Option<AbuseRecord>,

    /// One human-readable entry per failed provider branch
    #[serde(default)]
    pub errors: Vec<String>,

    /// When the aggregation completed (ISO-8601)
    pub timestamp: DateTime<Utc>,

    /// Whether this report was served from the cache
    pub cached: bool,
}

impl DomainResearchResult {
    /// Returns true if at least one provider branch yielded data
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.whois.is_some() || self.security.is_some() || self.dns.is_some()
    }

    /// Returns true if every provider branch failed
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        !self.has_data()
    }
}
