use serde::{Deserialize, Serialize};

/// IP abuse intelligence for the first address a domain resolves to.
///
/// Only populated by the diagnostic path; the primary aggregation never
/// queries the abuse provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbuseRecord {
    /// The IP address that was checked
    pub ip: String,

    /// Abuse confidence score, 0-100
    pub confidence_score: u8,

    /// Whether the provider considers the address abusive
    pub is_abusive: bool,

    /// Country code of the address
    pub country: Option<String>,

    /// ISP operating the address
    pub isp: Option<String>,

    /// Usage classification (e.g. "Data Center/Web Hosting/Transit")
    pub usage_type: Option<String>,

    /// Total abuse reports on file
    pub total_reports: u32,

    /// Whether the address is on the provider's whitelist
    pub is_whitelisted: bool,
}
