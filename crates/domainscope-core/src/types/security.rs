use serde::{Deserialize, Serialize};

/// Security reputation summary for a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityRecord {
    /// Whether any scanning engine flagged the domain as malicious
    pub malicious: bool,

    /// Human-readable reputation label ("clean", "suspicious", "malicious")
    pub reputation: String,

    /// Number of engines reporting a threat (malicious + suspicious)
    pub threats_detected: u32,

    /// Timestamp of the provider's most recent scan
    pub last_scanned: Option<String>,
}

impl SecurityRecord {
    /// A clean record with no detections, used when no scan data exists
    #[must_use]
    pub fn clean() -> Self {
        Self {
            malicious: false,
            reputation: "clean".to_string(),
            threats_detected: 0,
            last_scanned: None,
        }
    }
}
