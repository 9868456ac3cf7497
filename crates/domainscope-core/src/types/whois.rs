use serde::{Deserialize, Serialize};

/// Domain registration metadata from the WHOIS provider.
///
/// Dates are carried as the provider-supplied strings; upstream registries
/// do not agree on a single date format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisRecord {
    /// Registrar name
    pub registrar: Option<String>,

    /// Registration date
    pub created: Option<String>,

    /// Expiration date
    pub expires: Option<String>,

    /// Authoritative name servers
    #[serde(default)]
    pub name_servers: Vec<String>,

    /// Registrant organization
    pub registrant_org: Option<String>,

    /// Registrant country
    pub registrant_country: Option<String>,
}

impl WhoisRecord {
    /// Returns true if the record carries no registration data at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrar.is_none()
            && self.created.is_none()
            && self.expires.is_none()
            && self.name_servers.is_empty()
            && self.registrant_org.is_none()
            && self.registrant_country.is_none()
    }
}
