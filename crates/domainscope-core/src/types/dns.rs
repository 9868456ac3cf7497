use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// DNS record types queried during domain research.
///
/// The discriminants are the RFC 1035 type codes carried in the
/// `application/dns-json` wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// IPv4 address record
    A,
    /// Name server record
    Ns,
    /// Mail exchange record
    Mx,
    /// Text record
    Txt,
}

impl RecordType {
    /// All record types fetched by the aggregator, in fetch order.
    pub const ALL: [Self; 4] = [Self::A, Self::Mx, Self::Txt, Self::Ns];

    /// The query string used in DNS-over-HTTPS requests
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Ns => "NS",
            Self::Mx => "MX",
            Self::Txt => "TXT",
        }
    }

    /// The numeric type code used in `application/dns-json` answers
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::A => 1,
            Self::Ns => 2,
            Self::Mx => 15,
            Self::Txt => 16,
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved DNS records for a domain, keyed by record type.
///
/// A type whose lookup failed holds an empty list; the set itself is only
/// absent from a report when every per-type lookup failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecordSet {
    /// A record values (IPv4 addresses)
    #[serde(default)]
    pub a: Vec<String>,

    /// MX record values (priority and exchange host)
    #[serde(default)]
    pub mx: Vec<String>,

    /// TXT record values
    #[serde(default)]
    pub txt: Vec<String>,

    /// NS record values
    #[serde(default)]
    pub ns: Vec<String>,
}

impl DnsRecordSet {
    /// Records for a given type
    #[must_use]
    pub fn records(&self, rtype: RecordType) -> &[String] {
        match rtype {
            RecordType::A => &self.a,
            RecordType::Mx => &self.mx,
            RecordType::Txt => &self.txt,
            RecordType::Ns => &self.ns,
        }
    }

    /// Mutable records for a given type
    pub fn records_mut(&mut self, rtype: RecordType) -> &mut Vec<String> {
        match rtype {
            RecordType::A => &mut self.a,
            RecordType::Mx => &mut self.mx,
            RecordType::Txt => &mut self.txt,
            RecordType::Ns => &mut self.ns,
        }
    }

    /// Returns true if no record type holds any values
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty() && self.mx.is_empty() && self.txt.is_empty() && self.ns.is_empty()
    }

    /// The first A record that parses as an IP address.
    ///
    /// Feeds the IP-abuse lookup in the diagnostic path.
    #[must_use]
    pub fn first_address(&self) -> Option<IpAddr> {
        self.a.iter().find_map(|v| v.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_type_codes() {
        assert_eq!(RecordType::A.code(), 1);
        assert_eq!(RecordType::Ns.code(), 2);
        assert_eq!(RecordType::Mx.code(), 15);
        assert_eq!(RecordType::Txt.code(), 16);
    }

    #[test]
    fn test_first_address_skips_unparseable_values() {
        let set = DnsRecordSet {
            a: vec!["not-an-ip".into(), "93.184.216.34".into()],
            ..DnsRecordSet::default()
        };
        assert_eq!(set.first_address(), Some("93.184.216.34".parse().unwrap()));
    }

    #[test]
    fn test_first_address_empty() {
        assert_eq!(DnsRecordSet::default().first_address(), None);
    }
}
