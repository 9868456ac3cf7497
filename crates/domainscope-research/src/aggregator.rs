//! The research aggregator: concurrent fan-out, merge, and memoization.

use chrono::Utc;
use domainscope_core::{DnsRecordSet, DomainResearchResult, RecordType, Result};
use domainscope_providers::{
    AbuseProvider, DnsResolver, DohResolver, LiveAbuseProvider, LiveSecurityProvider,
    LiveWhoisProvider, PlaceholderSecurityProvider, PlaceholderWhoisProvider, SecurityProvider,
    WhoisProvider,
};
use futures_util::future;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::cache::{Clock, ResearchCache, SystemClock};
use crate::outcome::Outcome;

/// Timeouts and cache policy for the aggregator
#[derive(Debug, Clone)]
pub struct ResearcherConfig {
    /// WHOIS branch timeout
    pub whois_timeout: Duration,

    /// Security-reputation branch timeout
    pub security_timeout: Duration,

    /// Per-record-type DNS query timeout
    pub dns_record_timeout: Duration,

    /// Abuse lookup timeout (diagnostic path)
    pub abuse_timeout: Duration,

    /// How long a merged report stays valid in the cache
    pub cache_ttl: Duration,
}

impl Default for ResearcherConfig {
    fn default() -> Self {
        Self {
            whois_timeout: Duration::from_secs(10),
            security_timeout: Duration::from_secs(10),
            dns_record_timeout: Duration::from_secs(5),
            abuse_timeout: Duration::from_secs(10),
            cache_ttl: Duration::from_secs(3600),
        }
    }
}

/// Upstream credentials; a missing key selects the placeholder variant of
/// the corresponding provider at construction time
#[derive(Debug, Clone, Default)]
pub struct ResearchCredentials {
    /// WHOIS provider API key
    pub whois_api_key: Option<String>,

    /// Security-reputation provider API key
    pub security_api_key: Option<String>,

    /// IP-abuse provider API key; without it the diagnostic path skips
    /// the abuse lookup entirely
    pub abuse_api_key: Option<String>,
}

/// Aggregates WHOIS, security-reputation, and DNS data for a domain.
///
/// Providers are queried concurrently and may fail independently; whatever
/// arrives is merged into one [`DomainResearchResult`] and cached for the
/// configured TTL. Provider failures never escape
/// [`research_domain`](Self::research_domain) — they surface as `None`
/// fields plus entries in the report's `errors` list.
pub struct DomainResearcher {
    whois: Arc<dyn WhoisProvider>,
    security: Arc<dyn SecurityProvider>,
    dns: Arc<dyn DnsResolver>,
    abuse: Option<Arc<dyn AbuseProvider>>,
    cache: ResearchCache,
    config: ResearcherConfig,
}

impl DomainResearcher {
    /// Create a builder with placeholder providers and default settings
    #[must_use]
    pub fn builder() -> DomainResearcherBuilder {
        DomainResearcherBuilder::new()
    }

    /// Wire up providers from the available credentials.
    ///
    /// Missing WHOIS or security keys select the placeholder variants so
    /// the system runs in development with the full response shape intact.
    #[must_use]
    pub fn from_credentials(credentials: ResearchCredentials) -> Self {
        let mut builder = Self::builder().dns(Arc::new(DohResolver::new()));

        builder = match credentials.whois_api_key {
            Some(key) => builder.whois(Arc::new(LiveWhoisProvider::new(key))),
            None => builder.whois(Arc::new(PlaceholderWhoisProvider)),
        };

        builder = match credentials.security_api_key {
            Some(key) => builder.security(Arc::new(LiveSecurityProvider::new(key))),
            None => builder.security(Arc::new(PlaceholderSecurityProvider)),
        };

        if let Some(key) = credentials.abuse_api_key {
            builder = builder.abuse(Arc::new(LiveAbuseProvider::new(key)));
        }

        builder.build()
    }

    /// Produce a research report for a domain.
    ///
    /// The domain is expected to be a syntactically plausible hostname;
    /// validation is the caller's responsibility. A cache entry younger
    /// than the TTL is returned with `cached = true` and no upstream
    /// traffic; otherwise all providers are queried concurrently and the
    /// merged report (however degraded) is cached unconditionally.
    pub async fn research_domain(&self, domain: &str) -> Result<DomainResearchResult> {
        if let Some(hit) = self.cache.get(domain).await {
            return Ok(hit);
        }

        let report = self.fetch_fresh(domain, false).await?;
        self.cache.insert(domain, report.clone()).await;

        Ok(report)
    }

    /// Produce an uncached diagnostic report including the IP-abuse lookup.
    ///
    /// Bypasses the cache in both directions and, when an abuse provider is
    /// configured and DNS yielded at least one address, checks the first
    /// resolved address against it.
    pub async fn diagnose_domain(&self, domain: &str) -> Result<DomainResearchResult> {
        self.fetch_fresh(domain, true).await
    }

    /// Access the underlying cache (primarily for observability)
    #[must_use]
    pub const fn cache(&self) -> &ResearchCache {
        &self.cache
    }

    async fn fetch_fresh(&self, domain: &str, with_abuse: bool) -> Result<DomainResearchResult> {
        let domain = ResearchCache::normalize_key(domain);
        debug!(domain = %domain, "fetching fresh report");

        // All three branches settle before the merge; a failing or slow
        // provider never cancels its siblings.
        let (whois, security, dns) = tokio::join!(
            settle(
                "whois",
                self.config.whois_timeout,
                self.whois.lookup(&domain),
            ),
            settle(
                "security",
                self.config.security_timeout,
                self.security.lookup(&domain),
            ),
            self.fetch_dns(&domain),
        );

        let mut errors = Vec::new();

        let (whois, whois_err) = whois.into_parts();
        errors.extend(whois_err);

        let (security, security_err) = security.into_parts();
        errors.extend(security_err);

        let (dns, dns_err) = dns.into_parts();
        errors.extend(dns_err);

        let abuse = if with_abuse {
            self.fetch_abuse(dns.as_ref(), &mut errors).await
        } else {
            None
        };

        Ok(DomainResearchResult {
            domain,
            whois,
            security,
            dns,
            abuse,
            errors,
            timestamp: Utc::now(),
            cached: false,
        })
    }

    /// Query the four record types concurrently, each behind its own
    /// timeout.
    ///
    /// A failed type yields an empty list for that type only; the branch as
    /// a whole fails only when every type does.
    async fn fetch_dns(&self, domain: &str) -> Outcome<DnsRecordSet> {
        let limit = self.config.dns_record_timeout;

        let lookups = RecordType::ALL.map(|rtype| {
            let resolver = Arc::clone(&self.dns);
            async move {
                match timeout(limit, resolver.resolve(domain, rtype)).await {
                    Ok(Ok(values)) => Some((rtype, values)),
                    Ok(Err(err)) => {
                        debug!(domain, rtype = %rtype, %err, "record lookup failed");
                        None
                    }
                    Err(_) => {
                        debug!(domain, rtype = %rtype, "record lookup timed out");
                        None
                    }
                }
            }
        });

        let settled = future::join_all(lookups).await;

        if settled.iter().all(Option::is_none) {
            warn!(domain, "dns resolution failed for every record type");
            return Outcome::Failed("dns resolution failed for all record types".to_string());
        }

        let mut set = DnsRecordSet::default();
        for (rtype, values) in settled.into_iter().flatten() {
            *set.records_mut(rtype) = values;
        }

        Outcome::Fetched(set)
    }

    async fn fetch_abuse(
        &self,
        dns: Option<&DnsRecordSet>,
        errors: &mut Vec<String>,
    ) -> Option<domainscope_core::AbuseRecord> {
        let provider = self.abuse.as_ref()?;
        let ip = dns.and_then(DnsRecordSet::first_address)?;

        match settle("abuse", self.config.abuse_timeout, provider.check(ip)).await {
            Outcome::Fetched(record) => Some(record),
            Outcome::Failed(message) => {
                errors.push(message);
                None
            }
        }
    }
}

/// Await a provider branch under its timeout and tag the result.
///
/// The timeout cancels only this branch's pending call.
async fn settle<T>(
    provider: &'static str,
    limit: Duration,
    fut: impl Future<Output = Result<T>>,
) -> Outcome<T> {
    match timeout(limit, fut).await {
        Ok(Ok(value)) => Outcome::Fetched(value),
        Ok(Err(err)) => {
            warn!(provider, %err, "provider lookup failed");
            Outcome::Failed(format!("{provider} lookup failed: {err}"))
        }
        Err(_) => {
            warn!(provider, timeout_s = limit.as_secs(), "provider lookup timed out");
            Outcome::Failed(format!(
                "{provider} lookup timed out after {}s",
                limit.as_secs()
            ))
        }
    }
}

/// Builder for configuring a [`DomainResearcher`]
pub struct DomainResearcherBuilder {
    whois: Arc<dyn WhoisProvider>,
    security: Arc<dyn SecurityProvider>,
    dns: Arc<dyn DnsResolver>,
    abuse: Option<Arc<dyn AbuseProvider>>,
    config: ResearcherConfig,
    clock: Arc<dyn Clock>,
}

impl DomainResearcherBuilder {
    /// Create a builder with placeholder providers, the public DoH
    /// resolver, and default timeouts
    #[must_use]
    pub fn new() -> Self {
        Self {
            whois: Arc::new(PlaceholderWhoisProvider),
            security: Arc::new(PlaceholderSecurityProvider),
            dns: Arc::new(DohResolver::new()),
            abuse: None,
            config: ResearcherConfig::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Set the WHOIS provider
    #[must_use]
    pub fn whois(mut self, provider: Arc<dyn WhoisProvider>) -> Self {
        self.whois = provider;
        self
    }

    /// Set the security-reputation provider
    #[must_use]
    pub fn security(mut self, provider: Arc<dyn SecurityProvider>) -> Self {
        self.security = provider;
        self
    }

    /// Set the DNS resolver
    #[must_use]
    pub fn dns(mut self, resolver: Arc<dyn DnsResolver>) -> Self {
        self.dns = resolver;
        self
    }

    /// Set the abuse provider for the diagnostic path
    #[must_use]
    pub fn abuse(mut self, provider: Arc<dyn AbuseProvider>) -> Self {
        self.abuse = Some(provider);
        self
    }

    /// Set timeouts and cache TTL
    #[must_use]
    pub fn config(mut self, config: ResearcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the cache clock (useful for testing expiry)
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the researcher
    #[must_use]
    pub fn build(self) -> DomainResearcher {
        let cache = ResearchCache::new(self.config.cache_ttl, self.clock);

        DomainResearcher {
            whois: self.whois,
            security: self.security,
            dns: self.dns,
            abuse: self.abuse,
            cache,
            config: self.config,
        }
    }
}

impl Default for DomainResearcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
