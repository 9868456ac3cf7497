//! In-process report cache with an injectable clock and TTL.

use domainscope_core::DomainResearchResult;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;
use tracing::debug;

/// Time source for cache expiry decisions.
///
/// Injected so tests can drive expiry deterministically instead of
/// sleeping through a TTL window.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now_ms(&self) -> u64;
}

/// Wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

struct CacheEntry {
    data: DomainResearchResult,
    stored_at_ms: u64,
}

/// Report cache keyed by normalized domain.
///
/// Entries expire on read: a lookup that finds an entry older than the TTL
/// evicts it and reports a miss. There is no background sweeper and no
/// single-flight de-duplication; concurrent misses for the same key each
/// fetch independently and the last write wins.
pub struct ResearchCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl ResearchCache {
    /// Create a cache with the given TTL and clock
    #[must_use]
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Create a cache driven by wall-clock time
    #[must_use]
    pub fn with_system_clock(ttl: Duration) -> Self {
        Self::new(ttl, Arc::new(SystemClock))
    }

    /// Normalize a domain into its cache key
    #[must_use]
    pub fn normalize_key(domain: &str) -> String {
        let normalized = domain.trim().to_lowercase();

        // Strip the trailing root dot common in DNS contexts
        match normalized.strip_suffix('.') {
            Some(stripped) => stripped.to_string(),
            None => normalized,
        }
    }

    /// Look up a fresh entry, evicting it if the TTL has elapsed
    pub async fn get(&self, domain: &str) -> Option<DomainResearchResult> {
        let key = Self::normalize_key(domain);
        let now = self.clock.now_ms();
        let mut entries = self.entries.lock().await;

        match entries.get(&key) {
            Some(entry) if now.saturating_sub(entry.stored_at_ms) < self.ttl_ms() => {
                debug!(domain = %key, "cache hit");
                Some(entry.data.clone())
            }
            Some(_) => {
                debug!(domain = %key, "cache entry expired, evicting");
                entries.remove(&key);
                None
            }
            None => {
                debug!(domain = %key, "cache miss");
                None
            }
        }
    }

    /// Store a report under the domain's key.
    ///
    /// The stored copy has `cached = true` baked in so future hits are
    /// returned as-is.
    pub async fn insert(&self, domain: &str, mut data: DomainResearchResult) {
        let key = Self::normalize_key(domain);
        data.cached = true;

        let entry = CacheEntry {
            data,
            stored_at_ms: self.clock.now_ms(),
        };

        self.entries.lock().await.insert(key, entry);
    }

    /// Number of live entries (expired-but-unevicted entries count)
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Returns true if the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    fn ttl_ms(&self) -> u64 {
        u64::try_from(self.ttl.as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::atomic::{AtomicU64, Ordering};

    struct ManualClock(AtomicU64);

    impl ManualClock {
        fn advance(&self, ms: u64) {
            self.0.fetch_add(ms, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> u64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn report(domain: &str) -> DomainResearchResult {
        DomainResearchResult {
            domain: domain.to_string(),
            whois: None,
            security: None,
            dns: None,
            abuse: None,
            errors: Vec::new(),
            timestamp: Utc::now(),
            cached: false,
        }
    }

    #[tokio::test]
    async fn test_hit_within_ttl_has_cached_flag() {
        let clock = Arc::new(ManualClock(AtomicU64::new(0)));
        let cache = ResearchCache::new(Duration::from_secs(3600), clock.clone());

        cache.insert("example.com", report("example.com")).await;
        clock.advance(3_599_999);

        let hit = cache.get("example.com").await.expect("entry should be live");
        assert!(hit.cached);
    }

    #[tokio::test]
    async fn test_expired_entry_is_evicted_on_read() {
        let clock = Arc::new(ManualClock(AtomicU64::new(0)));
        let cache = ResearchCache::new(Duration::from_secs(3600), clock.clone());

        cache.insert("example.com", report("example.com")).await;
        clock.advance(3_600_000);

        assert!(cache.get("example.com").await.is_none());
        assert!(cache.is_empty().await, "expired entry must be removed");
    }

    #[tokio::test]
    async fn test_key_normalization() {
        let cache = ResearchCache::with_system_clock(Duration::from_secs(3600));

        cache.insert("Example.COM.", report("example.com")).await;
        assert!(cache.get("example.com").await.is_some());
        assert_eq!(cache.len().await, 1);
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(ResearchCache::normalize_key(" Example.COM. "), "example.com");
        assert_eq!(ResearchCache::normalize_key("example.com"), "example.com");
    }
}
