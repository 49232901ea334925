use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::api::ApiError;

/// Identity of a backend request: path plus query parameters.
///
/// Parameters are sorted on construction so that key equality does not
/// depend on the order the caller listed them in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    path: String,
    params: Vec<(String, String)>,
}

impl CacheKey {
    pub(crate) fn new(path: &str, params: &[(String, String)]) -> Self {
        let mut params = params.to_vec();
        params.sort();
        Self {
            path: path.to_string(),
            params,
        }
    }
}

struct CacheEntry {
    outcome: Result<Value, ApiError>,
    stored_at: Instant,
}

/// Short-lived memoization of request outcomes, keyed by request identity.
///
/// Entries expire passively: freshness is checked when an entry is read,
/// and stale entries are simply ignored. The single-threaded render model
/// means no locking is needed.
pub struct ResponseCache {
    ttl: Duration,
    entries: HashMap<CacheKey, CacheEntry>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub(crate) fn lookup(&self, key: &CacheKey) -> Option<Result<Value, ApiError>> {
        self.lookup_at(key, Instant::now())
    }

    fn lookup_at(&self, key: &CacheKey, now: Instant) -> Option<Result<Value, ApiError>> {
        let entry = self.entries.get(key)?;
        if now.duration_since(entry.stored_at) >= self.ttl {
            return None;
        }
        Some(entry.outcome.clone())
    }

    pub(crate) fn store(&mut self, key: CacheKey, outcome: Result<Value, ApiError>) {
        self.store_at(key, outcome, Instant::now());
    }

    fn store_at(&mut self, key: CacheKey, outcome: Result<Value, ApiError>, at: Instant) {
        self.entries.insert(
            key,
            CacheEntry {
                outcome,
                stored_at: at,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(path: &str) -> CacheKey {
        CacheKey::new(path, &[])
    }

    #[test]
    fn params_order_does_not_change_identity() {
        let a = CacheKey::new(
            "/home",
            &[
                ("category".into(), "trending".into()),
                ("limit".into(), "24".into()),
            ],
        );
        let b = CacheKey::new(
            "/home",
            &[
                ("limit".into(), "24".into()),
                ("category".into(), "trending".into()),
            ],
        );
        assert_eq!(a, b);
    }

    #[test]
    fn fresh_entry_is_returned() {
        let mut cache = ResponseCache::new(Duration::from_secs(30));
        let t0 = Instant::now();
        cache.store_at(key("/home"), Ok(json!({"a": 1})), t0);

        let hit = cache.lookup_at(&key("/home"), t0 + Duration::from_secs(29));
        assert_eq!(hit, Some(Ok(json!({"a": 1}))));
    }

    #[test]
    fn entry_expires_exactly_at_ttl() {
        let mut cache = ResponseCache::new(Duration::from_secs(30));
        let t0 = Instant::now();
        cache.store_at(key("/home"), Ok(json!(1)), t0);

        assert!(cache.lookup_at(&key("/home"), t0 + Duration::from_secs(30)).is_none());
    }

    #[test]
    fn error_outcomes_are_cached_too() {
        let mut cache = ResponseCache::new(Duration::from_secs(30));
        let t0 = Instant::now();
        cache.store_at(key("/home"), Err(ApiError::http(500, "boom")), t0);

        let hit = cache.lookup_at(&key("/home"), t0 + Duration::from_secs(1));
        assert_eq!(hit, Some(Err(ApiError::http(500, "boom"))));
    }

    #[test]
    fn unknown_key_misses() {
        let cache = ResponseCache::new(Duration::from_secs(30));
        assert!(cache.lookup(&key("/nope")).is_none());
    }
}
