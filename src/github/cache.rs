use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Response-body cache keyed by request URL. Entries stay fresh for the
/// configured TTL; a stale entry is simply ignored and overwritten by the next
/// successful fetch. Sits below the aggregation, so everything computed from
/// the cached bodies still runs per request.
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

struct CacheEntry {
    body: String,
    stored_at: Instant,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        let entry = entries.get(key)?;
        if entry.stored_at.elapsed() < self.ttl {
            tracing::debug!("Cache hit: {}", key);
            Some(entry.body.clone())
        } else {
            None
        }
    }

    pub fn put(&self, key: &str, body: String) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key.to_string(),
            CacheEntry {
                body,
                stored_at: Instant::now(),
            },
        );
    }
}
