use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// In-memory response bodies keyed by URL, each served for at most `ttl`.
#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CachedBody>>,
}

#[derive(Debug)]
struct CachedBody {
    stored_at: Instant,
    bytes: Vec<u8>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Returns a fresh body for `url`, evicting it if it has gone stale.
    pub fn get(&self, url: &str) -> Option<Vec<u8>> {
        self.get_at(url, Instant::now())
    }

    pub fn insert(&self, url: &str, bytes: Vec<u8>) {
        self.insert_at(url, bytes, Instant::now());
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_at(&self, url: &str, now: Instant) -> Option<Vec<u8>> {
        if !self.is_enabled() {
            return None;
        }
        let mut entries = self.lock();
        let fresh = entries
            .get(url)
            .map(|entry| now.saturating_duration_since(entry.stored_at) < self.ttl)?;
        if fresh {
            entries.get(url).map(|entry| entry.bytes.clone())
        } else {
            entries.remove(url);
            None
        }
    }

    fn insert_at(&self, url: &str, bytes: Vec<u8>, now: Instant) {
        if !self.is_enabled() {
            return;
        }
        self.lock().insert(
            url.to_string(),
            CachedBody {
                stored_at: now,
                bytes,
            },
        );
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CachedBody>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
