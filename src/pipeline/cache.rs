// src/pipeline/cache.rs

//! Time-bounded cache for the computed record.

use std::future::Future;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::models::{CacheConfig, Enriched, WordRecord};

#[derive(Debug, Clone)]
struct CachedRecord {
    record: WordRecord,
    stored_at: Instant,
}

/// Holds the last computed record for a freshness window.
///
/// A record expires when the TTL elapses or the calendar day changes,
/// whichever comes first. The lock is held while computing, so concurrent
/// callers share one upstream round-trip.
#[derive(Debug)]
pub struct DailyCache {
    ttl: Duration,
    cache_fallback: bool,
    slot: Mutex<Option<CachedRecord>>,
}

impl DailyCache {
    pub fn new(ttl: Duration, cache_fallback: bool) -> Self {
        Self {
            ttl,
            cache_fallback,
            slot: Mutex::new(None),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(Duration::from_secs(config.ttl_secs), config.cache_fallback)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached record if it is dated `today` and within the TTL,
    /// otherwise compute and store.
    pub async fn get_or_compute<F, Fut>(&self, today: NaiveDate, compute: F) -> WordRecord
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Enriched>,
    {
        if self.ttl.is_zero() {
            return compute().await.record;
        }

        let mut slot = self.slot.lock().await;
        if let Some(cached) = slot.as_ref() {
            if cached.record.date == today && cached.stored_at.elapsed() < self.ttl {
                log::debug!("Serving cached record for {}", cached.record.date);
                return cached.record.clone();
            }
        }

        let enriched = compute().await;
        if enriched.is_fallback() && !self.cache_fallback {
            *slot = None;
        } else {
            *slot = Some(CachedRecord {
                record: enriched.record.clone(),
                stored_at: Instant::now(),
            });
        }
        enriched.record
    }

    /// Drop any cached record.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }
}
