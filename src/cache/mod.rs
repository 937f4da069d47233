//! TTL cache collaborator for computed reports.
//!
//! The engine itself is stateless; callers that want to reuse a recent
//! analysis keep it here, keyed by (asset_id, timeframe). Entries expire
//! after the configured TTL and expired reads behave like misses.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::models::report::{AnalysisReport, Timeframe};

struct CacheEntry {
    report: AnalysisReport,
    inserted_at: Instant,
}

/// Thread-safe report cache with a fixed TTL.
pub struct ReportCache {
    entries: Mutex<HashMap<(String, Timeframe), CacheEntry>>,
    ttl: Duration,
}

impl ReportCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Fetch a fresh report; expired entries are evicted on read.
    pub fn get(&self, asset_id: &str, timeframe: Timeframe) -> Option<AnalysisReport> {
        let mut entries = self.entries.lock().expect("report cache lock poisoned");
        let key = (asset_id.to_string(), timeframe);
        match entries.get(&key) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => Some(entry.report.clone()),
            Some(_) => {
                entries.remove(&key);
                None
            }
            None => None,
        }
    }

    /// Store a freshly computed report, replacing any previous one.
    pub fn insert(&self, report: AnalysisReport) {
        let mut entries = self.entries.lock().expect("report cache lock poisoned");
        entries.insert(
            (report.asset_id.clone(), report.timeframe),
            CacheEntry {
                report,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Drop every expired entry.
    pub fn purge_expired(&self) {
        let mut entries = self.entries.lock().expect("report cache lock poisoned");
        entries.retain(|_, entry| entry.inserted_at.elapsed() < self.ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("report cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
