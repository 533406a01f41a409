use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Run-scoped outcome counters.
///
/// One instance per session, shared by reference with every task. Counters
/// only ever go up.
#[derive(Debug, Default)]
pub struct SessionMetrics {
    valid_records: AtomicU64,
    search_results: AtomicU64,
    books_added: AtomicU64,
    errors: AtomicU64,
}

/// Plain copy of the counters for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub valid_records: u64,
    pub search_results: u64,
    pub books_added: u64,
    pub errors: u64,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_valid(&self, n: u64) {
        self.valid_records.fetch_add(n, Ordering::Relaxed);
    }

    pub fn record_search_results(&self, n: u64) {
        self.search_results.fetch_add(n, Ordering::Relaxed);
    }

    pub fn record_added(&self) {
        self.books_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            valid_records: self.valid_records.load(Ordering::Relaxed),
            search_results: self.search_results.load(Ordering::Relaxed),
            books_added: self.books_added.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}
