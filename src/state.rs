use crate::config::Config;
use crate::types::report::Report;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    reports: Arc<DashMap<String, CachedReport>>,
}

struct CachedReport {
    report: Report,
    inserted_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            reports: Arc::new(DashMap::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn insert(&self, report: Report) {
        self.reports.insert(
            report.report_id.clone(),
            CachedReport {
                report,
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn get(&self, report_id: &str) -> Option<Report> {
        self.reports.get(report_id).map(|entry| entry.report.clone())
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn evict_expired(&self, ttl: Duration) {
        let now = Instant::now();
        self.reports.retain(|_, cached| {
            now.duration_since(cached.inserted_at) < ttl
        });
        tracing::info!("Report eviction complete. Current size: {}", self.reports.len());
    }
}
