use chrono::{DateTime, Utc};
use tracing::info;

/// Counters for one upload run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub main_uploaded: usize,
    pub main_missing: usize,
    pub main_failed: usize,
    pub thumbnails_uploaded: usize,
    pub thumbnails_missing: usize,
    pub thumbnails_failed: usize,
}

impl RunReport {
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            main_uploaded: 0,
            main_missing: 0,
            main_failed: 0,
            thumbnails_uploaded: 0,
            thumbnails_missing: 0,
            thumbnails_failed: 0,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn elapsed_ms(&self) -> i64 {
        let end = self.finished_at.unwrap_or_else(Utc::now);
        (end - self.started_at).num_milliseconds()
    }

    pub fn log_summary(&self, products: usize) {
        info!(
            main_uploaded = self.main_uploaded,
            main_missing = self.main_missing,
            main_failed = self.main_failed,
            thumbnails_uploaded = self.thumbnails_uploaded,
            thumbnails_missing = self.thumbnails_missing,
            thumbnails_failed = self.thumbnails_failed,
            elapsed_ms = self.elapsed_ms(),
            "upload complete, {products} products recorded"
        );
    }
}
