//! Batch entry points over materialized source records.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use carpatlas_core::constants::PROGRESS_LOG_INTERVAL;
use carpatlas_core::{LocationRecord, MatchPolicy, ReportRecord};
use carpatlas_storage::StorageBackend;
use futures_util::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};

use crate::location_service::{LocationService, Resolution};
use crate::report_service::{IngestOutcome, ReportService};
use crate::route_service::RouteService;
use crate::{NameLocks, ServiceError};

/// Counters of the run in flight.
#[derive(Debug, Default)]
struct Progress {
    processed: AtomicU64,
    created: AtomicU64,
    matched: AtomicU64,
    skipped: AtomicU64,
    failed: AtomicU64,
}

impl Progress {
    fn reset(&self) {
        for counter in [&self.processed, &self.created, &self.matched, &self.skipped, &self.failed] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            processed: self.processed.load(Ordering::Relaxed),
            created: self.created.load(Ordering::Relaxed),
            matched: self.matched.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub processed: u64,
    pub created: u64,
    pub matched: u64,
    pub skipped: u64,
    pub failed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrapeKind {
    Locations,
    Reports,
}

/// Totals of one finished scrape run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeSummary {
    pub kind: ScrapeKind,
    #[serde(flatten)]
    pub counts: ProgressSnapshot,
    pub elapsed_ms: u64,
}

enum Outcome {
    Created,
    Matched,
    Skipped,
    Failed,
}

pub struct ScrapeService {
    locations: LocationService,
    reports: ReportService,
    concurrency: usize,
    progress: Progress,
}

impl ScrapeService {
    /// `concurrency` is the number of records resolved at once; 0 is treated as 1.
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>, policy: MatchPolicy, concurrency: usize) -> Self {
        let locks = Arc::new(NameLocks::new());
        let routes = RouteService::new(Arc::clone(&storage), Arc::clone(&locks), policy);
        Self {
            locations: LocationService::new(Arc::clone(&storage), locks, policy),
            reports: ReportService::new(storage, routes),
            concurrency: concurrency.max(1),
            progress: Progress::default(),
        }
    }

    #[must_use]
    pub fn location_service(&self) -> &LocationService {
        &self.locations
    }

    /// Counters of the current (or last finished) run.
    #[must_use]
    pub fn progress(&self) -> ProgressSnapshot {
        self.progress.snapshot()
    }

    /// Resolve every location record. Per-record failures are logged and counted.
    pub async fn scrape_locations<I>(&self, records: I) -> ScrapeSummary
    where
        I: IntoIterator<Item = LocationRecord>,
    {
        self.run(ScrapeKind::Locations, records, |record| async move {
            match self.locations.resolve(&record).await {
                Ok(Resolution::Created(_)) => Outcome::Created,
                Ok(Resolution::Matched(_)) => Outcome::Matched,
                Err(e) => {
                    tracing::warn!(name = %record.name, error = %e, "failed to resolve location record");
                    Outcome::Failed
                },
            }
        })
        .await
    }

    /// Ingest every report record. Already stored reports are skipped.
    pub async fn scrape_reports<I>(&self, records: I) -> ScrapeSummary
    where
        I: IntoIterator<Item = ReportRecord>,
    {
        self.run(ScrapeKind::Reports, records, |record| async move {
            match self.reports.ingest(&record).await {
                Ok(IngestOutcome::Ingested { .. }) => Outcome::Created,
                Ok(IngestOutcome::AlreadyIngested) => {
                    tracing::debug!(title = %record.title, url = %record.url, "report already ingested");
                    Outcome::Skipped
                },
                Err(e) => {
                    log_report_failure(&record, &e);
                    Outcome::Failed
                },
            }
        })
        .await
    }

    async fn run<T, I, F, Fut>(&self, kind: ScrapeKind, records: I, process: F) -> ScrapeSummary
    where
        I: IntoIterator<Item = T>,
        F: Fn(T) -> Fut,
        Fut: Future<Output = Outcome>,
    {
        self.progress.reset();
        let started = Instant::now();
        tracing::info!(?kind, concurrency = self.concurrency, "scrape started");

        stream::iter(records)
            .map(process)
            .buffer_unordered(self.concurrency)
            .for_each(|outcome| async move { self.record(kind, outcome) })
            .await;

        let summary = ScrapeSummary {
            kind,
            counts: self.progress.snapshot(),
            elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        tracing::info!(
            ?kind,
            processed = summary.counts.processed,
            created = summary.counts.created,
            matched = summary.counts.matched,
            skipped = summary.counts.skipped,
            failed = summary.counts.failed,
            elapsed_ms = summary.elapsed_ms,
            "scrape finished"
        );
        summary
    }

    fn record(&self, kind: ScrapeKind, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Created => &self.progress.created,
            Outcome::Matched => &self.progress.matched,
            Outcome::Skipped => &self.progress.skipped,
            Outcome::Failed => &self.progress.failed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        let processed = self.progress.processed.fetch_add(1, Ordering::Relaxed).saturating_add(1);
        if processed % PROGRESS_LOG_INTERVAL == 0 {
            let snapshot = self.progress.snapshot();
            tracing::info!(
                ?kind,
                processed,
                created = snapshot.created,
                matched = snapshot.matched,
                skipped = snapshot.skipped,
                failed = snapshot.failed,
                "scrape progress"
            );
        }
    }
}

fn log_report_failure(record: &ReportRecord, error: &ServiceError) {
    if error.is_record_error() {
        tracing::warn!(title = %record.title, url = %record.url, error = %error, "skipping report");
    } else {
        tracing::warn!(title = %record.title, url = %record.url, error = %error, "failed to ingest report");
    }
}
