use std::sync::Arc;

use carpatlas_core::{parse_route, LocationDifficulty, LocationId, Report, ReportRecord};
use carpatlas_storage::traits::ReportStore;
use carpatlas_storage::{StorageBackend, StorageError};
use serde::Serialize;

use crate::route_service::{ResolvedRoute, RouteService};
use crate::ServiceError;

/// What happened to one [`ReportRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum IngestOutcome {
    Ingested {
        report: Report,
        route: ResolvedRoute,
        difficulty_records: usize,
    },
    /// A report with the same title, author, year and url is already stored.
    AlreadyIngested,
}

pub struct ReportService {
    storage: Arc<StorageBackend>,
    routes: RouteService,
}

impl ReportService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>, routes: RouteService) -> Self {
        Self { storage, routes }
    }

    /// Parse the report's route, resolve and store it, then store the report and
    /// a difficulty record for every stop that carried a grade.
    pub async fn ingest(&self, record: &ReportRecord) -> Result<IngestOutcome, ServiceError> {
        if self.storage.report_exists(&record.key()).await? {
            return Ok(IngestOutcome::AlreadyIngested);
        }

        let route_text = record
            .route_text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ServiceError::MissingRoute {
                title: record.title.clone(),
                url: record.url.clone(),
            })?;
        let stops = parse_route(route_text)?;
        let route = self.routes.store_route(&stops).await?;

        let grades: Vec<(LocationId, LocationDifficulty)> = stops
            .iter()
            .zip(&route.stops)
            .filter_map(|(stop, resolved)| stop.difficulty.map(|d| (resolved.location_id, d)))
            .collect();

        let report = match self.storage.create_report(record, route.route_id, &grades).await {
            Ok(report) => report,
            // lost a race with a concurrent copy of the same report
            Err(StorageError::Duplicate(_)) => return Ok(IngestOutcome::AlreadyIngested),
            Err(e) => return Err(e.into()),
        };

        let difficulty_records = grades.len();

        tracing::debug!(
            report_id = %report.id,
            title = %report.title,
            stops = route.stops.len(),
            difficulty_records,
            "ingested report"
        );
        Ok(IngestOutcome::Ingested { report, route, difficulty_records })
    }
}
