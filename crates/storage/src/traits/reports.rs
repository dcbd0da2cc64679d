use async_trait::async_trait;
use carpatlas_core::{
    LocationDifficulty, LocationDifficultyRecord, LocationId, Report, ReportKey, ReportRecord, RouteId,
};

use crate::error::StorageError;

/// Trip reports and the per-location difficulty grades they carry.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Whether a report with the same title, author, year and url was already stored.
    async fn report_exists(&self, key: &ReportKey) -> Result<bool, StorageError>;

    /// Persist a report bound to an already created route, with one difficulty
    /// record per graded location filed under the report's season.
    ///
    /// The report and its grades are stored together or not at all.
    async fn create_report(
        &self,
        record: &ReportRecord,
        route_id: RouteId,
        grades: &[(LocationId, LocationDifficulty)],
    ) -> Result<Report, StorageError>;

    async fn difficulties_for_location(
        &self,
        location_id: LocationId,
    ) -> Result<Vec<LocationDifficultyRecord>, StorageError>;
}
