//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p carpatlas-storage -- --ignored pg_

#![allow(clippy::unwrap_used, reason = "integration test code")]

use carpatlas_core::{
    Coordinates, LocationDifficulty, LocationDifficultyRecord, LocationId, LocationType, NewLocation,
    ReportRecord, RouteStop, Season, TripDifficulty, TripType,
};
use carpatlas_storage::traits::{LocationStore, NameIndex, ReportStore, RouteStore};
use carpatlas_storage::{PgStorage, StorageError};
use uuid::Uuid;

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

fn unique_name() -> String {
    format!("test-{}", Uuid::new_v4())
}

fn make_location(name: &str) -> NewLocation {
    NewLocation {
        canonical_name: name.to_owned(),
        coordinates: Some(Coordinates::new(48.16, 24.5)),
        elevation: Some(2061.0),
        location_type: Some(LocationType::Mountain),
        description: None,
    }
}

fn make_report(title: &str) -> ReportRecord {
    ReportRecord {
        title: title.to_owned(),
        author: "Integration".to_owned(),
        trip_type: TripType::Mountaineering,
        difficulty: Some(TripDifficulty::Second),
        season: Season::Winter,
        year: 2021,
        url: format!("https://example.org/{title}"),
        file_url: None,
        route_text: None,
    }
}

#[tokio::test]
#[ignore]
async fn pg_location_round_trip() {
    let storage = create_pg_storage().await;
    let name = unique_name();

    let created = storage.create_location(&make_location(&name), &[]).await.unwrap();
    let fetched = storage.get_location(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.location_type, Some(LocationType::Mountain));
}

#[tokio::test]
#[ignore]
async fn pg_register_alias_is_idempotent() {
    let storage = create_pg_storage().await;
    let name = unique_name();
    let loc = storage.create_location(&make_location(&name), &[]).await.unwrap();

    assert!(storage.register_alias(&name, loc.id).await.unwrap());
    assert!(!storage.register_alias(&name, loc.id).await.unwrap());

    let found = storage.locations_by_name(&name).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, loc.id);
}

#[tokio::test]
#[ignore]
async fn pg_description_update() {
    let storage = create_pg_storage().await;
    let loc = storage.create_location(&make_location(&unique_name()), &[]).await.unwrap();

    storage.update_location_description(loc.id, "updated").await.unwrap();
    let fetched = storage.get_location(loc.id).await.unwrap().unwrap();
    assert_eq!(fetched.description.as_deref(), Some("updated"));
}

#[tokio::test]
#[ignore]
async fn pg_route_stops_are_ordered_and_unique() {
    let storage = create_pg_storage().await;
    let loc = storage.create_location(&make_location(&unique_name()), &[]).await.unwrap();
    let route = storage.create_route().await.unwrap();

    for index in [2_u32, 0, 1] {
        let stop = RouteStop { route_id: route, stop_index: index, location_id: loc.id, display_name: None };
        storage.append_route_stop(&stop).await.unwrap();
    }
    let indices: Vec<u32> =
        storage.get_route_stops(route).await.unwrap().iter().map(|s| s.stop_index).collect();
    assert_eq!(indices, vec![0, 1, 2]);

    let dup = RouteStop { route_id: route, stop_index: 1, location_id: loc.id, display_name: None };
    let err = storage.append_route_stop(&dup).await.unwrap_err();
    assert!(matches!(err, StorageError::Duplicate(_)));
}

#[tokio::test]
#[ignore]
async fn pg_report_and_difficulty() {
    let storage = create_pg_storage().await;
    let record = make_report(&unique_name());
    let loc = storage.create_location(&make_location(&unique_name()), &[]).await.unwrap();
    let route = storage.create_route().await.unwrap();

    assert!(!storage.report_exists(&record.key()).await.unwrap());
    let report = storage
        .create_report(&record, route, &[(loc.id, LocationDifficulty::SecondAStar)])
        .await
        .unwrap();
    assert!(storage.report_exists(&record.key()).await.unwrap());
    assert_eq!(report.difficulty, Some(TripDifficulty::Second));

    let expected = LocationDifficultyRecord {
        location_id: loc.id,
        difficulty: LocationDifficulty::SecondAStar,
        season: record.season,
        report_id: report.id,
    };
    assert_eq!(storage.difficulties_for_location(loc.id).await.unwrap(), vec![expected]);

    let err = storage.create_report(&record, route, &[]).await.unwrap_err();
    assert!(matches!(err, StorageError::Duplicate(_)));
}

#[tokio::test]
#[ignore]
async fn pg_report_with_bad_grade_is_rolled_back() {
    let storage = create_pg_storage().await;
    let record = make_report(&unique_name());
    let route = storage.create_route().await.unwrap();

    let err = storage
        .create_report(&record, route, &[(LocationId(i64::MAX), LocationDifficulty::FirstA)])
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::NotFound { .. }));
    assert!(!storage.report_exists(&record.key()).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn pg_location_with_blank_alias_is_rolled_back() {
    let storage = create_pg_storage().await;
    let name = unique_name();

    let err = storage
        .create_location(&make_location(&name), &[name.clone(), " ".to_owned()])
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Constraint(_)));
    assert!(storage.locations_by_name(&name).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn pg_alias_for_missing_location_is_not_found() {
    let storage = create_pg_storage().await;
    let err = storage.register_alias(&unique_name(), LocationId(i64::MAX)).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}
