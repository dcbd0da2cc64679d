#![allow(clippy::unwrap_used, reason = "test code")]

use carpatlas_core::{LocationId, LocationType};

use super::{create_test_storage, new_location, new_location_at};
use crate::traits::{LocationStore, NameIndex, StatsStore};
use crate::StorageError;

#[tokio::test]
async fn test_created_location_round_trips() {
    let storage = create_test_storage();
    let mut new = new_location_at("Говерла", LocationType::Mountain, 48.16, 24.5);
    new.elevation = Some(2061.0);

    let created = storage.create_location(&new, &[]).await.unwrap();
    let fetched = storage.get_location(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.canonical_name, "Говерла");
    assert!(fetched.has_coordinates());
    assert_eq!(fetched.elevation, Some(2061.0));
}

#[tokio::test]
async fn test_ids_are_distinct() {
    let storage = create_test_storage();
    let a = storage.create_location(&new_location("А", None), &[]).await.unwrap();
    let b = storage.create_location(&new_location("А", None), &[]).await.unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(storage.get_stats().await.unwrap().location_count, 2);
}

#[tokio::test]
async fn test_missing_location_is_none() {
    let storage = create_test_storage();
    assert!(storage.get_location(LocationId(1)).await.unwrap().is_none());
    assert!(storage.get_location(LocationId(0)).await.unwrap().is_none());
    assert!(storage.get_location(LocationId(-3)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_description_update_is_visible() {
    let storage = create_test_storage();
    let loc = storage.create_location(&new_location("Несамовите", Some(LocationType::Lake)), &[]).await.unwrap();
    assert!(!loc.has_description());

    storage.update_location_description(loc.id, "Високогірне озеро").await.unwrap();

    let fetched = storage.get_location(loc.id).await.unwrap().unwrap();
    assert_eq!(fetched.description.as_deref(), Some("Високогірне озеро"));
}

#[tokio::test]
async fn test_description_update_on_missing_location_fails() {
    let storage = create_test_storage();
    let err = storage.update_location_description(LocationId(9), "x").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { entity: "location", .. }));
}

#[tokio::test]
async fn test_location_is_created_with_its_aliases() {
    let storage = create_test_storage();
    let aliases = vec!["Говерла".to_owned(), "Hoverla".to_owned(), "Говерла".to_owned()];

    let loc = storage.create_location(&new_location("Говерла", None), &aliases).await.unwrap();

    assert_eq!(storage.aliases_for(loc.id).await.unwrap(), vec!["Говерла", "Hoverla"]);
    assert_eq!(storage.locations_by_name("Hoverla").await.unwrap(), vec![loc]);
}

#[tokio::test]
async fn test_rejected_alias_leaves_no_location_behind() {
    let storage = create_test_storage();
    let aliases = vec!["Говерла".to_owned(), "  ".to_owned()];

    let err = storage.create_location(&new_location("Говерла", None), &aliases).await.unwrap_err();

    assert!(matches!(err, StorageError::Constraint(_)));
    let stats = storage.get_stats().await.unwrap();
    assert_eq!(stats.location_count, 0);
    assert_eq!(stats.alias_count, 0);
    assert!(storage.locations_by_name("Говерла").await.unwrap().is_empty());
}
