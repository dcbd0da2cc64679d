//! Test utilities and module declarations for storage tests.

use carpatlas_core::{Coordinates, LocationType, NewLocation, ReportRecord, Season, TripType};

use crate::MemoryStorage;

pub fn create_test_storage() -> MemoryStorage {
    MemoryStorage::new()
}

pub fn new_location(name: &str, location_type: Option<LocationType>) -> NewLocation {
    NewLocation {
        canonical_name: name.to_owned(),
        coordinates: None,
        elevation: None,
        location_type,
        description: None,
    }
}

pub fn new_location_at(name: &str, location_type: LocationType, lat: f64, lon: f64) -> NewLocation {
    NewLocation {
        coordinates: Some(Coordinates::new(lat, lon)),
        ..new_location(name, Some(location_type))
    }
}

pub fn report_record(title: &str) -> ReportRecord {
    ReportRecord {
        title: title.to_owned(),
        author: "Іваненко".to_owned(),
        trip_type: TripType::Hiking,
        difficulty: None,
        season: Season::Summer,
        year: 2019,
        url: format!("https://example.org/reports/{title}"),
        file_url: None,
        route_text: Some("с. Кваси - г. Петрос".to_owned()),
    }
}

mod location_tests;
