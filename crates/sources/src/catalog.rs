//! Trail-catalog point classification.
//!
//! Catalog points carry a free-text category. Water objects are refined by a
//! keyword in the point's name, and the keyword is dropped from the name.

use std::ops::Range;

use carpatlas_core::{Coordinates, LocationRecord, LocationType};
use serde::Deserialize;

const WATER_OBJECT: &str = "Водний об'єкт";

/// Checked in order; the first keyword found wins.
const WATER_KEYWORDS: &[(&str, LocationType)] = &[
    ("озеро", LocationType::Lake),
    ("ріка", LocationType::Stream),
    ("річка", LocationType::Stream),
    ("річечька", LocationType::Stream),
    ("струмок", LocationType::Stream),
    ("гук", LocationType::Waterfall),
    ("вдсп.", LocationType::Waterfall),
    ("водопад", LocationType::Waterfall),
    ("водоспад", LocationType::Waterfall),
];

/// One point as exported from the trail catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub elevation: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CatalogEntry {
    #[must_use]
    pub fn into_record(self) -> LocationRecord {
        let (name, location_type) = classify(&self.category, &self.name);
        LocationRecord {
            name,
            alternate_names: Vec::new(),
            coordinates: Coordinates::from_parts(self.latitude, self.longitude),
            elevation: self.elevation,
            location_type,
            description: self.description.filter(|d| !d.trim().is_empty()),
        }
    }
}

/// Map a catalog category (and, for water objects, the name) to a type.
///
/// Returns the cleaned name alongside the type.
#[must_use]
pub fn classify(category: &str, name: &str) -> (String, Option<LocationType>) {
    let location_type = match category.trim() {
        "Вершина гори" => Some(LocationType::Mountain),
        "Полонина" => Some(LocationType::Polonyna),
        "Орієнтир/Вказівник" | "Туристична Будівля" | "Рятувальники/Служби" => {
            Some(LocationType::ArtificialObject)
        },
        "Джерело/Криниця" => Some(LocationType::DrinkingWaterSource),
        WATER_OBJECT => return classify_water(name),
        _ => None,
    };
    (name.trim().to_owned(), location_type)
}

fn classify_water(name: &str) -> (String, Option<LocationType>) {
    for (keyword, location_type) in WATER_KEYWORDS {
        if let Some(found) = find_ignore_case(name, keyword) {
            let cleaned = format!("{}{}", &name[..found.start], &name[found.end..]);
            let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
            let cleaned = if cleaned.is_empty() { name.trim().to_owned() } else { cleaned };
            return (cleaned, Some(*location_type));
        }
    }
    (name.trim().to_owned(), Some(LocationType::WaterObject))
}

/// Byte range of the first case-insensitive occurrence of a lowercase `needle`.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    haystack.char_indices().find_map(|(start, _)| {
        let mut rest = haystack[start..].char_indices();
        let mut end = start;
        for expected in needle.chars() {
            let (offset, c) = rest.next()?;
            if !c.to_lowercase().eq(expected.to_lowercase()) {
                return None;
            }
            end = start + offset + c.len_utf8();
        }
        Some(start..end)
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "test code")]

    use super::*;

    #[test]
    fn plain_categories() {
        assert_eq!(classify("Вершина гори", "Піп Іван"), ("Піп Іван".to_owned(), Some(LocationType::Mountain)));
        assert_eq!(classify("Полонина", "Пожижевська").1, Some(LocationType::Polonyna));
        assert_eq!(classify("Туристична Будівля", "Притулок").1, Some(LocationType::ArtificialObject));
        assert_eq!(classify(" Джерело/Криниця", "Криниця").1, Some(LocationType::DrinkingWaterSource));
        assert_eq!(classify("Інше", "Щось"), ("Щось".to_owned(), None));
    }

    #[test]
    fn water_keyword_refines_type_and_is_removed() {
        assert_eq!(
            classify(WATER_OBJECT, "Озеро Несамовите"),
            ("Несамовите".to_owned(), Some(LocationType::Lake))
        );
        assert_eq!(
            classify(WATER_OBJECT, "Шипіт водоспад"),
            ("Шипіт".to_owned(), Some(LocationType::Waterfall))
        );
        assert_eq!(
            classify(WATER_OBJECT, "Гук Женецький"),
            ("Женецький".to_owned(), Some(LocationType::Waterfall))
        );
        assert_eq!(
            classify(WATER_OBJECT, "річка Прут"),
            ("Прут".to_owned(), Some(LocationType::Stream))
        );
    }

    #[test]
    fn water_object_without_keyword() {
        assert_eq!(classify(WATER_OBJECT, "Марічейка"), ("Марічейка".to_owned(), Some(LocationType::WaterObject)));
    }

    #[test]
    fn bare_keyword_keeps_its_name() {
        assert_eq!(classify(WATER_OBJECT, "Озеро"), ("Озеро".to_owned(), Some(LocationType::Lake)));
    }

    #[test]
    fn entry_becomes_record() {
        let entry: CatalogEntry = serde_json::from_str(
            r#"{"name": "Озеро Бребенескул", "category": "Водний об'єкт", "latitude": 48.1, "longitude": 24.56, "description": " "}"#,
        )
        .unwrap();
        let record = entry.into_record();
        assert_eq!(record.name, "Бребенескул");
        assert_eq!(record.location_type, Some(LocationType::Lake));
        assert!(record.coordinates.is_some());
        assert_eq!(record.description, None);
    }
}
