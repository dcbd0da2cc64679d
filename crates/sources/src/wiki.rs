//! Encyclopedia article classification.
//!
//! Articles are exported one per line with the category they were listed
//! under. The category decides the location type, and the type decides which
//! disambiguation words are cut from the title.

use std::sync::LazyLock;

use carpatlas_core::{Coordinates, LocationRecord, LocationType};
use regex::Regex;
use serde::Deserialize;

const CATEGORY_PREFIX: &str = "Категорія:";

/// Exact category titles.
const CATEGORIES: &[(&str, LocationType)] = &[
    ("Вершини Карпат", LocationType::Mountain),
    ("Перевали Українських Карпат", LocationType::MountainPass),
    ("Гірські хребти України", LocationType::MountainRange),
];

/// Per-region category titles, matched by prefix.
const REGIONAL_CATEGORIES: &[(&str, LocationType)] = &[
    ("Села ", LocationType::Settlement),
    ("Селища міського типу ", LocationType::Settlement),
    ("Міста ", LocationType::Settlement),
    ("Озера ", LocationType::Lake),
    ("Річки ", LocationType::Stream),
];

#[allow(clippy::unwrap_used, reason = "static regex pattern is covered by tests")]
static DISTRICT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\S+ район\)").unwrap());

/// One article as exported from the encyclopedia.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WikiArticle {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default, alias = "latitude")]
    pub lat: Option<f64>,
    #[serde(default, alias = "longitude")]
    pub lon: Option<f64>,
}

impl WikiArticle {
    /// The article summary becomes the description.
    #[must_use]
    pub fn into_record(self) -> LocationRecord {
        let location_type = category_type(&self.category);
        let name = match location_type {
            Some(location_type) => clean_title(&self.title, location_type),
            None => collapse(&self.title),
        };
        LocationRecord {
            name,
            alternate_names: Vec::new(),
            coordinates: Coordinates::from_parts(self.lat, self.lon),
            elevation: None,
            location_type,
            description: self.extract.filter(|d| !d.trim().is_empty()),
        }
    }
}

/// Location type for a category title, with or without the namespace prefix
/// and with either spaces or underscores.
#[must_use]
pub fn category_type(category: &str) -> Option<LocationType> {
    let category = category.trim();
    let category = category.strip_prefix(CATEGORY_PREFIX).unwrap_or(category).replace('_', " ");
    CATEGORIES
        .iter()
        .find(|(title, _)| *title == category)
        .or_else(|| REGIONAL_CATEGORIES.iter().find(|(prefix, _)| category.starts_with(prefix)))
        .map(|(_, location_type)| *location_type)
}

/// Drop the disambiguation words article titles carry for `location_type`.
#[must_use]
pub fn clean_title(title: &str, location_type: LocationType) -> String {
    let cleaned = match location_type {
        LocationType::Mountain => title.replacen("(гора)", "", 1),
        LocationType::MountainPass => title.replacen("(перевал)", "", 1),
        LocationType::MountainRange => title.replacen("(хребет)", "", 1).replacen("хребет", "", 1),
        LocationType::Settlement => {
            let cleaned =
                title.replacen("(місто)", "", 1).replacen("(смт)", "", 1).replacen("(село)", "", 1);
            DISTRICT.replace(&cleaned, "").into_owned()
        },
        LocationType::Lake => title.replacen("(озеро)", "", 1).replacen("озеро", "", 1),
        LocationType::Stream => {
            title.replacen("(річка)", "", 1).replacen("(струмок)", "", 1).replacen("(потік)", "", 1)
        },
        _ => title.to_owned(),
    };
    let cleaned = collapse(&cleaned);
    if cleaned.is_empty() { collapse(title) } else { cleaned }
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
