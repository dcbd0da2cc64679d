//! Ukrainian labels used by the trip-report archive.

use carpatlas_core::{CoreError, ReportRecord, Season, TripDifficulty, TripType};
use serde::Deserialize;

pub fn trip_type_from_label(label: &str) -> Result<TripType, CoreError> {
    match label.trim() {
        "Велотуризм" => Ok(TripType::Cycling),
        "Гірський туризм" => Ok(TripType::Mountaineering),
        "Лижний туризм" => Ok(TripType::Ski),
        "Пішохідний туризм" => Ok(TripType::Hiking),
        other => Err(CoreError::InvalidTripType(other.to_owned())),
    }
}

pub fn season_from_label(label: &str) -> Result<Season, CoreError> {
    match label.trim() {
        "Зима" => Ok(Season::Winter),
        "Весна" => Ok(Season::Spring),
        "Літо" => Ok(Season::Summer),
        "Осінь" => Ok(Season::Autumn),
        other => Err(CoreError::InvalidSeason(other.to_owned())),
    }
}

/// `н/к` or `N к.с.` with N in 1..=6.
pub fn trip_difficulty_from_label(label: &str) -> Result<TripDifficulty, CoreError> {
    let label = label.trim();
    if label == "н/к" {
        return Ok(TripDifficulty::NonCategorized);
    }
    let grade = label.strip_suffix("к.с.").map(str::trim);
    match grade {
        Some("1") => Ok(TripDifficulty::First),
        Some("2") => Ok(TripDifficulty::Second),
        Some("3") => Ok(TripDifficulty::Third),
        Some("4") => Ok(TripDifficulty::Fourth),
        Some("5") => Ok(TripDifficulty::Fifth),
        Some("6") => Ok(TripDifficulty::Sixth),
        _ => Err(CoreError::InvalidTripDifficulty(label.to_owned())),
    }
}

/// A report as listed by the archive, before its labels are mapped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportListing {
    pub title: String,
    pub author: String,
    pub trip_type: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    pub season: String,
    pub year: i32,
    pub url: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub route_text: Option<String>,
}

impl ReportListing {
    /// A blank difficulty label means the archive did not grade the trip.
    pub fn into_record(self) -> Result<ReportRecord, CoreError> {
        let difficulty = match self.difficulty.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(label) => Some(trip_difficulty_from_label(label)?),
        };
        Ok(ReportRecord {
            trip_type: trip_type_from_label(&self.trip_type)?,
            season: season_from_label(&self.season)?,
            difficulty,
            title: self.title,
            author: self.author,
            year: self.year,
            url: self.url,
            file_url: self.file_url,
            route_text: self.route_text,
        })
    }
}
