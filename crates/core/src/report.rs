//! Trip reports, their routes and per-location difficulty records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::difficulty::LocationDifficulty;
use crate::error::CoreError;
use crate::location::LocationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub i64);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Cycling,
    Mountaineering,
    Ski,
    Hiking,
}

impl TripType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Cycling => "cycling",
            Self::Mountaineering => "mountaineering",
            Self::Ski => "ski",
            Self::Hiking => "hiking",
        }
    }
}

impl FromStr for TripType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cycling" => Ok(Self::Cycling),
            "mountaineering" => Ok(Self::Mountaineering),
            "ski" => Ok(Self::Ski),
            "hiking" => Ok(Self::Hiking),
            other => Err(CoreError::InvalidTripType(other.to_owned())),
        }
    }
}

/// Overall category of a whole trip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TripDifficulty {
    NonCategorized,
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
}

impl TripDifficulty {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::NonCategorized => "non_categorized",
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Fifth => "fifth",
            Self::Sixth => "sixth",
        }
    }
}

impl FromStr for TripDifficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "non_categorized" => Ok(Self::NonCategorized),
            "first" => Ok(Self::First),
            "second" => Ok(Self::Second),
            "third" => Ok(Self::Third),
            "fourth" => Ok(Self::Fourth),
            "fifth" => Ok(Self::Fifth),
            "sixth" => Ok(Self::Sixth),
            other => Err(CoreError::InvalidTripDifficulty(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
        }
    }
}

impl FromStr for Season {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "winter" => Ok(Self::Winter),
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "autumn" => Ok(Self::Autumn),
            other => Err(CoreError::InvalidSeason(other.to_owned())),
        }
    }
}

/// A trip report emitted by a source adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub title: String,
    pub author: String,
    pub trip_type: TripType,
    #[serde(default)]
    pub difficulty: Option<TripDifficulty>,
    pub season: Season,
    pub year: i32,
    pub url: String,
    #[serde(default)]
    pub file_url: Option<String>,
    /// Raw route description, absent when the adapter found none on the page.
    #[serde(default)]
    pub route_text: Option<String>,
}

impl ReportRecord {
    #[must_use]
    pub fn key(&self) -> ReportKey {
        ReportKey {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year,
            url: self.url.clone(),
        }
    }
}

/// Fields identifying an already-ingested report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportKey {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub url: String,
}

/// Persisted form of a [`ReportRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub title: String,
    pub author: String,
    pub trip_type: TripType,
    pub difficulty: Option<TripDifficulty>,
    pub season: Season,
    pub year: i32,
    pub url: String,
    pub file_url: Option<String>,
    pub route_id: RouteId,
    pub created_at: DateTime<Utc>,
}

/// One stop of a persisted route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStop {
    pub route_id: RouteId,
    pub stop_index: u32,
    pub location_id: LocationId,
    pub display_name: Option<String>,
}

/// Difficulty observed for a location in one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDifficultyRecord {
    pub location_id: LocationId,
    pub difficulty: LocationDifficulty,
    pub season: Season,
    pub report_id: ReportId,
}
