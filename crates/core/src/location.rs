//! Canonical locations and the source records they are resolved from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::geo::distance_km;

/// Identity of a canonical location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub i64);

impl From<i64> for LocationId {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Place-type classification shared by every source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum LocationType {
    /// City, town or village
    Settlement,
    /// Named elevation point
    Height,
    /// River valley
    Valley,
    MountainPass,
    Mountain,
    /// Tract or other named natural feature
    NatureObject,
    MountainRange,
    /// River or creek
    Stream,
    /// High mountain meadow
    Polonyna,
    Lake,
    /// Road, building, sign or other man-made object
    ArtificialObject,
    /// Spring or well
    DrinkingWaterSource,
    Waterfall,
    /// Water feature without a finer classification
    WaterObject,
}

impl LocationType {
    pub const ALL_VARIANTS: &'static [LocationType] = &[
        LocationType::Settlement,
        LocationType::Height,
        LocationType::Valley,
        LocationType::MountainPass,
        LocationType::Mountain,
        LocationType::NatureObject,
        LocationType::MountainRange,
        LocationType::Stream,
        LocationType::Polonyna,
        LocationType::Lake,
        LocationType::ArtificialObject,
        LocationType::DrinkingWaterSource,
        LocationType::Waterfall,
        LocationType::WaterObject,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Settlement => "settlement",
            Self::Height => "height",
            Self::Valley => "valley",
            Self::MountainPass => "mountain_pass",
            Self::Mountain => "mountain",
            Self::NatureObject => "nature_object",
            Self::MountainRange => "mountain_range",
            Self::Stream => "stream",
            Self::Polonyna => "polonyna",
            Self::Lake => "lake",
            Self::ArtificialObject => "artificial_object",
            Self::DrinkingWaterSource => "drinking_water_source",
            Self::Waterfall => "waterfall",
            Self::WaterObject => "water_object",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL_VARIANTS
            .iter()
            .copied()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| CoreError::InvalidLocationType(s.to_owned()))
    }
}

/// A single WGS-84 point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Builds coordinates only when both halves are present.
    #[must_use]
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Some(Self::new(lat, lon)),
            _ => None,
        }
    }

    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        distance_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// The single deduplicated record representing one physical place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalLocation {
    pub id: LocationId,
    pub canonical_name: String,
    pub coordinates: Option<Coordinates>,
    /// Metres above sea level
    pub elevation: Option<f64>,
    pub location_type: Option<LocationType>,
    pub description: Option<String>,
}

impl CanonicalLocation {
    #[must_use]
    pub const fn has_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }

    #[must_use]
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.trim().is_empty())
    }
}

/// Fields of a location about to be created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLocation {
    pub canonical_name: String,
    pub coordinates: Option<Coordinates>,
    pub elevation: Option<f64>,
    pub location_type: Option<LocationType>,
    pub description: Option<String>,
}

impl NewLocation {
    /// Attaches the identity assigned by storage.
    #[must_use]
    pub fn into_canonical(self, id: LocationId) -> CanonicalLocation {
        CanonicalLocation {
            id,
            canonical_name: self.canonical_name,
            coordinates: self.coordinates,
            elevation: self.elevation,
            location_type: self.location_type,
            description: self.description,
        }
    }
}

/// A place record emitted by a source adapter. Consumed once by the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub elevation: Option<f64>,
    #[serde(default)]
    pub location_type: Option<LocationType>,
    #[serde(default)]
    pub description: Option<String>,
}

impl LocationRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, location_type: Option<LocationType>) -> Self {
        Self {
            name: name.into(),
            alternate_names: Vec::new(),
            coordinates: None,
            elevation: None,
            location_type,
            description: None,
        }
    }

    #[must_use]
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some(Coordinates::new(latitude, longitude));
        self
    }

    #[must_use]
    pub fn with_alternate_names(mut self, names: Vec<String>) -> Self {
        self.alternate_names = names;
        self
    }

    #[must_use]
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Canonical name followed by every distinct non-empty alternate name.
    #[must_use]
    pub fn alias_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.alternate_names.len().saturating_add(1));
        for name in std::iter::once(&self.name).chain(self.alternate_names.iter()) {
            let name = name.trim();
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_owned());
            }
        }
        names
    }

    #[must_use]
    pub fn to_new_location(&self) -> NewLocation {
        NewLocation {
            canonical_name: self.name.trim().to_owned(),
            coordinates: self.coordinates,
            elevation: self.elevation,
            location_type: self.location_type,
            description: self.description.clone().filter(|d| !d.trim().is_empty()),
        }
    }
}
