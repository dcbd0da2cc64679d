//! GeoNames country dump (`UA.txt`) reader.
//!
//! Rows are tab separated with 19 columns. Only rows of the four Carpathian
//! oblasts are kept.

use std::path::Path;

use carpatlas_core::{Coordinates, LocationRecord, LocationType};

use crate::error::SourceError;
use crate::lines::RecordReader;

const COLUMNS: usize = 19;

const COL_NAME: usize = 1;
const COL_ALTERNATE_NAMES: usize = 3;
const COL_LATITUDE: usize = 4;
const COL_LONGITUDE: usize = 5;
const COL_FEATURE_CLASS: usize = 6;
const COL_FEATURE_CODE: usize = 7;
const COL_COUNTRY: usize = 8;
const COL_ADMIN1: usize = 10;
const COL_ELEVATION: usize = 15;

const COUNTRY: &str = "UA";

/// Zakarpattia, Ivano-Frankivsk, Lviv and Chernivtsi oblasts.
const CARPATHIAN_ADMIN1: &[&str] = &["25", "06", "15", "03"];

pub fn read_geonames(path: impl AsRef<Path>) -> Result<RecordReader<LocationRecord>, SourceError> {
    RecordReader::open(path.as_ref(), parse_row)
}

/// Parse one dump row. Rows outside the Carpathian oblasts yield `Ok(None)`.
pub fn parse_row(line: &str) -> Result<Option<LocationRecord>, String> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != COLUMNS {
        return Err(format!("expected {COLUMNS} columns, found {}", fields.len()));
    }
    if fields[COL_COUNTRY] != COUNTRY || !CARPATHIAN_ADMIN1.contains(&fields[COL_ADMIN1]) {
        return Ok(None);
    }

    let name = fields[COL_NAME].trim();
    if name.is_empty() {
        return Err("empty name".to_owned());
    }
    let latitude = parse_bounded(fields[COL_LATITUDE], "latitude", 90.0)?;
    let longitude = parse_bounded(fields[COL_LONGITUDE], "longitude", 180.0)?;
    let elevation = match fields[COL_ELEVATION].trim() {
        "" => None,
        raw => Some(parse_f64(raw, "elevation")?),
    };

    Ok(Some(LocationRecord {
        name: name.to_owned(),
        alternate_names: fields[COL_ALTERNATE_NAMES]
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_owned)
            .collect(),
        coordinates: Some(Coordinates::new(latitude, longitude)),
        elevation,
        location_type: feature_type(fields[COL_FEATURE_CLASS], fields[COL_FEATURE_CODE]),
        description: None,
    }))
}

/// Finite values only; `parse` alone accepts `NaN` and `inf`.
fn parse_f64(raw: &str, column: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("invalid {column}: {raw:?}"))
}

fn parse_bounded(raw: &str, column: &str, limit: f64) -> Result<f64, String> {
    let value = parse_f64(raw, column)?;
    if value.abs() > limit {
        return Err(format!("{column} out of range: {value}"));
    }
    Ok(value)
}

/// Feature code wins over feature class.
#[must_use]
pub fn feature_type(class: &str, code: &str) -> Option<LocationType> {
    let by_code = match code {
        "LK" => Some(LocationType::Lake),
        "STM" => Some(LocationType::Stream),
        "MT" | "MTU" => Some(LocationType::Mountain),
        "MTS" => Some(LocationType::MountainRange),
        "PASS" => Some(LocationType::MountainPass),
        _ => None,
    };
    by_code.or(match class {
        "P" => Some(LocationType::Settlement),
        "R" | "S" => Some(LocationType::ArtificialObject),
        "T" | "U" => Some(LocationType::NatureObject),
        "H" => Some(LocationType::WaterObject),
        _ => None,
    })
}
