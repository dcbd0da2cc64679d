//! Route description parsing.
//!
//! Turns a free-text route such as `"с. Кваси - г. Петрос (2020, 1А) - с. Луги"`
//! into ordered [`StopDescriptor`]s carrying the cleaned place name and any
//! type hint, elevation and difficulty grade found in the segment.

mod rules;
#[cfg(test)]
mod tests;

pub use rules::{MetadataRuleKind, BRACKETS, FILLER_TOKENS, TYPE_HINT_RULES};

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::difficulty::LocationDifficulty;
use crate::error::{CoreError, Result};
use crate::location::LocationType;

use rules::METADATA_RULES;

/// One parsed segment of a route description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopDescriptor {
    /// 0-based position within the route
    pub index: u32,
    /// Segment text as it appeared in the route, trimmed
    pub raw: String,
    /// Name with metadata, abbreviations and filler removed
    pub name: String,
    pub location_type: Option<LocationType>,
    pub elevation: Option<f64>,
    pub difficulty: Option<LocationDifficulty>,
}

/// Metadata extracted from a single segment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedStop {
    pub name: String,
    pub location_type: Option<LocationType>,
    pub elevation: Option<f64>,
    pub difficulty: Option<LocationDifficulty>,
}

/// Parses a full route description into ordered stops.
///
/// Returns [`CoreError::EmptyRoute`] when the text contains no stops.
pub fn parse_route(text: &str) -> Result<Vec<StopDescriptor>> {
    let normalized = normalize_route_text(text);
    let stops: Vec<StopDescriptor> = split_stops(&normalized)
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            let parsed = parse_stop(raw);
            StopDescriptor {
                index: u32::try_from(i).unwrap_or(u32::MAX),
                raw: raw.to_owned(),
                name: parsed.name,
                location_type: parsed.location_type,
                elevation: parsed.elevation,
                difficulty: parsed.difficulty,
            }
        })
        .collect();

    if stops.is_empty() {
        return Err(CoreError::EmptyRoute);
    }
    Ok(stops)
}

/// NFC normalization, dash unification and whitespace collapse.
#[must_use]
pub fn normalize_route_text(text: &str) -> String {
    let composed: String = text
        .nfc()
        .map(|c| match c {
            '\u{2013}' | '\u{2014}' => '-',
            other => other,
        })
        .collect();
    collapse_whitespace(&composed)
}

/// Splits normalized text on hyphens that touch a space on at least one side.
///
/// `"a - b"`, `"a- b"` and `"a -b"` split; `"a-b"` does not. Segments are
/// trimmed and empty ones are dropped.
#[must_use]
pub fn split_stops(normalized: &str) -> Vec<&str> {
    let bytes = normalized.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0_usize;

    for (i, &b) in bytes.iter().enumerate() {
        if b != b'-' {
            continue;
        }
        let space_before = i.checked_sub(1).and_then(|p| bytes.get(p)).is_some_and(|c| c.is_ascii_whitespace());
        let space_after = bytes.get(i.saturating_add(1)).is_some_and(|c| c.is_ascii_whitespace());
        if space_before || space_after {
            // '-' is ASCII, so both slice bounds sit on char boundaries.
            segments.push(&normalized[start..i]);
            start = i.saturating_add(1);
        }
    }
    segments.push(&normalized[start..]);

    segments.into_iter().map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// Extracts grade, elevation and type hint from one segment and cleans the name.
#[must_use]
pub fn parse_stop(segment: &str) -> ParsedStop {
    let mut text = segment.trim().to_owned();
    let mut parsed = ParsedStop::default();

    for rule in METADATA_RULES.iter() {
        let hit = rule.regex.captures(&text).and_then(|caps| {
            let difficulty = caps.name("difficulty").and_then(|m| m.as_str().parse::<LocationDifficulty>().ok());
            let elevation = caps.name("elevation").and_then(|m| parse_elevation(m.as_str()));
            caps.get(0).map(|m| (m.range(), difficulty, elevation))
        });
        let Some((span, difficulty, elevation)) = hit else {
            continue;
        };
        tracing::trace!(kind = ?rule.kind, segment, "stop metadata matched");
        text.replace_range(span, " ");
        parsed.difficulty = difficulty;
        parsed.elevation = elevation;
        break;
    }

    for (abbreviation, location_type) in TYPE_HINT_RULES {
        if let Some(pos) = text.find(abbreviation) {
            text.replace_range(pos..pos.saturating_add(abbreviation.len()), " ");
            parsed.location_type = Some(*location_type);
            break;
        }
    }

    for filler in FILLER_TOKENS {
        text = text.replace(filler, " ");
    }
    text.retain(|c| !BRACKETS.contains(&c));

    let name = collapse_whitespace(&text);
    parsed.name = if name.is_empty() { unbracketed(segment) } else { name };
    parsed
}

/// Segment text without brackets; the untouched segment if nothing else is left.
fn unbracketed(segment: &str) -> String {
    let stripped: String = segment.chars().filter(|c| !BRACKETS.contains(c)).collect();
    let stripped = collapse_whitespace(&stripped);
    if stripped.is_empty() { segment.trim().to_owned() } else { stripped }
}

fn parse_elevation(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse::<f64>().ok().filter(|e| e.is_finite())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
