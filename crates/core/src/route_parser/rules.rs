//! Ordered rule tables for stop metadata extraction.
//!
//! Both tables are evaluated top to bottom and the first hit wins, so a longer
//! or more specific entry must stay above any shorter entry it contains.

use std::sync::LazyLock;

use regex::Regex;

use crate::location::LocationType;

const GRADE: &str = r"(?P<difficulty>[1-3][АБAB][*★]?|н/к)";
const ELEVATION: &str =
    r"(?P<elevation>[0-9]+[,.]?[0-9]+)(?:\s*(?:метрів|м)\b\.?)?(?:\s*н\.\s?р\.\s?м\b\.?)?";

/// Which metadata a rule carries; used for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataRuleKind {
    ElevationAndGrade,
    ParenthesizedGrade,
    ParenthesizedElevation,
    BareGrade,
    BareElevation,
}

#[derive(Debug)]
pub(crate) struct MetadataRule {
    pub(crate) kind: MetadataRuleKind,
    pub(crate) regex: Regex,
}

#[allow(clippy::unwrap_used, reason = "static regex patterns are covered by tests")]
pub(crate) static METADATA_RULES: LazyLock<Vec<MetadataRule>> = LazyLock::new(|| {
    [
        (MetadataRuleKind::ElevationAndGrade, format!(r"\(\s*{ELEVATION}\s*,\s*{GRADE}\s*\)")),
        (MetadataRuleKind::ParenthesizedGrade, format!(r"\(\s*{GRADE}\s*\)")),
        (MetadataRuleKind::ParenthesizedElevation, format!(r"\(\s*{ELEVATION}\s*\)")),
        (MetadataRuleKind::BareGrade, format!(r"\s{GRADE}(?:[^\p{{L}}\p{{N}}]|$)")),
        (MetadataRuleKind::BareElevation, format!(r"\s{ELEVATION}")),
    ]
    .into_iter()
    .map(|(kind, pattern)| MetadataRule { kind, regex: Regex::new(&pattern).unwrap() })
    .collect()
});

/// Abbreviation (or word) to place type, highest priority first.
pub const TYPE_HINT_RULES: &[(&str, LocationType)] = &[
    ("смт.", LocationType::Settlement),
    ("вис.", LocationType::Height),
    ("выс.", LocationType::Height),
    ("д.р.", LocationType::Valley),
    ("дол. р.", LocationType::Valley),
    ("долина р.", LocationType::Valley),
    ("пер.", LocationType::MountainPass),
    ("п.", LocationType::MountainPass),
    ("г.", LocationType::Mountain),
    ("ур.", LocationType::NatureObject),
    ("хр.", LocationType::MountainRange),
    ("р.", LocationType::Stream),
    ("пос.", LocationType::Settlement),
    ("с.", LocationType::Settlement),
    ("пол.", LocationType::Polonyna),
    ("дол.", LocationType::Valley),
    ("оз.", LocationType::Lake),
    ("о.", LocationType::Lake),
    ("в.", LocationType::Mountain),
    ("м.", LocationType::Settlement),
    // Spelled-out words only apply when no abbreviation is present.
    ("Село ", LocationType::Settlement),
    ("село ", LocationType::Settlement),
    ("Місто ", LocationType::Settlement),
    ("місто ", LocationType::Settlement),
    ("Гора ", LocationType::Mountain),
    ("гора ", LocationType::Mountain),
    ("Перевал ", LocationType::MountainPass),
    ("перевал ", LocationType::MountainPass),
    ("Хребет ", LocationType::MountainRange),
    ("хребет ", LocationType::MountainRange),
    ("Озеро ", LocationType::Lake),
    ("озеро ", LocationType::Lake),
    ("Полонина ", LocationType::Polonyna),
    ("полонина ", LocationType::Polonyna),
];

/// Tokens left behind by report authors that never belong to a place name.
pub const FILLER_TOKENS: &[&str] = &[
    // radial trip marker
    "рад.",
    "(рад)",
    "траверс",
];

pub const BRACKETS: &[char] = &['(', ')', '[', ']'];
