//! Difficulty grades of individual route locations (passes, summits).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Category of a single pass or summit, from non-categorized up to 3B*.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum LocationDifficulty {
    #[serde(rename = "n/c")]
    NonCategorized,
    #[serde(rename = "1A")]
    FirstA,
    #[serde(rename = "1A*")]
    FirstAStar,
    #[serde(rename = "1B")]
    FirstB,
    #[serde(rename = "1B*")]
    FirstBStar,
    #[serde(rename = "2A")]
    SecondA,
    #[serde(rename = "2A*")]
    SecondAStar,
    #[serde(rename = "2B")]
    SecondB,
    #[serde(rename = "2B*")]
    SecondBStar,
    #[serde(rename = "3A")]
    ThirdA,
    #[serde(rename = "3A*")]
    ThirdAStar,
    #[serde(rename = "3B")]
    ThirdB,
    #[serde(rename = "3B*")]
    ThirdBStar,
}

impl LocationDifficulty {
    pub const ALL_VARIANTS: &'static [LocationDifficulty] = &[
        LocationDifficulty::NonCategorized,
        LocationDifficulty::FirstA,
        LocationDifficulty::FirstAStar,
        LocationDifficulty::FirstB,
        LocationDifficulty::FirstBStar,
        LocationDifficulty::SecondA,
        LocationDifficulty::SecondAStar,
        LocationDifficulty::SecondB,
        LocationDifficulty::SecondBStar,
        LocationDifficulty::ThirdA,
        LocationDifficulty::ThirdAStar,
        LocationDifficulty::ThirdB,
        LocationDifficulty::ThirdBStar,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::NonCategorized => "n/c",
            Self::FirstA => "1A",
            Self::FirstAStar => "1A*",
            Self::FirstB => "1B",
            Self::FirstBStar => "1B*",
            Self::SecondA => "2A",
            Self::SecondAStar => "2A*",
            Self::SecondB => "2B",
            Self::SecondBStar => "2B*",
            Self::ThirdA => "3A",
            Self::ThirdAStar => "3A*",
            Self::ThirdB => "3B",
            Self::ThirdBStar => "3B*",
        }
    }
}

impl fmt::Display for LocationDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the canonical form as well as the report spelling: Cyrillic `А`/`Б`
/// or Latin `A`/`B`, `*` or `★` for the star, and `н/к` for non-categorized.
impl FromStr for LocationDifficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lowered = trimmed.to_lowercase();
        if lowered == "н/к" || lowered == "n/c" || lowered == "нк" {
            return Ok(Self::NonCategorized);
        }

        let mut chars = trimmed.chars();
        let (Some(level), Some(letter)) = (chars.next(), chars.next()) else {
            return Err(CoreError::InvalidDifficulty(s.to_owned()));
        };
        let star = match chars.next() {
            None => false,
            Some('*' | '★') => true,
            Some(_) => return Err(CoreError::InvalidDifficulty(s.to_owned())),
        };
        if chars.next().is_some() {
            return Err(CoreError::InvalidDifficulty(s.to_owned()));
        }

        let sub_b = match letter {
            'А' | 'а' | 'A' | 'a' => false,
            'Б' | 'б' | 'B' | 'b' => true,
            _ => return Err(CoreError::InvalidDifficulty(s.to_owned())),
        };

        let grade = match (level, sub_b, star) {
            ('1', false, false) => Self::FirstA,
            ('1', false, true) => Self::FirstAStar,
            ('1', true, false) => Self::FirstB,
            ('1', true, true) => Self::FirstBStar,
            ('2', false, false) => Self::SecondA,
            ('2', false, true) => Self::SecondAStar,
            ('2', true, false) => Self::SecondB,
            ('2', true, true) => Self::SecondBStar,
            ('3', false, false) => Self::ThirdA,
            ('3', false, true) => Self::ThirdAStar,
            ('3', true, false) => Self::ThirdB,
            ('3', true, true) => Self::ThirdBStar,
            _ => return Err(CoreError::InvalidDifficulty(s.to_owned())),
        };
        Ok(grade)
    }
}
