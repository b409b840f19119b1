//! NAICS hierarchy levels.
//!
//! NAICS codes encode their position in the hierarchy by length:
//!
//! | Digits | Level             | Example                          |
//! |--------|-------------------|----------------------------------|
//! | 2      | Sector            | `11` Agriculture, Forestry, ...  |
//! | 3      | Subsector         | `111` Crop Production            |
//! | 4      | Industry Group    | `1111` Oilseed and Grain Farming |
//! | 5      | NAICS Industry    | `11111` Soybean Farming          |
//! | 6      | National Industry | `111110` Soybean Farming         |
//!
//! The census tables also list a few sectors as ranges (`31-33`,
//! `44-45`, `48-49`); those are sectors too.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeLevel {
    Sector,
    Subsector,
    IndustryGroup,
    NaicsIndustry,
    NationalIndustry,
}

impl CodeLevel {
    pub const ALL: [CodeLevel; 5] = [
        CodeLevel::Sector,
        CodeLevel::Subsector,
        CodeLevel::IndustryGroup,
        CodeLevel::NaicsIndustry,
        CodeLevel::NationalIndustry,
    ];

    /// Classify a code by its shape. Returns `None` for anything that is
    /// not a 2-6 digit code or a sector range.
    pub fn of(code: &str) -> Option<Self> {
        if is_sector_range(code) {
            return Some(CodeLevel::Sector);
        }
        if !code.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match code.len() {
            2 => Some(CodeLevel::Sector),
            3 => Some(CodeLevel::Subsector),
            4 => Some(CodeLevel::IndustryGroup),
            5 => Some(CodeLevel::NaicsIndustry),
            6 => Some(CodeLevel::NationalIndustry),
            _ => None,
        }
    }

    /// Number of digits in a code at this level.
    pub fn digits(self) -> usize {
        match self {
            CodeLevel::Sector => 2,
            CodeLevel::Subsector => 3,
            CodeLevel::IndustryGroup => 4,
            CodeLevel::NaicsIndustry => 5,
            CodeLevel::NationalIndustry => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CodeLevel::Sector => "Sector",
            CodeLevel::Subsector => "Subsector",
            CodeLevel::IndustryGroup => "Industry Group",
            CodeLevel::NaicsIndustry => "NAICS Industry",
            CodeLevel::NationalIndustry => "National Industry",
        }
    }
}

impl fmt::Display for CodeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn is_sector_range(code: &str) -> bool {
    let Some((start, end)) = code.split_once('-') else {
        return false;
    };
    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    two_digits(start) && two_digits(end) && start < end
}
