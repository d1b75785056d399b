//! Conference and division types.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two NFL conferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Conference {
    AFC,
    NFC,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::AFC, Conference::NFC];

    /// ESPN core API group id for the conference standings.
    pub fn espn_group_id(&self) -> u8 {
        match self {
            Conference::AFC => 8,
            Conference::NFC => 7,
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Conference::AFC => "AFC",
            Conference::NFC => "NFC",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Conference {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "AFC" | "AMERICAN FOOTBALL CONFERENCE" => Ok(Conference::AFC),
            "NFC" | "NATIONAL FOOTBALL CONFERENCE" => Ok(Conference::NFC),
            _ => Err(StatsError::InvalidConference {
                conference: s.to_string(),
            }),
        }
    }
}

/// One of the eight NFL divisions.
///
/// The derived ordering is the standings display order: AFC before NFC,
/// then North, South, East, West within a conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Division {
    #[serde(rename = "AFC North")]
    AfcNorth,
    #[serde(rename = "AFC South")]
    AfcSouth,
    #[serde(rename = "AFC East")]
    AfcEast,
    #[serde(rename = "AFC West")]
    AfcWest,
    #[serde(rename = "NFC North")]
    NfcNorth,
    #[serde(rename = "NFC South")]
    NfcSouth,
    #[serde(rename = "NFC East")]
    NfcEast,
    #[serde(rename = "NFC West")]
    NfcWest,
}

impl Division {
    pub const ALL: [Division; 8] = [
        Division::AfcNorth,
        Division::AfcSouth,
        Division::AfcEast,
        Division::AfcWest,
        Division::NfcNorth,
        Division::NfcSouth,
        Division::NfcEast,
        Division::NfcWest,
    ];

    pub fn conference(&self) -> Conference {
        match self {
            Division::AfcNorth | Division::AfcSouth | Division::AfcEast | Division::AfcWest => {
                Conference::AFC
            }
            Division::NfcNorth | Division::NfcSouth | Division::NfcEast | Division::NfcWest => {
                Conference::NFC
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Division::AfcNorth => "AFC North",
            Division::AfcSouth => "AFC South",
            Division::AfcEast => "AFC East",
            Division::AfcWest => "AFC West",
            Division::NfcNorth => "NFC North",
            Division::NfcSouth => "NFC South",
            Division::NfcEast => "NFC East",
            Division::NfcWest => "NFC West",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Division {
    type Err = StatsError;

    /// Accepts `AFC East`, `afc-east`, `afc_east` and `AFCEast`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        Division::ALL
            .into_iter()
            .find(|d| d.as_str().replace(' ', "").to_lowercase() == normalized)
            .ok_or_else(|| StatsError::InvalidDivision {
                division: s.to_string(),
            })
    }
}
