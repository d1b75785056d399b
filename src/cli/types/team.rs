//! The closed set of 32 NFL franchises.

use super::division::{Conference, Division};
use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Franchise abbreviation, ESPN style.
///
/// # Examples
///
/// ```rust
/// use nfl_stats::{Division, TeamAbbr};
///
/// let team: TeamAbbr = "buf".parse().unwrap();
/// assert_eq!(team, TeamAbbr::BUF);
/// assert_eq!(team.division(), Division::AfcEast);
/// assert_eq!(team.name(), "Buffalo Bills");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TeamAbbr {
    ARI,
    ATL,
    BAL,
    BUF,
    CAR,
    CHI,
    CIN,
    CLE,
    DAL,
    DEN,
    DET,
    GB,
    HOU,
    IND,
    JAX,
    KC,
    LV,
    LAC,
    LAR,
    MIA,
    MIN,
    NE,
    NO,
    NYG,
    NYJ,
    PHI,
    PIT,
    SF,
    SEA,
    TB,
    TEN,
    #[serde(alias = "WAS")]
    WSH,
}

impl TeamAbbr {
    pub const ALL: [TeamAbbr; 32] = [
        TeamAbbr::ARI,
        TeamAbbr::ATL,
        TeamAbbr::BAL,
        TeamAbbr::BUF,
        TeamAbbr::CAR,
        TeamAbbr::CHI,
        TeamAbbr::CIN,
        TeamAbbr::CLE,
        TeamAbbr::DAL,
        TeamAbbr::DEN,
        TeamAbbr::DET,
        TeamAbbr::GB,
        TeamAbbr::HOU,
        TeamAbbr::IND,
        TeamAbbr::JAX,
        TeamAbbr::KC,
        TeamAbbr::LV,
        TeamAbbr::LAC,
        TeamAbbr::LAR,
        TeamAbbr::MIA,
        TeamAbbr::MIN,
        TeamAbbr::NE,
        TeamAbbr::NO,
        TeamAbbr::NYG,
        TeamAbbr::NYJ,
        TeamAbbr::PHI,
        TeamAbbr::PIT,
        TeamAbbr::SF,
        TeamAbbr::SEA,
        TeamAbbr::TB,
        TeamAbbr::TEN,
        TeamAbbr::WSH,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamAbbr::ARI => "ARI",
            TeamAbbr::ATL => "ATL",
            TeamAbbr::BAL => "BAL",
            TeamAbbr::BUF => "BUF",
            TeamAbbr::CAR => "CAR",
            TeamAbbr::CHI => "CHI",
            TeamAbbr::CIN => "CIN",
            TeamAbbr::CLE => "CLE",
            TeamAbbr::DAL => "DAL",
            TeamAbbr::DEN => "DEN",
            TeamAbbr::DET => "DET",
            TeamAbbr::GB => "GB",
            TeamAbbr::HOU => "HOU",
            TeamAbbr::IND => "IND",
            TeamAbbr::JAX => "JAX",
            TeamAbbr::KC => "KC",
            TeamAbbr::LV => "LV",
            TeamAbbr::LAC => "LAC",
            TeamAbbr::LAR => "LAR",
            TeamAbbr::MIA => "MIA",
            TeamAbbr::MIN => "MIN",
            TeamAbbr::NE => "NE",
            TeamAbbr::NO => "NO",
            TeamAbbr::NYG => "NYG",
            TeamAbbr::NYJ => "NYJ",
            TeamAbbr::PHI => "PHI",
            TeamAbbr::PIT => "PIT",
            TeamAbbr::SF => "SF",
            TeamAbbr::SEA => "SEA",
            TeamAbbr::TB => "TB",
            TeamAbbr::TEN => "TEN",
            TeamAbbr::WSH => "WSH",
        }
    }

    /// Full display name, e.g. "Kansas City Chiefs".
    pub fn name(&self) -> &'static str {
        match self {
            TeamAbbr::ARI => "Arizona Cardinals",
            TeamAbbr::ATL => "Atlanta Falcons",
            TeamAbbr::BAL => "Baltimore Ravens",
            TeamAbbr::BUF => "Buffalo Bills",
            TeamAbbr::CAR => "Carolina Panthers",
            TeamAbbr::CHI => "Chicago Bears",
            TeamAbbr::CIN => "Cincinnati Bengals",
            TeamAbbr::CLE => "Cleveland Browns",
            TeamAbbr::DAL => "Dallas Cowboys",
            TeamAbbr::DEN => "Denver Broncos",
            TeamAbbr::DET => "Detroit Lions",
            TeamAbbr::GB => "Green Bay Packers",
            TeamAbbr::HOU => "Houston Texans",
            TeamAbbr::IND => "Indianapolis Colts",
            TeamAbbr::JAX => "Jacksonville Jaguars",
            TeamAbbr::KC => "Kansas City Chiefs",
            TeamAbbr::LV => "Las Vegas Raiders",
            TeamAbbr::LAC => "Los Angeles Chargers",
            TeamAbbr::LAR => "Los Angeles Rams",
            TeamAbbr::MIA => "Miami Dolphins",
            TeamAbbr::MIN => "Minnesota Vikings",
            TeamAbbr::NE => "New England Patriots",
            TeamAbbr::NO => "New Orleans Saints",
            TeamAbbr::NYG => "New York Giants",
            TeamAbbr::NYJ => "New York Jets",
            TeamAbbr::PHI => "Philadelphia Eagles",
            TeamAbbr::PIT => "Pittsburgh Steelers",
            TeamAbbr::SF => "San Francisco 49ers",
            TeamAbbr::SEA => "Seattle Seahawks",
            TeamAbbr::TB => "Tampa Bay Buccaneers",
            TeamAbbr::TEN => "Tennessee Titans",
            TeamAbbr::WSH => "Washington Commanders",
        }
    }

    /// ESPN's numeric team id, as used in `/teams/{id}` references.
    pub fn espn_id(&self) -> u32 {
        match self {
            TeamAbbr::ATL => 1,
            TeamAbbr::BUF => 2,
            TeamAbbr::CHI => 3,
            TeamAbbr::CIN => 4,
            TeamAbbr::CLE => 5,
            TeamAbbr::DAL => 6,
            TeamAbbr::DEN => 7,
            TeamAbbr::DET => 8,
            TeamAbbr::GB => 9,
            TeamAbbr::TEN => 10,
            TeamAbbr::IND => 11,
            TeamAbbr::KC => 12,
            TeamAbbr::LV => 13,
            TeamAbbr::LAR => 14,
            TeamAbbr::MIA => 15,
            TeamAbbr::MIN => 16,
            TeamAbbr::NE => 17,
            TeamAbbr::NO => 18,
            TeamAbbr::NYG => 19,
            TeamAbbr::NYJ => 20,
            TeamAbbr::PHI => 21,
            TeamAbbr::ARI => 22,
            TeamAbbr::PIT => 23,
            TeamAbbr::LAC => 24,
            TeamAbbr::SF => 25,
            TeamAbbr::SEA => 26,
            TeamAbbr::TB => 27,
            TeamAbbr::WSH => 28,
            TeamAbbr::CAR => 29,
            TeamAbbr::JAX => 30,
            TeamAbbr::BAL => 33,
            TeamAbbr::HOU => 34,
        }
    }

    pub fn from_espn_id(id: u32) -> Option<Self> {
        TeamAbbr::ALL.into_iter().find(|t| t.espn_id() == id)
    }

    /// Canonical division (post-2002 alignment).
    pub fn division(&self) -> Division {
        match self {
            TeamAbbr::BUF | TeamAbbr::MIA | TeamAbbr::NE | TeamAbbr::NYJ => Division::AfcEast,
            TeamAbbr::BAL | TeamAbbr::CIN | TeamAbbr::CLE | TeamAbbr::PIT => Division::AfcNorth,
            TeamAbbr::HOU | TeamAbbr::IND | TeamAbbr::JAX | TeamAbbr::TEN => Division::AfcSouth,
            TeamAbbr::DEN | TeamAbbr::KC | TeamAbbr::LV | TeamAbbr::LAC => Division::AfcWest,
            TeamAbbr::DAL | TeamAbbr::NYG | TeamAbbr::PHI | TeamAbbr::WSH => Division::NfcEast,
            TeamAbbr::CHI | TeamAbbr::DET | TeamAbbr::GB | TeamAbbr::MIN => Division::NfcNorth,
            TeamAbbr::ATL | TeamAbbr::CAR | TeamAbbr::NO | TeamAbbr::TB => Division::NfcSouth,
            TeamAbbr::ARI | TeamAbbr::LAR | TeamAbbr::SF | TeamAbbr::SEA => Division::NfcWest,
        }
    }

    pub fn conference(&self) -> Conference {
        self.division().conference()
    }
}

impl fmt::Display for TeamAbbr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TeamAbbr {
    type Err = StatsError;

    /// Case-insensitive; accepts the abbreviation or the full display name.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        if needle.eq_ignore_ascii_case("WAS") {
            return Ok(TeamAbbr::WSH);
        }

        TeamAbbr::ALL
            .into_iter()
            .find(|t| {
                t.as_str().eq_ignore_ascii_case(needle) || t.name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| StatsError::InvalidTeam {
                team: s.to_string(),
            })
    }
}
