//! Statistical categories for leaders lists.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, StatsError};
use std::str::FromStr;

/// Player stat categories tracked by leaders lists.
///
/// Each category corresponds to one numeric field on a player record and to
/// one category name in ESPN's season leaders payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    PassingYards,
    RushingYards,
    ReceivingYards,
    Sacks,
    Interceptions,
    PassingTouchdowns,
    Receptions,
}

impl StatCategory {
    pub const ALL: [StatCategory; 7] = [
        StatCategory::PassingYards,
        StatCategory::RushingYards,
        StatCategory::ReceivingYards,
        StatCategory::Sacks,
        StatCategory::Interceptions,
        StatCategory::PassingTouchdowns,
        StatCategory::Receptions,
    ];

    /// Player record field holding this stat (also the sort field name).
    pub fn field(&self) -> &'static str {
        match self {
            StatCategory::PassingYards => "passing_yards",
            StatCategory::RushingYards => "rushing_yards",
            StatCategory::ReceivingYards => "receiving_yards",
            StatCategory::Sacks => "sacks",
            StatCategory::Interceptions => "interceptions",
            StatCategory::PassingTouchdowns => "passing_touchdowns",
            StatCategory::Receptions => "receptions",
        }
    }

    /// Category name in ESPN's leaders endpoint.
    pub fn espn_name(&self) -> &'static str {
        match self {
            StatCategory::PassingYards => "passingYards",
            StatCategory::RushingYards => "rushingYards",
            StatCategory::ReceivingYards => "receivingYards",
            StatCategory::Sacks => "sacks",
            StatCategory::Interceptions => "interceptions",
            StatCategory::PassingTouchdowns => "passingTouchdowns",
            StatCategory::Receptions => "receptions",
        }
    }

    pub fn from_espn_name(name: &str) -> Option<Self> {
        StatCategory::ALL.into_iter().find(|c| c.espn_name() == name)
    }

    /// Human label, e.g. "Passing TDs".
    pub fn label(&self) -> &'static str {
        match self {
            StatCategory::PassingYards => "Passing Yards",
            StatCategory::RushingYards => "Rushing Yards",
            StatCategory::ReceivingYards => "Receiving Yards",
            StatCategory::Sacks => "Sacks",
            StatCategory::Interceptions => "Interceptions",
            StatCategory::PassingTouchdowns => "Passing TDs",
            StatCategory::Receptions => "Receptions",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for StatCategory {
    type Err = StatsError;

    /// Accepts the field name, the kebab-case CLI name or the ESPN name.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().replace('-', "_");
        StatCategory::ALL
            .into_iter()
            .find(|c| c.field().eq_ignore_ascii_case(&needle) || c.espn_name() == needle)
            .ok_or_else(|| StatsError::InvalidCategory {
                category: s.to_string(),
            })
    }
}
