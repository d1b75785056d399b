//! Record types held by the dataset store and produced by views.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::types::{Conference, Division, PlayerId, Position, Season, StatCategory, TeamAbbr};

/// A single exported value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Empty,
}

impl Cell {
    fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    fn opt_text(value: &Option<String>) -> Self {
        value.as_ref().map_or(Cell::Empty, |s| Cell::Text(s.clone()))
    }

    /// CSV field text; `Empty` becomes an empty field.
    pub fn to_field(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Int(n) => n.to_string(),
            Cell::Float(f) => f.to_string(),
            Cell::Empty => String::new(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Int(n) => Value::from(*n),
            Cell::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Cell::Empty => Value::Null,
        }
    }
}

/// A row type that can be exported with a fixed column order.
///
/// `cells()` must yield exactly one cell per entry of `COLUMNS`, in order.
pub trait Record {
    /// Lowercase record kind used in messages ("player", "team", ...).
    const KIND: &'static str;
    /// Worksheet name for XLSX exports.
    const SHEET_NAME: &'static str;
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<Cell>;
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// One player and their season totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub team: TeamAbbr,
    #[serde(default)]
    pub passing_yards: i32,
    #[serde(default)]
    pub passing_touchdowns: u32,
    #[serde(default)]
    pub rushing_yards: i32,
    #[serde(default)]
    pub receiving_yards: i32,
    #[serde(default)]
    pub receptions: u32,
    #[serde(default)]
    pub sacks: f64,
    #[serde(default)]
    pub interceptions: u32,
    #[serde(default)]
    pub jersey: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub debut_year: Option<u16>,
    #[serde(default)]
    pub draft: Option<String>,
    #[serde(default)]
    pub headshot: Option<String>,
}

impl PlayerRecord {
    /// A record with no stats recorded yet.
    pub fn new(id: PlayerId, name: impl Into<String>, position: Position, team: TeamAbbr) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            team,
            passing_yards: 0,
            passing_touchdowns: 0,
            rushing_yards: 0,
            receiving_yards: 0,
            receptions: 0,
            sacks: 0.0,
            interceptions: 0,
            jersey: None,
            date_of_birth: None,
            debut_year: None,
            draft: None,
            headshot: None,
        }
    }

    pub fn stat(&self, category: StatCategory) -> f64 {
        match category {
            StatCategory::PassingYards => self.passing_yards as f64,
            StatCategory::RushingYards => self.rushing_yards as f64,
            StatCategory::ReceivingYards => self.receiving_yards as f64,
            StatCategory::Sacks => self.sacks,
            StatCategory::Interceptions => self.interceptions as f64,
            StatCategory::PassingTouchdowns => self.passing_touchdowns as f64,
            StatCategory::Receptions => self.receptions as f64,
        }
    }

    pub fn set_stat(&mut self, category: StatCategory, value: f64) {
        match category {
            StatCategory::PassingYards => self.passing_yards = value.round() as i32,
            StatCategory::RushingYards => self.rushing_yards = value.round() as i32,
            StatCategory::ReceivingYards => self.receiving_yards = value.round() as i32,
            StatCategory::Sacks => self.sacks = value,
            StatCategory::Interceptions => self.interceptions = value.max(0.0).round() as u32,
            StatCategory::PassingTouchdowns => {
                self.passing_touchdowns = value.max(0.0).round() as u32
            }
            StatCategory::Receptions => self.receptions = value.max(0.0).round() as u32,
        }
    }
}

impl Record for PlayerRecord {
    const KIND: &'static str = "player";
    const SHEET_NAME: &'static str = "Players";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "position",
        "team",
        "passing_yards",
        "passing_touchdowns",
        "rushing_yards",
        "receiving_yards",
        "receptions",
        "sacks",
        "interceptions",
        "jersey",
        "date_of_birth",
        "debut_year",
        "draft",
        "headshot",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Int(self.id.as_u64() as i64),
            Cell::text(&self.name),
            Cell::text(self.position.to_string()),
            Cell::text(self.team.as_str()),
            Cell::Int(self.passing_yards.into()),
            Cell::Int(self.passing_touchdowns.into()),
            Cell::Int(self.rushing_yards.into()),
            Cell::Int(self.receiving_yards.into()),
            Cell::Int(self.receptions.into()),
            Cell::Float(self.sacks),
            Cell::Int(self.interceptions.into()),
            Cell::opt_text(&self.jersey),
            Cell::opt_text(&self.date_of_birth),
            self.debut_year.map_or(Cell::Empty, |y| Cell::Int(y.into())),
            Cell::opt_text(&self.draft),
            Cell::opt_text(&self.headshot),
        ]
    }
}

/// One team and its regular-season record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub abbreviation: TeamAbbr,
    pub name: String,
    pub conference: Conference,
    pub division: Division,
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(default)]
    pub points_for: u32,
    #[serde(default)]
    pub points_against: u32,
    #[serde(default)]
    pub home_record: Option<String>,
    #[serde(default)]
    pub away_record: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl TeamRecord {
    /// A record using the franchise's canonical name and alignment.
    pub fn new(abbreviation: TeamAbbr, wins: u32, losses: u32, ties: u32) -> Self {
        Self {
            abbreviation,
            name: abbreviation.name().to_string(),
            conference: abbreviation.conference(),
            division: abbreviation.division(),
            wins,
            losses,
            ties,
            points_for: 0,
            points_against: 0,
            home_record: None,
            away_record: None,
            venue: None,
            city: None,
            state: None,
            logo: None,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Ties count as half a win; 0.0 before any game is played.
    pub fn win_percent(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => (self.wins as f64 + self.ties as f64 / 2.0) / games as f64,
        }
    }

    pub fn point_differential(&self) -> i64 {
        self.points_for as i64 - self.points_against as i64
    }

    /// `W-L` or `W-L-T` when ties exist.
    pub fn record_summary(&self) -> String {
        if self.ties > 0 {
            format!("{}-{}-{}", self.wins, self.losses, self.ties)
        } else {
            format!("{}-{}", self.wins, self.losses)
        }
    }
}

impl Record for TeamRecord {
    const KIND: &'static str = "team";
    const SHEET_NAME: &'static str = "Standings";
    const COLUMNS: &'static [&'static str] = &[
        "abbreviation",
        "name",
        "conference",
        "division",
        "wins",
        "losses",
        "ties",
        "win_percent",
        "points_for",
        "points_against",
        "point_differential",
        "home_record",
        "away_record",
        "venue",
        "city",
        "state",
        "logo",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.abbreviation.as_str()),
            Cell::text(&self.name),
            Cell::text(self.conference.to_string()),
            Cell::text(self.division.as_str()),
            Cell::Int(self.wins.into()),
            Cell::Int(self.losses.into()),
            Cell::Int(self.ties.into()),
            Cell::Float(round3(self.win_percent())),
            Cell::Int(self.points_for.into()),
            Cell::Int(self.points_against.into()),
            Cell::Int(self.point_differential()),
            Cell::opt_text(&self.home_record),
            Cell::opt_text(&self.away_record),
            Cell::opt_text(&self.venue),
            Cell::opt_text(&self.city),
            Cell::opt_text(&self.state),
            Cell::opt_text(&self.logo),
        ]
    }
}

/// One ranked row of a leaders list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderEntry {
    pub category: StatCategory,
    pub rank: u32,
    pub player_id: PlayerId,
    pub name: String,
    pub position: Position,
    pub team: String,
    pub team_abbr: TeamAbbr,
    pub value: f64,
}

impl Record for LeaderEntry {
    const KIND: &'static str = "leader";
    const SHEET_NAME: &'static str = "Leaders";
    const COLUMNS: &'static [&'static str] = &[
        "category",
        "rank",
        "player_id",
        "name",
        "position",
        "team",
        "team_abbr",
        "value",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.category.field()),
            Cell::Int(self.rank.into()),
            Cell::Int(self.player_id.as_u64() as i64),
            Cell::text(&self.name),
            Cell::text(self.position.to_string()),
            Cell::text(&self.team),
            Cell::text(self.team_abbr.as_str()),
            Cell::Float(self.value),
        ]
    }
}

/// On-disk form of a dataset: `{ "season", "teams", "players" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub season: Season,
    pub teams: Vec<TeamRecord>,
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
}
