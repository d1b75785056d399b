//! The in-memory dataset store.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use super::models::{PlayerRecord, Snapshot, TeamRecord};
use crate::{
    cli::types::{PlayerId, Season, TeamAbbr},
    error::{Result, StatsError},
    view::View,
};

const BUNDLED_SNAPSHOT: &str = include_str!("../../data/snapshot_2024.json");

/// Immutable player and team records for one season.
///
/// Built once from a [`Snapshot`]; every invariant is checked up front so
/// views and lookups never have to handle inconsistent data.
#[derive(Debug)]
pub struct DatasetStore {
    season: Season,
    teams: Vec<TeamRecord>,
    players: Vec<PlayerRecord>,
}

impl DatasetStore {
    pub fn new(snapshot: Snapshot) -> Result<Self> {
        validate(&snapshot)?;
        debug!(
            season = snapshot.season.as_u16(),
            teams = snapshot.teams.len(),
            players = snapshot.players.len(),
            "dataset validated"
        );

        Ok(Self {
            season: snapshot.season,
            teams: snapshot.teams,
            players: snapshot.players,
        })
    }

    /// The 2024 regular-season snapshot compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_SNAPSHOT)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading dataset from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn teams(&self) -> View<'_, TeamRecord> {
        View::from_slice(&self.teams)
    }

    pub fn players(&self) -> View<'_, PlayerRecord> {
        View::from_slice(&self.players)
    }

    pub fn team(&self, abbreviation: TeamAbbr) -> Option<&TeamRecord> {
        self.teams.iter().find(|t| t.abbreviation == abbreviation)
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Players whose name contains `query` (case-insensitive), optionally on one team.
    pub fn find_players(&self, query: &str, team: Option<TeamAbbr>) -> Vec<&PlayerRecord> {
        let needle = query.trim().to_lowercase();
        self.players
            .iter()
            .filter(|p| team.map_or(true, |t| p.team == t))
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn team_of(&self, player: &PlayerRecord) -> Option<&TeamRecord> {
        self.team(player.team)
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            season: self.season,
            teams: self.teams.clone(),
            players: self.players.clone(),
        }
    }
}

/// Check the snapshot against the closed team/division/conference sets and
/// the player → team reference rule.
pub fn validate(snapshot: &Snapshot) -> Result<()> {
    let mut seen_teams = HashSet::new();
    for team in &snapshot.teams {
        if !seen_teams.insert(team.abbreviation) {
            return Err(StatsError::dataset(format!(
                "duplicate team {}",
                team.abbreviation
            )));
        }
        if team.division != team.abbreviation.division() {
            return Err(StatsError::dataset(format!(
                "{} listed in {} but belongs to {}",
                team.abbreviation,
                team.division,
                team.abbreviation.division()
            )));
        }
        if team.conference != team.division.conference() {
            return Err(StatsError::dataset(format!(
                "{} listed in {} but {} is an {} division",
                team.abbreviation,
                team.conference,
                team.division,
                team.division.conference()
            )));
        }
    }

    let mut seen_players = HashSet::new();
    for player in &snapshot.players {
        if !seen_players.insert(player.id) {
            return Err(StatsError::dataset(format!(
                "duplicate player id {}",
                player.id
            )));
        }
        if !seen_teams.contains(&player.team) {
            return Err(StatsError::dataset(format!(
                "{} references team {} which is not in the dataset",
                player.name, player.team
            )));
        }
    }

    Ok(())
}
