//! Sorting, leaders lists and division standings.

use std::cmp::Ordering;

use tracing::debug;

use super::{filter, FilterCriteria, View};
use crate::{
    cli::types::{Division, StatCategory},
    dataset::{DatasetStore, LeaderEntry, PlayerRecord, Record, TeamRecord},
    error::{Result, StatsError},
};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

/// A comparable value extracted from a record for one sort field.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    /// Stored lowercased; text sorts case-insensitively.
    Text(String),
}

impl SortKey {
    pub fn text(value: &str) -> Self {
        SortKey::Text(value.to_lowercase())
    }

    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Records with a fixed set of named sort fields.
pub trait Sortable: Record {
    const SORT_FIELDS: &'static [&'static str];

    /// `None` for a field outside `SORT_FIELDS`.
    fn sort_key(&self, field: &str) -> Option<SortKey>;
}

impl Sortable for PlayerRecord {
    const SORT_FIELDS: &'static [&'static str] = &[
        "passing_yards",
        "passing_touchdowns",
        "rushing_yards",
        "receiving_yards",
        "receptions",
        "sacks",
        "interceptions",
        "name",
    ];

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        if field == "name" {
            return Some(SortKey::text(&self.name));
        }
        StatCategory::ALL
            .into_iter()
            .find(|c| c.field() == field)
            .map(|c| SortKey::Number(self.stat(c)))
    }
}

impl Sortable for TeamRecord {
    const SORT_FIELDS: &'static [&'static str] = &[
        "wins",
        "losses",
        "ties",
        "win_percent",
        "points_for",
        "points_against",
        "point_differential",
        "name",
    ];

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        let key = match field {
            "wins" => SortKey::Number(self.wins.into()),
            "losses" => SortKey::Number(self.losses.into()),
            "ties" => SortKey::Number(self.ties.into()),
            "win_percent" => SortKey::Number(self.win_percent()),
            "points_for" => SortKey::Number(self.points_for.into()),
            "points_against" => SortKey::Number(self.points_against.into()),
            "point_differential" => SortKey::Number(self.point_differential() as f64),
            "name" => SortKey::text(&self.name),
            _ => return None,
        };
        Some(key)
    }
}

fn unknown_field<R: Sortable>(field: &str) -> StatsError {
    StatsError::UnknownSortField {
        field: field.to_string(),
        kind: R::KIND,
        expected: R::SORT_FIELDS.join(", "),
    }
}

/// Order a view by `field`. Equal keys keep their relative order.
///
/// Field names are matched case-insensitively and `-` is read as `_`.
pub fn sort<'a, R: Sortable>(
    view: View<'a, R>,
    field: &str,
    direction: SortDirection,
) -> Result<View<'a, R>> {
    let normalized = field.trim().to_lowercase().replace('-', "_");
    let field_name = R::SORT_FIELDS
        .iter()
        .copied()
        .find(|f| *f == normalized)
        .ok_or_else(|| unknown_field::<R>(field))?;

    let mut keyed = view
        .into_iter()
        .map(|record| {
            record
                .sort_key(field_name)
                .map(|key| (key, record))
                .ok_or_else(|| unknown_field::<R>(field))
        })
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|(a, _), (b, _)| match direction {
        SortDirection::Ascending => a.compare(b),
        SortDirection::Descending => b.compare(a),
    });
    debug!(kind = R::KIND, field = field_name, ?direction, rows = keyed.len(), "sorted");

    Ok(View::new(keyed.into_iter().map(|(_, record)| record).collect()))
}

/// Top `top` players for `category`, after applying `criteria`.
///
/// Players without a positive value in the category are left out, so a
/// list may hold fewer than `top` rows.
pub fn leaders(
    store: &DatasetStore,
    category: StatCategory,
    criteria: &FilterCriteria,
    top: usize,
) -> Result<Vec<LeaderEntry>> {
    let filtered = filter(store.players(), criteria)?;
    let ranked = sort(filtered, category.field(), SortDirection::Descending)?;

    let entries = ranked
        .iter()
        .filter(|player| player.stat(category) > 0.0)
        .take(top)
        .zip(1u32..)
        .map(|(player, rank)| LeaderEntry {
            category,
            rank,
            player_id: player.id,
            name: player.name.clone(),
            position: player.position,
            team: store
                .team_of(player)
                .map_or_else(|| player.team.name().to_string(), |t| t.name.clone()),
            team_abbr: player.team,
            value: player.stat(category),
        })
        .collect();

    Ok(entries)
}

/// One division's teams in standings order.
#[derive(Debug, Clone)]
pub struct DivisionStandings<'a> {
    pub division: Division,
    pub teams: View<'a, TeamRecord>,
}

/// Group teams by division in display order, best record first.
///
/// Within a division teams are ordered by wins, then win percentage, both
/// descending; equal records keep their input order. Divisions with no
/// team in the view are omitted.
pub fn standings(view: View<'_, TeamRecord>) -> Vec<DivisionStandings<'_>> {
    Division::ALL
        .into_iter()
        .filter_map(|division| {
            let mut teams: Vec<&TeamRecord> =
                view.iter().filter(|t| t.division == division).collect();
            if teams.is_empty() {
                return None;
            }
            teams.sort_by(|a, b| {
                b.wins
                    .cmp(&a.wins)
                    .then_with(|| b.win_percent().total_cmp(&a.win_percent()))
            });
            Some(DivisionStandings {
                division,
                teams: View::new(teams),
            })
        })
        .collect()
}

/// Concatenate grouped standings into one view for export.
pub fn flatten_standings<'a>(groups: &[DivisionStandings<'a>]) -> View<'a, TeamRecord> {
    View::new(groups.iter().flat_map(|g| g.teams.iter()).collect())
}
