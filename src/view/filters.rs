//! Named filter criteria and the filter operation.
//!
//! Criteria are either built in code or parsed from `key=value` strings as
//! typed on the command line:
//!
//! ```rust
//! use nfl_stats::view::{Criterion, FilterCriteria};
//! use nfl_stats::{Division, TeamAbbr};
//!
//! let criteria = FilterCriteria::parse_all(["division=afc-east", "min_wins=10"]).unwrap();
//! assert_eq!(criteria.len(), 2);
//!
//! let team: Criterion = "team=KC".parse().unwrap();
//! assert_eq!(team, Criterion::Team(TeamAbbr::KC));
//! assert_eq!(
//!     Criterion::parse("division", "AFC East").unwrap(),
//!     Criterion::Division(Division::AfcEast)
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::View;
use crate::{
    cli::types::{Conference, Division, Position, TeamAbbr},
    dataset::{PlayerRecord, Record, TeamRecord},
    error::{Result, StatsError},
};

const EXPECTED_KEYS: &str = "team, division, conference, position, min_wins";

/// The closed set of filter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Team,
    Division,
    Conference,
    Position,
    MinWins,
}

impl FilterKey {
    pub const ALL: [FilterKey; 5] = [
        FilterKey::Team,
        FilterKey::Division,
        FilterKey::Conference,
        FilterKey::Position,
        FilterKey::MinWins,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Team => "team",
            FilterKey::Division => "division",
            FilterKey::Conference => "conference",
            FilterKey::Position => "position",
            FilterKey::MinWins => "min_wins",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase().replace('-', "_");
        FilterKey::ALL
            .into_iter()
            .find(|k| k.as_str() == needle)
            .ok_or_else(|| StatsError::UnknownFilterKey {
                key: s.trim().to_string(),
                expected: EXPECTED_KEYS.to_string(),
            })
    }
}

/// A single predicate with an already validated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Team(TeamAbbr),
    Division(Division),
    Conference(Conference),
    Position(Position),
    MinWins(u32),
}

impl Criterion {
    pub fn key(&self) -> FilterKey {
        match self {
            Criterion::Team(_) => FilterKey::Team,
            Criterion::Division(_) => FilterKey::Division,
            Criterion::Conference(_) => FilterKey::Conference,
            Criterion::Position(_) => FilterKey::Position,
            Criterion::MinWins(_) => FilterKey::MinWins,
        }
    }

    /// Build a criterion from a key name and a raw value.
    ///
    /// Unknown keys fail with `UnknownFilterKey`; values that do not parse
    /// for the key fail with `InvalidFilterValue`.
    pub fn parse(key: &str, value: &str) -> Result<Self> {
        let key = key.parse::<FilterKey>()?;
        let invalid = || StatsError::InvalidFilterValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        let criterion = match key {
            FilterKey::Team => Criterion::Team(value.parse().map_err(|_| invalid())?),
            FilterKey::Division => Criterion::Division(value.parse().map_err(|_| invalid())?),
            FilterKey::Conference => {
                Criterion::Conference(value.parse().map_err(|_| invalid())?)
            }
            FilterKey::Position => Criterion::Position(value.parse().map_err(|_| invalid())?),
            FilterKey::MinWins => {
                Criterion::MinWins(value.trim().parse().map_err(|_| invalid())?)
            }
        };
        Ok(criterion)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Team(team) => write!(f, "team={}", team),
            Criterion::Division(division) => write!(f, "division={}", division),
            Criterion::Conference(conference) => write!(f, "conference={}", conference),
            Criterion::Position(position) => write!(f, "position={}", position),
            Criterion::MinWins(wins) => write!(f, "min_wins={}", wins),
        }
    }
}

impl FromStr for Criterion {
    type Err = StatsError;

    /// Parses `key=value`.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('=') {
            Some((key, value)) => Criterion::parse(key, value),
            None => Err(StatsError::InvalidFilterValue {
                key: s.trim().to_string(),
                value: String::new(),
            }),
        }
    }
}

/// A conjunction of criteria. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    criteria: Vec<Criterion>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn push(&mut self, criterion: Criterion) {
        self.criteria.push(criterion);
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    /// Parse a list of `key=value` strings, failing on the first bad one.
    pub fn parse_all<I, S>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let criteria = items
            .into_iter()
            .map(|item| item.as_ref().parse())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { criteria })
    }
}

impl FromIterator<Criterion> for FilterCriteria {
    fn from_iter<T: IntoIterator<Item = Criterion>>(iter: T) -> Self {
        Self {
            criteria: iter.into_iter().collect(),
        }
    }
}

/// Records that can be tested against filter criteria.
pub trait Filterable: Record {
    /// Whether this record kind can answer criteria with `key`.
    fn supports(key: FilterKey) -> bool;

    /// Only called for criteria whose key is supported.
    fn matches(&self, criterion: &Criterion) -> bool;
}

impl Filterable for PlayerRecord {
    fn supports(key: FilterKey) -> bool {
        !matches!(key, FilterKey::MinWins)
    }

    fn matches(&self, criterion: &Criterion) -> bool {
        match criterion {
            Criterion::Team(team) => self.team == *team,
            Criterion::Division(division) => self.team.division() == *division,
            Criterion::Conference(conference) => self.team.conference() == *conference,
            Criterion::Position(position) => self.position == *position,
            Criterion::MinWins(_) => false,
        }
    }
}

impl Filterable for TeamRecord {
    fn supports(key: FilterKey) -> bool {
        !matches!(key, FilterKey::Position)
    }

    fn matches(&self, criterion: &Criterion) -> bool {
        match criterion {
            Criterion::Team(team) => self.abbreviation == *team,
            Criterion::Division(division) => self.division == *division,
            Criterion::Conference(conference) => self.conference == *conference,
            Criterion::MinWins(wins) => self.wins >= *wins,
            Criterion::Position(_) => false,
        }
    }
}

/// Keep the records satisfying every criterion, in their original order.
///
/// Criteria the record kind cannot answer are rejected before any record is
/// looked at, so the error does not depend on the view's contents.
pub fn filter<'a, R: Filterable>(
    view: View<'a, R>,
    criteria: &FilterCriteria,
) -> Result<View<'a, R>> {
    if let Some(unsupported) = criteria.iter().find(|c| !R::supports(c.key())) {
        return Err(StatsError::InapplicableFilter {
            key: unsupported.key().to_string(),
            kind: R::KIND,
        });
    }
    if criteria.is_empty() {
        return Ok(view);
    }

    let before = view.len();
    let rows: Vec<&R> = view
        .into_iter()
        .filter(|record| criteria.iter().all(|c| record.matches(c)))
        .collect();
    debug!(kind = R::KIND, before, after = rows.len(), "filter applied");

    Ok(View::new(rows))
}
