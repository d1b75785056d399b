//! Command implementations for the NFL stats CLI

pub mod details;
pub mod fetch;
pub mod leaders;
pub mod output;
pub mod players;
pub mod shell;
pub mod standings;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    cli::{types::time::BUNDLED_SEASON, ViewCmd},
    core::snapshot_path,
    dataset::DatasetStore,
    error::StatsError,
    view::{Criterion, FilterCriteria},
    Result, Season, DATA_ENV_VAR, SEASON_ENV_VAR,
};

/// Snapshot path from `--data`, else `NFL_STATS_DATA`.
pub fn resolve_data_path(data: Option<PathBuf>) -> Option<PathBuf> {
    data.or_else(|| {
        std::env::var_os(DATA_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

/// Season from `--season`, else `NFL_STATS_SEASON`, else the bundled season.
///
/// An unparsable environment value is an error rather than silently ignored.
pub fn resolve_season(season: Option<Season>) -> Result<Season> {
    if let Some(season) = season {
        return Ok(season);
    }
    match std::env::var(SEASON_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => value.parse(),
        _ => Ok(Season::default()),
    }
}

/// Load the dataset for a command.
///
/// An explicit path always wins. Otherwise a fetched snapshot for `season`
/// in the cache is used, then the bundled snapshot when `season` is its
/// season.
pub fn load_store(data: Option<&Path>, season: Season) -> Result<DatasetStore> {
    if let Some(path) = data {
        return DatasetStore::load(path);
    }

    let cached = snapshot_path(season);
    if cached.exists() {
        info!("Using cached snapshot {}", cached.display());
        return DatasetStore::load(&cached);
    }

    if season.as_u16() == BUNDLED_SEASON {
        debug!("Using bundled {} snapshot", BUNDLED_SEASON);
        return DatasetStore::bundled();
    }

    Err(StatsError::MissingSnapshot {
        season: season.as_u16(),
    })
}

/// Parsed `--filter` values plus the typed shorthand options.
pub fn build_criteria<I>(filters: &[String], shorthands: I) -> Result<FilterCriteria>
where
    I: IntoIterator<Item = Option<Criterion>>,
{
    let mut criteria = FilterCriteria::parse_all(filters)?;
    for criterion in shorthands.into_iter().flatten() {
        criteria.push(criterion);
    }
    Ok(criteria)
}

/// Run one view command against a loaded store.
pub fn dispatch_view(store: &DatasetStore, cmd: ViewCmd) -> Result<()> {
    match cmd {
        ViewCmd::Leaders {
            category,
            top,
            team,
            position,
            filters,
            output,
        } => leaders::handle_leaders(
            store,
            leaders::LeadersParams {
                category,
                top,
                team,
                position,
                filters: filters.filters,
                output,
            },
        ),

        ViewCmd::Players {
            filters,
            team,
            position,
            sort,
            asc,
            top,
            output,
        } => players::handle_players(
            store,
            players::PlayersParams {
                filters: filters.filters,
                team,
                position,
                sort,
                ascending: asc,
                top,
                output,
            },
        ),

        ViewCmd::Standings {
            filters,
            division,
            conference,
            min_wins,
            output,
        } => standings::handle_standings(
            store,
            standings::StandingsParams {
                filters: filters.filters,
                division,
                conference,
                min_wins,
                output,
            },
        ),

        ViewCmd::Player { query, team, json } => details::handle_player(store, &query, team, json),

        ViewCmd::Team { team, json } => details::handle_team(store, team, json),
    }
}
