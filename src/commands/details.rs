//! Detail views for a single player or team

use crate::{
    cli::types::TeamAbbr,
    dataset::{DatasetStore, PlayerRecord, TeamRecord},
    error::StatsError,
    PlayerId, Result,
};

use super::output::{render_player_detail, render_team_detail};

/// Outcome of a player lookup.
#[derive(Debug)]
pub enum PlayerMatch<'a> {
    One(&'a PlayerRecord),
    /// Several players contain the query; none matches it exactly.
    Many(Vec<&'a PlayerRecord>),
}

/// Look a player up by id, then by exact name, then by a unique name fragment.
pub fn find_player<'a>(
    store: &'a DatasetStore,
    query: &str,
    team: Option<TeamAbbr>,
) -> Result<PlayerMatch<'a>> {
    let on_team = |p: &PlayerRecord| team.map_or(true, |t| p.team == t);

    if let Ok(id) = query.parse::<PlayerId>() {
        if let Some(player) = store.player(id).filter(|p| on_team(*p)) {
            return Ok(PlayerMatch::One(player));
        }
    }

    let candidates = store.find_players(query, team);
    if let Some(exact) = candidates
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(query.trim()))
    {
        return Ok(PlayerMatch::One(*exact));
    }

    match candidates.len() {
        0 => Err(StatsError::PlayerNotFound {
            name: query.to_string(),
        }),
        1 => Ok(PlayerMatch::One(candidates[0])),
        _ => Ok(PlayerMatch::Many(candidates)),
    }
}

/// Handle the player detail command
pub fn handle_player(
    store: &DatasetStore,
    query: &str,
    team: Option<TeamAbbr>,
    as_json: bool,
) -> Result<()> {
    match find_player(store, query, team)? {
        PlayerMatch::One(player) if as_json => {
            println!("{}", serde_json::to_string_pretty(player)?);
        }
        PlayerMatch::One(player) => {
            println!("{}", render_player_detail(player, store.team_of(player)));
        }
        PlayerMatch::Many(candidates) => {
            println!("Multiple players match '{}':", query);
            for p in candidates {
                println!("  {:>8}  {} ({}, {})", p.id, p.name, p.position, p.team);
            }
            println!("Use the player id or --team to pick one.");
        }
    }
    Ok(())
}

pub fn find_team(store: &DatasetStore, team: TeamAbbr) -> Result<&TeamRecord> {
    store.team(team).ok_or_else(|| StatsError::TeamNotFound {
        team: team.to_string(),
    })
}

/// Handle the team detail command
pub fn handle_team(store: &DatasetStore, team: TeamAbbr, as_json: bool) -> Result<()> {
    let record = find_team(store, team)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    let roster: Vec<&PlayerRecord> = store.players().iter().filter(|p| p.team == team).collect();
    println!("{}", render_team_detail(record, &roster));
    Ok(())
}
