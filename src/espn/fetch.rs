//! Sequential download of a season snapshot.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{info, warn};

use super::http::EspnClient;
use super::parse::{self, LeaderRef};
use crate::{
    cli::types::{Conference, PlayerId, Season},
    dataset::{validate, PlayerRecord, Snapshot, TeamRecord},
    error::{Result, StatsError},
};


/// Download standings and the top `top` leaders per category for `season`.
///
/// Requests run one at a time. A team or athlete whose document cannot be
/// fetched or parsed is skipped with a warning; failures of the standings
/// or leaders documents themselves abort the fetch.
pub async fn fetch_snapshot(client: &EspnClient, season: Season, top: usize) -> Result<Snapshot> {
    info!("Fetching {} season from {}", season, client.base_url());
    let teams = fetch_teams(client, season).await?;
    if teams.is_empty() {
        return Err(StatsError::payload(format!("no standings returned for {}", season)));
    }

    let players = fetch_players(client, season, top, &teams).await?;
    info!(
        "Fetched {} teams and {} players for {}",
        teams.len(),
        players.len(),
        season
    );

    let snapshot = Snapshot {
        season,
        teams,
        players,
    };
    validate(&snapshot)?;
    Ok(snapshot)
}

async fn fetch_teams(client: &EspnClient, season: Season) -> Result<Vec<TeamRecord>> {
    let mut teams: Vec<TeamRecord> = Vec::new();

    for conference in Conference::ALL {
        info!("Fetching {} standings for {}", conference, season);
        let url = client.url(&format!(
            "/seasons/{}/types/2/groups/{}/standings/0?lang=en&region=us",
            season,
            conference.espn_group_id()
        ));
        let payload = client.get_json(&url).await?;

        for entry in parse::standing_entries(&payload)? {
            match fetch_team(client, entry).await {
                Ok(team) if teams.iter().any(|t| t.abbreviation == team.abbreviation) => {
                    warn!("{} listed twice in standings", team.abbreviation);
                }
                Ok(team) => teams.push(team),
                Err(e) => warn!("Error processing team data: {}", e),
            }
        }
    }

    Ok(teams)
}

async fn fetch_team(client: &EspnClient, entry: &Value) -> Result<TeamRecord> {
    let team_ref = entry
        .get("team")
        .and_then(parse::ref_url)
        .ok_or_else(|| StatsError::payload("standings entry without a team $ref"))?;
    let team = client.get_json(team_ref).await?;
    parse::parse_team_standing(entry, &team)
}

async fn fetch_players(
    client: &EspnClient,
    season: Season,
    top: usize,
    teams: &[TeamRecord],
) -> Result<Vec<PlayerRecord>> {
    info!("Fetching {} season leaders", season);
    let url = client.url(&format!("/seasons/{}/types/2/leaders", season));
    let payload = client.get_json(&url).await?;
    let leaders: Vec<LeaderRef> = parse::parse_leaders(&payload, top)?;

    // One request per athlete even when they lead several categories.
    let mut athletes: HashMap<String, Option<PlayerRecord>> = HashMap::new();
    let mut players: Vec<PlayerRecord> = Vec::new();
    let mut index: HashMap<PlayerId, usize> = HashMap::new();

    for leader in leaders {
        if !athletes.contains_key(&leader.athlete_ref) {
            let athlete = match client.get_json(&leader.athlete_ref).await {
                Ok(doc) => parse::parse_athlete(&doc),
                Err(e) => Err(e),
            };
            let athlete = match athlete {
                Ok(player) if teams.iter().any(|t| t.abbreviation == player.team) => Some(player),
                Ok(player) => {
                    warn!("Skipping {}: team {} not in standings", player.name, player.team);
                    None
                }
                Err(e) => {
                    warn!("Skipping athlete {}: {}", leader.athlete_ref, e);
                    None
                }
            };
            athletes.insert(leader.athlete_ref.clone(), athlete);
        }

        let Some(Some(athlete)) = athletes.get(&leader.athlete_ref) else {
            continue;
        };

        match index.get(&athlete.id) {
            Some(&i) => players[i].set_stat(leader.category, leader.value),
            None => {
                let mut player = athlete.clone();
                player.set_stat(leader.category, leader.value);
                index.insert(player.id, players.len());
                players.push(player);
            }
        }
    }

    Ok(players)
}
