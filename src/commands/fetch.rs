//! Fetch command implementation

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    core::{is_fresh, snapshot_path, write_string, SNAPSHOT_MAX_AGE},
    error::StatsError,
    espn::{fetch_snapshot, EspnClient},
    Result, Season,
};

/// Handle the fetch command, writing to the cache directory.
pub async fn handle_fetch(season: Season, top: usize, refresh: bool) -> Result<PathBuf> {
    let path = snapshot_path(season);
    let client = EspnClient::new()?;
    fetch_to_path(&client, season, top, refresh, &path).await?;
    Ok(path)
}

/// Fetch a snapshot into `path` unless a fresh one is already there.
///
/// Returns whether a download happened.
pub async fn fetch_to_path(
    client: &EspnClient,
    season: Season,
    top: usize,
    refresh: bool,
    path: &Path,
) -> Result<bool> {
    if !refresh && is_fresh(path, SNAPSHOT_MAX_AGE) {
        info!("Using cached snapshot for {}", season);
        println!(
            "✓ Snapshot for {} is up to date (cached at {})",
            season,
            path.display()
        );
        return Ok(false);
    }

    println!("Fetching {} season data from ESPN...", season);
    let snapshot = fetch_snapshot(client, season, top).await?;

    let json = serde_json::to_string_pretty(&snapshot)?;
    write_string(path, &json).map_err(|source| StatsError::Destination {
        path: path.to_path_buf(),
        source,
    })?;

    println!(
        "✓ Saved {} teams and {} players to {}",
        snapshot.teams.len(),
        snapshot.players.len(),
        path.display()
    );
    Ok(true)
}
