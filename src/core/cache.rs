//! Cached season snapshots on the local file system.
//!
//! Fetched snapshots live under `<cache_dir>/nfl-stats/`, one file per
//! season. `NFL_STATS_CACHE_DIR` replaces the base directory.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::Season;

/// Environment variable overriding the cache base directory.
pub const CACHE_ENV_VAR: &str = "NFL_STATS_CACHE_DIR";

/// Snapshots younger than this are reused by `fetch` without `--refresh`.
pub const SNAPSHOT_MAX_AGE: Duration = Duration::from_secs(600);

/// Base directory for cached files: `$NFL_STATS_CACHE_DIR`, else
/// `~/.cache/nfl-stats` (platform cache dir).
pub fn cache_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CACHE_ENV_VAR).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("nfl-stats")
}

/// Path: <cache_dir>/snapshot_{season}.json
pub fn snapshot_path(season: Season) -> PathBuf {
    cache_dir().join(format!("snapshot_{}.json", season.as_u16()))
}

/// Whether `path` exists and was modified less than `max_age` ago.
pub fn is_fresh(path: &Path, max_age: Duration) -> bool {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|modified| modified.elapsed().ok())
        .is_some_and(|age| age < max_age)
}

/// Write a string to file, creating parent directories
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
