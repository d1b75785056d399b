//! NFL Stats CLI Library
//!
//! Browse a season of NFL player and team statistics: filter, sort and rank
//! the data, then print it or export it as CSV, JSON or XLSX.
//!
//! ## Features
//!
//! - **Dataset Store**: A validated, read-only season snapshot (bundled 2024 data or a fetched one)
//! - **Filtering**: Named `key=value` criteria combined with AND semantics
//! - **Ranking**: Stat leaders, sorted player lists and division standings
//! - **Export**: The current view as CSV, JSON or an XLSX worksheet
//! - **ESPN Fetch**: Download standings and leaders for any season into the cache
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nfl_stats::{
//!     view::{leaders, FilterCriteria, Criterion},
//!     Conference, DatasetStore, StatCategory,
//! };
//!
//! # fn example() -> nfl_stats::Result<()> {
//! let store = DatasetStore::bundled()?;
//! let criteria = FilterCriteria::new().with(Criterion::Conference(Conference::NFC));
//!
//! for entry in leaders(&store, StatCategory::PassingYards, &criteria, 5)? {
//!     println!("{}. {} ({})", entry.rank, entry.name, entry.value);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NFL_STATS_SEASON=2023          # season used when --season is omitted
//! export NFL_STATS_DATA=./season.json   # snapshot used when --data is omitted
//! export NFL_STATS_CACHE_DIR=/tmp/nfl   # where `fetch` stores snapshots
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod dataset;
pub mod error;
pub mod espn;
pub mod export;
pub mod view;

// Re-export commonly used types
pub use cli::types::{
    Conference, Division, ExportFormat, PlayerId, Position, Season, StatCategory, TeamAbbr,
};
pub use dataset::{DatasetStore, LeaderEntry, PlayerRecord, Record, TeamRecord};
pub use error::{ErrorKind, Result, StatsError};
pub use view::View;

pub const DATA_ENV_VAR: &str = "NFL_STATS_DATA";
pub const SEASON_ENV_VAR: &str = "NFL_STATS_SEASON";
