//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use types::{Conference, Division, Position, Season, StatCategory, TeamAbbr};

/// Repeatable `key=value` filters shared by the list commands
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Filter as `key=value` (repeatable). Keys: team, division, conference, position, min_wins.
    #[clap(long = "filter", short = 'F', value_name = "KEY=VALUE")]
    pub filters: Vec<String>,
}

/// Where a view goes: printed as text, printed as JSON, or exported to a file
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Export the view to a file instead of printing it.
    #[clap(long, short = 'o', value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export format: csv, json or xlsx. Defaults to the file extension.
    #[clap(long, requires = "export")]
    pub format: Option<String>,

    /// Print the view as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

/// Commands that render a view of the loaded dataset.
///
/// Used both as top-level subcommands and as the grammar of the shell.
#[derive(Debug, Clone, Subcommand)]
pub enum ViewCmd {
    /// Top players in a statistical category (all categories when omitted).
    Leaders {
        /// Stat category.
        #[clap(long, short, value_enum)]
        category: Option<StatCategory>,

        /// Number of players per category.
        #[clap(long, short = 'n', default_value_t = 5)]
        top: usize,

        /// Only players on this team.
        #[clap(long, short)]
        team: Option<TeamAbbr>,

        /// Only players at this position.
        #[clap(long, short)]
        position: Option<Position>,

        #[clap(flatten)]
        filters: FilterArgs,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// List players, optionally sorted by a stat field.
    Players {
        #[clap(flatten)]
        filters: FilterArgs,

        /// Only players on this team.
        #[clap(long, short)]
        team: Option<TeamAbbr>,

        /// Only players at this position.
        #[clap(long, short)]
        position: Option<Position>,

        /// Sort field, e.g. `passing_yards`, `sacks` or `name`. Descending unless `--asc`.
        #[clap(long)]
        sort: Option<String>,

        /// Sort ascending.
        #[clap(long)]
        asc: bool,

        /// Keep only the first N rows.
        #[clap(long, short = 'n')]
        top: Option<usize>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Team standings grouped by division.
    Standings {
        #[clap(flatten)]
        filters: FilterArgs,

        /// Only this division, e.g. "AFC East" or afc-east.
        #[clap(long, short)]
        division: Option<Division>,

        /// Only this conference.
        #[clap(long, short)]
        conference: Option<Conference>,

        /// Only teams with at least this many wins.
        #[clap(long)]
        min_wins: Option<u32>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Detail view for one player, by id or name.
    Player {
        /// Player id, full name or part of a name.
        query: String,

        /// Narrow name matches to one team.
        #[clap(long, short)]
        team: Option<TeamAbbr>,

        /// Output the player record as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Detail view for one team.
    Team {
        /// Team abbreviation or full name.
        team: TeamAbbr,

        /// Output the team record as JSON.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nfl-stats", version, about = "Browse NFL player and team statistics")]
pub struct App {
    /// Snapshot file to load (or set `NFL_STATS_DATA` env var).
    #[clap(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Season year (or set `NFL_STATS_SEASON` env var). Defaults to 2024.
    #[clap(long, short, global = true)]
    pub season: Option<Season>,

    /// Log more: `-v` for info, `-vv` for debug. `RUST_LOG` overrides.
    #[clap(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(flatten)]
    View(ViewCmd),

    /// Download a season snapshot from ESPN into the cache.
    Fetch {
        /// Leaders kept per stat category.
        #[clap(long, short = 'n', default_value_t = 5)]
        top: usize,

        /// Fetch even if the cached snapshot is still fresh.
        #[clap(long)]
        refresh: bool,
    },

    /// Interactive session: one view command per line, `quit` to leave.
    Shell,
}

/// One line typed into the shell.
#[derive(Debug, Parser)]
#[clap(name = "nfl>", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[clap(subcommand)]
    pub command: ViewCmd,
}
