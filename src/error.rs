//! Error types for the NFL stats CLI

use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

/// Broad classification used when reporting an error to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Format,
    Io,
    Dataset,
    NotFound,
    Fetch,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::Input => "input",
            ErrorKind::Format => "format",
            ErrorKind::Io => "io",
            ErrorKind::Dataset => "dataset",
            ErrorKind::NotFound => "not found",
            ErrorKind::Fetch => "fetch",
        };
        write!(f, "{}", s)
    }
}

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Unknown filter key '{key}' (expected one of: {expected})")]
    UnknownFilterKey { key: String, expected: String },

    #[error("Filter '{key}' does not apply to {kind} records")]
    InapplicableFilter { key: String, kind: &'static str },

    #[error("Invalid value '{value}' for filter '{key}'")]
    InvalidFilterValue { key: String, value: String },

    #[error("Unknown sort field '{field}' for {kind} records (expected one of: {expected})")]
    UnknownSortField {
        field: String,
        kind: &'static str,
        expected: String,
    },

    #[error("Invalid team: {team}")]
    InvalidTeam { team: String },

    #[error("Invalid division: {division}")]
    InvalidDivision { division: String },

    #[error("Invalid conference: {conference}")]
    InvalidConference { conference: String },

    #[error("Invalid stat category: {category}")]
    InvalidCategory { category: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Unsupported export format '{format}' (expected csv, json or xlsx)")]
    UnsupportedFormat { format: String },

    #[error("Cannot determine export format for {path}; pass --format")]
    UnknownFormatFor { path: PathBuf },

    #[error("Cannot write {path}: {source}")]
    Destination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Dataset error: {message}")]
    Dataset { message: String },

    #[error("No snapshot available for season {season}; run `nfl-stats fetch --season {season}`")]
    MissingSnapshot { season: u16 },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Team not found: {team}")]
    TeamNotFound { team: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected ESPN payload: {message}")]
    Payload { message: String },
}

impl StatsError {
    pub fn dataset(message: impl Into<String>) -> Self {
        StatsError::Dataset {
            message: message.into(),
        }
    }

    pub fn payload(message: impl Into<String>) -> Self {
        StatsError::Payload {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            StatsError::UnknownFilterKey { .. }
            | StatsError::InapplicableFilter { .. }
            | StatsError::InvalidFilterValue { .. }
            | StatsError::UnknownSortField { .. }
            | StatsError::InvalidTeam { .. }
            | StatsError::InvalidDivision { .. }
            | StatsError::InvalidConference { .. }
            | StatsError::InvalidCategory { .. }
            | StatsError::InvalidPosition { .. }
            | StatsError::InvalidNumber(_) => ErrorKind::Input,
            StatsError::UnsupportedFormat { .. } | StatsError::UnknownFormatFor { .. } => {
                ErrorKind::Format
            }
            StatsError::Destination { .. } | StatsError::Io(_) => ErrorKind::Io,
            StatsError::Json(_)
            | StatsError::Csv(_)
            | StatsError::Xlsx(_)
            | StatsError::Dataset { .. }
            | StatsError::MissingSnapshot { .. } => ErrorKind::Dataset,
            StatsError::PlayerNotFound { .. } | StatsError::TeamNotFound { .. } => {
                ErrorKind::NotFound
            }
            StatsError::Http(_) | StatsError::Payload { .. } => ErrorKind::Fetch,
        }
    }
}
