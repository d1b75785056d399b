//! Export format selection.

use crate::error::{Result, StatsError};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Target format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Format implied by a destination's file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .ok_or_else(|| StatsError::UnknownFormatFor {
                path: path.to_path_buf(),
            })
    }

    /// An explicit format name wins over the destination extension.
    pub fn resolve(explicit: Option<&str>, destination: &Path) -> Result<Self> {
        match explicit {
            Some(name) => name.parse(),
            None => Self::from_path(destination),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension().to_uppercase())
    }
}

impl FromStr for ExportFormat {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            _ => Err(StatsError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::path::PathBuf;

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("excel".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);

        let err = "pdf".parse::<ExportFormat>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("standings.XLSX")).unwrap(),
            ExportFormat::Xlsx
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("/tmp/leaders.csv")).unwrap(),
            ExportFormat::Csv
        );
        assert!(ExportFormat::from_path(Path::new("leaders")).is_err());
        assert!(ExportFormat::from_path(Path::new("leaders.txt")).is_err());
    }

    #[test]
    fn test_explicit_format_wins() {
        let path = PathBuf::from("out.csv");
        assert_eq!(
            ExportFormat::resolve(Some("json"), &path).unwrap(),
            ExportFormat::Json
        );
        assert_eq!(ExportFormat::resolve(None, &path).unwrap(), ExportFormat::Csv);
        assert!(ExportFormat::resolve(Some("yaml"), &path).is_err());
    }
}
