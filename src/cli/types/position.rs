//! Player position types and utilities.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NFL roster positions.
///
/// ESPN reports a handful of aliases (`OLB`, `ILB`, `FS`, `SS`, `EDGE`, …)
/// which parse into the nearest position here.
///
/// # Examples
///
/// ```rust
/// use nfl_stats::Position;
///
/// let lb: Position = "OLB".parse().unwrap();
/// assert_eq!(lb, Position::LB);
/// assert_eq!(Position::QB.to_string(), "QB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    FB,
    WR,
    TE,
    OT,
    G,
    C,
    DE,
    DT,
    LB,
    CB,
    S,
    K,
    P,
    LS,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::FB => "FB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::OT => "OT",
            Position::G => "G",
            Position::C => "C",
            Position::DE => "DE",
            Position::DT => "DT",
            Position::LB => "LB",
            Position::CB => "CB",
            Position::S => "S",
            Position::K => "K",
            Position::P => "P",
            Position::LS => "LS",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" | "HB" => Ok(Position::RB),
            "FB" => Ok(Position::FB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "OT" | "T" => Ok(Position::OT),
            "G" | "OG" => Ok(Position::G),
            "C" => Ok(Position::C),
            "DE" | "EDGE" => Ok(Position::DE),
            "DT" | "NT" => Ok(Position::DT),
            "LB" | "OLB" | "ILB" | "MLB" => Ok(Position::LB),
            "CB" => Ok(Position::CB),
            "S" | "SS" | "FS" => Ok(Position::S),
            "K" | "PK" => Ok(Position::K),
            "P" => Ok(Position::P),
            "LS" => Ok(Position::LS),
            _ => Err(StatsError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_aliases() {
        assert_eq!("olb".parse::<Position>().unwrap(), Position::LB);
        assert_eq!("ILB".parse::<Position>().unwrap(), Position::LB);
        assert_eq!("FS".parse::<Position>().unwrap(), Position::S);
        assert_eq!("SS".parse::<Position>().unwrap(), Position::S);
        assert_eq!("EDGE".parse::<Position>().unwrap(), Position::DE);
        assert_eq!("NT".parse::<Position>().unwrap(), Position::DT);
        assert_eq!("PK".parse::<Position>().unwrap(), Position::K);
        assert!("XX".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_string_conversion() {
        assert_eq!(Position::QB.to_string(), "QB");
        assert_eq!(Position::WR.to_string(), "WR");
        assert_eq!(Position::CB.to_string(), "CB");
        for text in ["QB", "RB", "WR", "TE", "DE", "DT", "LB", "CB", "S", "K", "P"] {
            assert_eq!(text.parse::<Position>().unwrap().to_string(), text);
        }
    }
}
