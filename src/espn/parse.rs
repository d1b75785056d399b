//! Parsing of ESPN core API payloads into dataset records.
//!
//! The core API is a graph of JSON documents linked by `$ref` URLs. These
//! functions work on single documents; following references is left to
//! [`super::fetch`].

use serde_json::Value;

use crate::{
    cli::types::{PlayerId, Position, StatCategory, TeamAbbr},
    dataset::{PlayerRecord, TeamRecord},
    error::{Result, StatsError},
};

/// A leaders-list slot whose athlete has not been resolved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderRef {
    pub category: StatCategory,
    pub athlete_ref: String,
    pub value: f64,
}

/// The `$ref` URL of a linked document.
pub fn ref_url(value: &Value) -> Option<&str> {
    value.get("$ref")?.as_str()
}

/// Trailing numeric id of a reference URL, ignoring any query string.
///
/// `.../teams/12?lang=en` → `12`
pub fn ref_id(url: &str) -> Option<u64> {
    url.split('?')
        .next()?
        .trim_end_matches('/')
        .rsplit('/')
        .next()?
        .parse()
        .ok()
}

/// Value of the named entry in an ESPN `stats` array.
pub fn stat_value(stats: &Value, name: &str) -> Option<f64> {
    stats
        .as_array()?
        .iter()
        .find(|s| s.get("name").and_then(Value::as_str) == Some(name))?
        .get("value")?
        .as_f64()
}

fn str_field<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

fn string_field(value: &Value, pointer: &str) -> Option<String> {
    str_field(value, pointer).map(str::to_string)
}

fn count(stats: &Value, name: &str) -> u32 {
    stat_value(stats, name).map_or(0, |v| v.max(0.0).round() as u32)
}

/// Entries of a conference standings document.
pub fn standing_entries(payload: &Value) -> Result<&[Value]> {
    payload
        .get("standings")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| StatsError::payload("standings document has no `standings` array"))
}

fn find_record<'a>(records: &'a [Value], names: &[&str], fallback: usize) -> Option<&'a Value> {
    records
        .iter()
        .find(|r| {
            ["type", "name"].iter().any(|key| {
                r.get(*key)
                    .and_then(Value::as_str)
                    .is_some_and(|v| names.iter().any(|n| v.eq_ignore_ascii_case(n)))
            })
        })
        .or_else(|| records.get(fallback))
}

/// Resolve a team's abbreviation from its team document.
pub fn team_abbr(team: &Value) -> Option<TeamAbbr> {
    str_field(team, "/abbreviation")
        .and_then(|abbr| abbr.parse().ok())
        .or_else(|| {
            let id = match team.get("id")? {
                Value::String(s) => s.parse().ok()?,
                other => other.as_u64()?,
            };
            TeamAbbr::from_espn_id(u32::try_from(id).ok()?)
        })
}

/// Build a team record from one standings entry and its team document.
///
/// The first record of the entry carries the overall stats; home and away
/// summaries are looked up by type, falling back to the second and third
/// records.
pub fn parse_team_standing(entry: &Value, team: &Value) -> Result<TeamRecord> {
    let abbreviation = team_abbr(team)
        .ok_or_else(|| StatsError::payload("team document without a known abbreviation"))?;

    let records = entry
        .get("records")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let stats = records
        .first()
        .and_then(|r| r.get("stats"))
        .ok_or_else(|| StatsError::payload(format!("no overall record for {}", abbreviation)))?;

    if stat_value(stats, "wins").is_none() || stat_value(stats, "losses").is_none() {
        return Err(StatsError::payload(format!(
            "overall record for {} lacks wins or losses",
            abbreviation
        )));
    }

    let mut record = TeamRecord::new(
        abbreviation,
        count(stats, "wins"),
        count(stats, "losses"),
        count(stats, "ties"),
    );
    if let Some(name) = string_field(team, "/displayName") {
        record.name = name;
    }
    record.points_for = count(stats, "pointsFor");
    record.points_against = count(stats, "pointsAgainst");
    record.home_record =
        find_record(records, &["home"], 1).and_then(|r| string_field(r, "/summary"));
    record.away_record =
        find_record(records, &["road", "away"], 2).and_then(|r| string_field(r, "/summary"));
    record.venue = string_field(team, "/venue/fullName");
    record.city = string_field(team, "/venue/address/city");
    record.state = string_field(team, "/venue/address/state");
    record.logo = string_field(team, "/logos/0/href");

    Ok(record)
}

/// Leader slots for the supported categories, at most `top` per category.
pub fn parse_leaders(payload: &Value, top: usize) -> Result<Vec<LeaderRef>> {
    let categories = payload
        .get("categories")
        .and_then(Value::as_array)
        .ok_or_else(|| StatsError::payload("leaders document has no `categories` array"))?;

    let mut refs = Vec::new();
    for category in categories {
        let Some(stat) = str_field(category, "/name").and_then(StatCategory::from_espn_name) else {
            continue;
        };
        let leaders = category
            .get("leaders")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        refs.extend(leaders.iter().take(top).filter_map(|leader| {
            Some(LeaderRef {
                category: stat,
                athlete_ref: leader.get("athlete").and_then(ref_url)?.to_string(),
                value: leader.get("value")?.as_f64()?,
            })
        }));
    }

    Ok(refs)
}

/// Build a player record, without stats, from an athlete document.
pub fn parse_athlete(athlete: &Value) -> Result<PlayerRecord> {
    let id = match athlete.get("id") {
        Some(Value::String(s)) => s.parse().ok(),
        Some(other) => other.as_u64(),
        None => None,
    }
    .ok_or_else(|| StatsError::payload("athlete document without an id"))?;

    let name = str_field(athlete, "/displayName")
        .or_else(|| str_field(athlete, "/fullName"))
        .ok_or_else(|| StatsError::payload(format!("athlete {} has no name", id)))?;

    let position: Position = str_field(athlete, "/position/abbreviation")
        .ok_or_else(|| StatsError::payload(format!("{} has no position", name)))?
        .parse()?;

    let team = athlete
        .get("team")
        .and_then(ref_url)
        .and_then(ref_id)
        .and_then(|id| u32::try_from(id).ok())
        .and_then(TeamAbbr::from_espn_id)
        .ok_or_else(|| StatsError::payload(format!("{} has no known team", name)))?;

    let mut player = PlayerRecord::new(PlayerId::new(id), name, position, team);
    player.jersey = string_field(athlete, "/jersey");
    player.date_of_birth = string_field(athlete, "/displayDOB");
    player.debut_year = athlete
        .get("debutYear")
        .and_then(Value::as_u64)
        .and_then(|y| u16::try_from(y).ok());
    player.draft = string_field(athlete, "/draft/displayText");
    player.headshot = string_field(athlete, "/headshot/href");

    Ok(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::Division;
    use serde_json::json;

    fn standing_entry() -> Value {
        json!({
            "team": { "$ref": "http://sports.core.api.espn.com/v2/sports/football/leagues/nfl/seasons/2024/teams/12?lang=en&region=us" },
            "records": [
                {
                    "name": "overall",
                    "stats": [
                        { "name": "wins", "value": 15.0 },
                        { "name": "losses", "value": 2.0 },
                        { "name": "ties", "value": 0.0 },
                        { "name": "pointsFor", "value": 385.0 },
                        { "name": "pointsAgainst", "value": 326.0 }
                    ]
                },
                { "name": "Home", "type": "home", "summary": "8-0" },
                { "name": "Road", "type": "road", "summary": "7-2" }
            ]
        })
    }

    fn team_document() -> Value {
        json!({
            "id": "12",
            "abbreviation": "KC",
            "displayName": "Kansas City Chiefs",
            "venue": {
                "fullName": "GEHA Field at Arrowhead Stadium",
                "address": { "city": "Kansas City", "state": "MO" }
            },
            "logos": [ { "href": "https://a.espncdn.com/i/teamlogos/nfl/500/kc.png" } ]
        })
    }

    #[test]
    fn test_ref_helpers() {
        assert_eq!(
            ref_id(
                "http://sports.core.api.espn.com/v2/sports/football/leagues/nfl/seasons/2024/teams/12?lang=en"
            ),
            Some(12)
        );
        assert_eq!(ref_id("http://x/athletes/3139477"), Some(3139477));
        assert_eq!(ref_id("http://x/athletes/"), None);
        assert_eq!(ref_url(&json!({ "$ref": "http://x" })), Some("http://x"));
        assert_eq!(ref_url(&json!({})), None);
    }

    #[test]
    fn test_parse_team_standing() {
        let team = parse_team_standing(&standing_entry(), &team_document()).unwrap();

        assert_eq!(team.abbreviation, TeamAbbr::KC);
        assert_eq!(team.division, Division::AfcWest);
        assert_eq!((team.wins, team.losses, team.ties), (15, 2, 0));
        assert_eq!((team.points_for, team.points_against), (385, 326));
        assert_eq!(team.home_record.as_deref(), Some("8-0"));
        assert_eq!(team.away_record.as_deref(), Some("7-2"));
        assert_eq!(team.city.as_deref(), Some("Kansas City"));
        assert!(team.logo.unwrap().ends_with("kc.png"));
    }

    #[test]
    fn test_home_away_fall_back_to_position() {
        let mut entry = standing_entry();
        entry["records"][1] = json!({ "summary": "6-2" });
        entry["records"][2] = json!({ "summary": "9-0" });

        let team = parse_team_standing(&entry, &team_document()).unwrap();
        assert_eq!(team.home_record.as_deref(), Some("6-2"));
        assert_eq!(team.away_record.as_deref(), Some("9-0"));
    }

    #[test]
    fn test_team_abbreviation_falls_back_to_id() {
        let team = json!({ "id": "28", "abbreviation": "WFT" });
        assert_eq!(team_abbr(&team), Some(TeamAbbr::WSH));
        assert_eq!(team_abbr(&json!({ "abbreviation": "XYZ" })), None);
    }

    #[test]
    fn test_standing_without_wins_is_rejected() {
        let entry = json!({ "records": [ { "stats": [ { "name": "ties", "value": 1.0 } ] } ] });
        assert!(matches!(
            parse_team_standing(&entry, &team_document()),
            Err(StatsError::Payload { .. })
        ));
        assert!(standing_entries(&json!({ "items": [] })).is_err());
    }

    #[test]
    fn test_parse_leaders_keeps_supported_categories() {
        let payload = json!({
            "categories": [
                {
                    "name": "passingYards",
                    "leaders": [
                        { "value": 4918.0, "athlete": { "$ref": "http://x/athletes/3915511" } },
                        { "value": 4629.0, "athlete": { "$ref": "http://x/athletes/3046779" } },
                        { "value": 4500.0, "athlete": { "$ref": "http://x/athletes/3052587" } }
                    ]
                },
                {
                    "name": "totalTackles",
                    "leaders": [ { "value": 176.0, "athlete": { "$ref": "http://x/athletes/1" } } ]
                },
                {
                    "name": "sacks",
                    "leaders": [
                        { "value": 17.5, "athlete": { "$ref": "http://x/athletes/3915187" } }
                    ]
                }
            ]
        });

        let refs = parse_leaders(&payload, 2).unwrap();
        assert_eq!(refs.len(), 3);
        assert_eq!(refs[0].category, StatCategory::PassingYards);
        assert_eq!(refs[1].value, 4629.0);
        assert_eq!(refs[2].category, StatCategory::Sacks);
        assert_eq!(refs[2].athlete_ref, "http://x/athletes/3915187");
    }

    #[test]
    fn test_parse_athlete() {
        let athlete = json!({
            "id": "3139477",
            "displayName": "Patrick Mahomes",
            "jersey": "15",
            "displayDOB": "17/9/1995",
            "debutYear": 2017,
            "position": { "abbreviation": "QB" },
            "team": { "$ref": "http://x/seasons/2024/teams/12?lang=en" },
            "draft": { "displayText": "2017: Rd 1, Pk 10 (KC)" },
            "headshot": { "href": "https://a.espncdn.com/i/headshots/nfl/players/full/3139477.png" }
        });

        let player = parse_athlete(&athlete).unwrap();
        assert_eq!(player.id, PlayerId::new(3139477));
        assert_eq!(player.team, TeamAbbr::KC);
        assert_eq!(player.position, Position::QB);
        assert_eq!(player.debut_year, Some(2017));
        assert_eq!(player.draft.as_deref(), Some("2017: Rd 1, Pk 10 (KC)"));
        assert_eq!(player.passing_yards, 0);
    }

    #[test]
    fn test_parse_athlete_without_team_fails() {
        let athlete = json!({
            "id": 1,
            "displayName": "Free Agent",
            "position": { "abbreviation": "WR" }
        });
        assert!(parse_athlete(&athlete).is_err());
    }
}
