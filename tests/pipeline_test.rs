//! End-to-end tests: bundled dataset through filters, ranking and export

use std::io::Cursor;

use calamine::{open_workbook, Data, Reader, Xlsx};
use nfl_stats::{
    commands::{
        leaders::{collect_leaders, LeadersParams},
        players::{players_view, PlayersParams},
        shell::run_shell,
        standings::{standings_groups, StandingsParams},
    },
    export::export,
    view::flatten_standings,
    Conference, DatasetStore, ErrorKind, ExportFormat, Position, Record, StatCategory, TeamAbbr,
    TeamRecord, View,
};
use tempfile::tempdir;

#[test]
fn test_nfc_passing_leaders() {
    let store = DatasetStore::bundled().unwrap();
    let entries = collect_leaders(
        &store,
        &LeadersParams {
            category: Some(StatCategory::PassingYards),
            top: 3,
            filters: vec!["conference=NFC".to_string()],
            ..Default::default()
        },
    )
    .unwrap();

    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Jared Goff", "Baker Mayfield", "Geno Smith"]);
    assert_eq!(entries[0].team, "Detroit Lions");
}

#[test]
fn test_all_categories_when_none_given() {
    let store = DatasetStore::bundled().unwrap();
    let entries = collect_leaders(
        &store,
        &LeadersParams {
            top: 1,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(entries.len(), StatCategory::ALL.len());
    let sacks = entries
        .iter()
        .find(|e| e.category == StatCategory::Sacks)
        .unwrap();
    assert_eq!(sacks.name, "Trey Hendrickson");
    assert_eq!(sacks.value, 17.5);
}

#[test]
fn test_inapplicable_filter_is_input_error() {
    let store = DatasetStore::bundled().unwrap();
    let err = players_view(
        &store,
        &PlayersParams {
            filters: vec!["min_wins=10".to_string()],
            ..Default::default()
        },
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);

    let err = standings_groups(
        &store,
        &StandingsParams {
            filters: vec!["position=QB".to_string()],
            ..Default::default()
        },
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
}

#[test]
fn test_standings_export_to_csv() {
    let store = DatasetStore::bundled().unwrap();
    let groups = standings_groups(
        &store,
        &StandingsParams {
            conference: Some(Conference::AFC),
            ..Default::default()
        },
    )
    .unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("afc.csv");

    export(&flatten_standings(&groups), ExportFormat::Csv, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, TeamRecord::COLUMNS);

    let rows: Vec<TeamRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 16);
    // AFC North comes first in standings order, led by BAL.
    assert_eq!(rows[0].abbreviation, TeamAbbr::BAL);
    assert!(rows.iter().all(|t| t.conference == Conference::AFC));
}

#[test]
fn test_players_export_to_json_and_xlsx() {
    let store = DatasetStore::bundled().unwrap();
    let view = players_view(
        &store,
        &PlayersParams {
            position: Some(Position::RB),
            sort: Some("rushing_yards".to_string()),
            top: Some(5),
            ..Default::default()
        },
    )
    .unwrap();
    let dir = tempdir().unwrap();

    let json_path = dir.path().join("backs.json");
    export(&view, ExportFormat::Json, &json_path).unwrap();
    let rows: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["name"], "Saquon Barkley");
    assert_eq!(rows[0]["rushing_yards"], 2005);

    let xlsx_path = dir.path().join("backs.xlsx");
    export(&view, ExportFormat::Xlsx, &xlsx_path).unwrap();
    let mut workbook: Xlsx<_> = open_workbook(&xlsx_path).unwrap();
    let range = workbook.worksheet_range("Players").unwrap();
    assert_eq!(range.height(), 6);
    assert_eq!(range.get((1, 1)), Some(&Data::String("Saquon Barkley".to_string())));
}

#[test]
fn test_export_empty_view_keeps_header() {
    let teams: Vec<TeamRecord> = Vec::new();
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    export(&View::from_slice(&teams), ExportFormat::Csv, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.starts_with("abbreviation,"));
}

#[test]
fn test_shell_session() {
    let store = DatasetStore::bundled().unwrap();
    let script = "\
leaders -c sacks -n 2
standings -F division=bogus
players -t KC --sort name --asc
exit
";

    let summary = run_shell(&store, Cursor::new(script), false).unwrap();
    assert_eq!(summary.commands, 3);
    assert_eq!(summary.errors, 1);
}
