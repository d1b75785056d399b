//! Tests for command handlers

use super::*;
use crate::{
    cli::types::{Conference, Division, Position, TeamAbbr},
    cli::OutputArgs,
    core::cache::CACHE_ENV_VAR,
    error::ErrorKind,
};
use std::io::Cursor;
use std::sync::{Mutex, MutexGuard};
use tempfile::tempdir;

// Tests touching process environment run one at a time.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_resolve_season_from_option() {
        let _guard = env_lock();
        std::env::set_var(SEASON_ENV_VAR, "2020");

        let season = resolve_season(Some(Season::new(2023))).unwrap();
        assert_eq!(season, Season::new(2023));

        std::env::remove_var(SEASON_ENV_VAR);
    }

    #[test]
    fn test_resolve_season_from_env() {
        let _guard = env_lock();
        std::env::set_var(SEASON_ENV_VAR, "2022");

        assert_eq!(resolve_season(None).unwrap(), Season::new(2022));

        std::env::remove_var(SEASON_ENV_VAR);
    }

    #[test]
    fn test_resolve_season_defaults_to_bundled() {
        let _guard = env_lock();
        std::env::remove_var(SEASON_ENV_VAR);

        assert_eq!(resolve_season(None).unwrap().as_u16(), BUNDLED_SEASON);

        std::env::set_var(SEASON_ENV_VAR, "  ");
        assert_eq!(resolve_season(None).unwrap().as_u16(), BUNDLED_SEASON);

        std::env::remove_var(SEASON_ENV_VAR);
    }

    #[test]
    fn test_resolve_season_invalid_env() {
        let _guard = env_lock();
        std::env::set_var(SEASON_ENV_VAR, "last_year");

        let err = resolve_season(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);

        std::env::remove_var(SEASON_ENV_VAR);
    }

    #[test]
    fn test_resolve_data_path() {
        let _guard = env_lock();
        std::env::remove_var(DATA_ENV_VAR);
        assert_eq!(resolve_data_path(None), None);

        std::env::set_var(DATA_ENV_VAR, "/tmp/season.json");
        assert_eq!(resolve_data_path(None), Some(PathBuf::from("/tmp/season.json")));
        assert_eq!(
            resolve_data_path(Some(PathBuf::from("explicit.json"))),
            Some(PathBuf::from("explicit.json"))
        );

        std::env::remove_var(DATA_ENV_VAR);
    }
}

#[cfg(test)]
mod load_tests {
    use super::*;

    #[test]
    fn test_load_store_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.json");
        let mut snapshot = DatasetStore::bundled().unwrap().to_snapshot();
        snapshot.season = Season::new(2023);
        snapshot.players.truncate(3);
        std::fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

        let store = load_store(Some(&path), Season::new(2024)).unwrap();
        assert_eq!(store.season(), Season::new(2023));
        assert_eq!(store.players().len(), 3);
    }

    #[test]
    fn test_load_store_bundled_and_missing() {
        let _guard = env_lock();
        let dir = tempdir().unwrap();
        std::env::set_var(CACHE_ENV_VAR, dir.path());

        let store = load_store(None, Season::new(2024)).unwrap();
        assert_eq!(store.teams().len(), 32);

        let err = load_store(None, Season::new(2019)).unwrap_err();
        assert!(matches!(err, StatsError::MissingSnapshot { season: 2019 }));

        std::env::remove_var(CACHE_ENV_VAR);
    }

    #[test]
    fn test_load_store_prefers_cached_snapshot() {
        let _guard = env_lock();
        let dir = tempdir().unwrap();
        std::env::set_var(CACHE_ENV_VAR, dir.path());

        let mut snapshot = DatasetStore::bundled().unwrap().to_snapshot();
        snapshot.players.clear();
        crate::core::write_string(
            &snapshot_path(Season::new(2024)),
            &serde_json::to_string(&snapshot).unwrap(),
        )
        .unwrap();

        let store = load_store(None, Season::new(2024)).unwrap();
        assert!(store.players().is_empty());

        std::env::remove_var(CACHE_ENV_VAR);
    }
}

#[cfg(test)]
mod view_tests {
    use super::*;
    use details::{find_player, find_team, PlayerMatch};

    #[test]
    fn test_find_player_by_id_and_name() {
        let store = DatasetStore::bundled().unwrap();

        match find_player(&store, "13", None).unwrap() {
            PlayerMatch::One(p) => assert_eq!(p.name, "Josh Allen"),
            other => panic!("unexpected match: {other:?}"),
        }
        match find_player(&store, "josh allen", None).unwrap() {
            PlayerMatch::One(p) => assert_eq!(p.team, TeamAbbr::BUF),
            other => panic!("unexpected match: {other:?}"),
        }
        match find_player(&store, "Jefferson", None).unwrap() {
            PlayerMatch::One(p) => assert_eq!(p.name, "Justin Jefferson"),
            other => panic!("unexpected match: {other:?}"),
        }
    }

    #[test]
    fn test_find_player_ambiguous_and_missing() {
        let store = DatasetStore::bundled().unwrap();

        match find_player(&store, "Josh", None).unwrap() {
            PlayerMatch::Many(candidates) => {
                let names: Vec<&str> = candidates.iter().map(|p| p.name.as_str()).collect();
                assert!(names.contains(&"Josh Allen"));
                assert!(names.contains(&"Josh Jacobs"));
            }
            other => panic!("unexpected match: {other:?}"),
        }
        assert!(matches!(
            find_player(&store, "Josh", Some(TeamAbbr::GB)).unwrap(),
            PlayerMatch::One(p) if p.name == "Josh Jacobs"
        ));

        let err = find_player(&store, "Tom Brady", None).unwrap_err();
        assert!(matches!(err, StatsError::PlayerNotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_find_team() {
        let store = DatasetStore::bundled().unwrap();
        assert_eq!(find_team(&store, TeamAbbr::DET).unwrap().wins, 15);

        let mut snapshot = store.to_snapshot();
        snapshot.teams.retain(|t| t.abbreviation != TeamAbbr::DET);
        snapshot.players.retain(|p| p.team != TeamAbbr::DET);
        let partial = DatasetStore::new(snapshot).unwrap();
        assert!(matches!(
            find_team(&partial, TeamAbbr::DET),
            Err(StatsError::TeamNotFound { .. })
        ));
    }

    #[test]
    fn test_players_view_filters_and_sorts() {
        let store = DatasetStore::bundled().unwrap();
        let params = players::PlayersParams {
            position: Some(Position::QB),
            filters: vec!["conference=AFC".to_string()],
            sort: Some("passing-yards".to_string()),
            top: Some(3),
            ..Default::default()
        };

        let view = players::players_view(&store, &params).unwrap();
        let names: Vec<&str> = view.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Joe Burrow", "Lamar Jackson", "Patrick Mahomes"]);
    }

    #[test]
    fn test_players_view_rejects_unknown_sort() {
        let store = DatasetStore::bundled().unwrap();
        let params = players::PlayersParams {
            sort: Some("tackles".to_string()),
            ..Default::default()
        };
        let err = players::players_view(&store, &params).unwrap_err();
        assert!(matches!(err, StatsError::UnknownSortField { .. }));
    }

    #[test]
    fn test_standings_groups_for_division() {
        let store = DatasetStore::bundled().unwrap();
        let params = standings::StandingsParams {
            division: Some(Division::AfcEast),
            ..Default::default()
        };

        let groups = standings::standings_groups(&store, &params).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].teams.len(), 4);
        assert_eq!(groups[0].teams.rows()[0].abbreviation, TeamAbbr::BUF);
    }

    #[test]
    fn test_standings_groups_min_wins_and_conference() {
        let store = DatasetStore::bundled().unwrap();
        let params = standings::StandingsParams {
            conference: Some(Conference::NFC),
            min_wins: Some(14),
            ..Default::default()
        };

        let groups = standings::standings_groups(&store, &params).unwrap();
        let abbrs: Vec<TeamAbbr> = groups
            .iter()
            .flat_map(|g| g.teams.iter().map(|t| t.abbreviation))
            .collect();
        assert_eq!(abbrs, vec![TeamAbbr::DET, TeamAbbr::MIN, TeamAbbr::PHI]);
    }

    #[test]
    fn test_leaders_export_writes_file() {
        let store = DatasetStore::bundled().unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("leaders.csv");
        let params = leaders::LeadersParams {
            category: Some(crate::StatCategory::Sacks),
            top: 3,
            output: OutputArgs {
                export: Some(path.clone()),
                ..Default::default()
            },
            ..Default::default()
        };

        leaders::handle_leaders(&store, params).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("Trey Hendrickson"));
    }

    #[test]
    fn test_export_with_unknown_extension_fails() {
        let store = DatasetStore::bundled().unwrap();
        let dir = tempdir().unwrap();
        let params = players::PlayersParams {
            output: OutputArgs {
                export: Some(dir.path().join("players.txt")),
                ..Default::default()
            },
            ..Default::default()
        };

        let err = players::handle_players(&store, params).unwrap_err();
        assert!(matches!(err, StatsError::UnknownFormatFor { .. }));
        assert!(!dir.path().join("players.txt").exists());
    }
}

#[cfg(test)]
mod shell_tests {
    use super::*;
    use crate::cli::ShellLine;
    use clap::Parser;
    use shell::{error_message, run_line, run_shell, ShellSummary};

    #[test]
    fn test_shell_continues_after_errors() {
        let store = DatasetStore::bundled().unwrap();
        let script = "\
# comment lines are skipped
standings --division afc-east

leaders --filter min_wins=10
player \"Tom Brady\"
bogus-command
team KC
quit
players
";
        let summary = run_shell(&store, Cursor::new(script), false).unwrap();
        assert_eq!(
            summary,
            ShellSummary {
                commands: 5,
                errors: 3
            }
        );
    }

    #[test]
    fn test_shell_stops_at_eof() {
        let store = DatasetStore::bundled().unwrap();
        let summary = run_shell(&store, Cursor::new("team DET\nplayer 13"), false).unwrap();
        assert_eq!(summary.commands, 2);
        assert_eq!(summary.errors, 0);
    }

    #[test]
    fn test_run_line_handles_quotes() {
        let store = DatasetStore::bundled().unwrap();
        assert!(run_line(&store, "player 'Josh Allen' --team BUF"));
        assert!(!run_line(&store, "player \"Josh Allen"));
        assert!(run_line(&store, "help"));
    }

    #[test]
    fn test_error_message_names_error_kind() {
        let store = DatasetStore::bundled().unwrap();
        let err = dispatch_view(
            &store,
            ShellLine::try_parse_from(["players", "--filter", "coach=Reid"])
                .unwrap()
                .command,
        )
        .unwrap_err();
        assert_eq!(
            error_message(&err),
            "Error [input]: Unknown filter key 'coach' \
             (expected one of: team, division, conference, position, min_wins)"
        );

        let err = StatsError::UnknownFormatFor {
            path: PathBuf::from("players.txt"),
        };
        assert!(error_message(&err).starts_with("Error [format]: "));

        let err = StatsError::TeamNotFound {
            team: "DET".to_string(),
        };
        assert!(error_message(&err).starts_with("Error [not found]: "));
    }
}

#[cfg(test)]
mod fetch_tests {
    use super::*;
    use crate::espn::EspnClient;
    use fetch::fetch_to_path;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    async fn mount_minimal_league(server: &MockServer) {
        let base = server.uri();
        Mock::given(method("GET"))
            .and(path("/seasons/2024/types/2/groups/8/standings/0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "standings": [{
                    "team": { "$ref": format!("{base}/seasons/2024/teams/2") },
                    "records": [{
                        "name": "overall",
                        "stats": [
                            { "name": "wins", "value": 13.0 },
                            { "name": "losses", "value": 4.0 }
                        ]
                    }]
                }]
            })))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/seasons/2024/types/2/groups/7/standings/0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "standings": [] })))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/seasons/2024/teams/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "2", "abbreviation": "BUF", "displayName": "Buffalo Bills"
            })))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/seasons/2024/types/2/leaders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "categories": [] })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_fetch_to_path_writes_loadable_snapshot() {
        let server = MockServer::start().await;
        mount_minimal_league(&server).await;
        let client = EspnClient::with_base_url(server.uri()).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("snapshot_2024.json");

        let fetched = fetch_to_path(&client, Season::new(2024), 5, false, &path)
            .await
            .unwrap();
        assert!(fetched);

        let store = DatasetStore::load(&path).unwrap();
        assert_eq!(store.teams().len(), 1);
        assert_eq!(store.team(TeamAbbr::BUF).unwrap().wins, 13);
    }

    #[tokio::test]
    async fn test_fetch_to_path_skips_fresh_snapshot() {
        // No mocks mounted: any request would fail the fetch.
        let server = MockServer::start().await;
        let client = EspnClient::with_base_url(server.uri()).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot_2024.json");
        std::fs::write(&path, "{}").unwrap();

        let fetched = fetch_to_path(&client, Season::new(2024), 5, false, &path)
            .await
            .unwrap();
        assert!(!fetched);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

        let err = fetch_to_path(&client, Season::new(2024), 5, true, &path)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Fetch);
    }
}
