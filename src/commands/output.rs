//! Text rendering of views and delivery to stdout or an export file.

use std::fmt::Write as _;

use crate::{
    cli::{types::ExportFormat, OutputArgs},
    dataset::{LeaderEntry, PlayerRecord, Record, TeamRecord},
    export::{encode, export},
    view::{DivisionStandings, View},
    Result,
};

/// Whole numbers without decimals, fractional values with one.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// `.706` style percentage, `1.000` for an unbeaten team.
pub fn format_percent(value: f64) -> String {
    let text = format!("{:.3}", value);
    match text.strip_prefix('0') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

pub fn render_leaders(entries: &[LeaderEntry]) -> String {
    if entries.is_empty() {
        return "No leaders match the given filters.".to_string();
    }

    let mut out = String::new();
    let mut current = None;
    for entry in entries {
        if current != Some(entry.category) {
            if current.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "{}:", entry.category);
            current = Some(entry.category);
        }
        let _ = writeln!(
            out,
            "{:>3}. {} ({}, {}) - {}",
            entry.rank,
            entry.name,
            entry.position,
            entry.team_abbr,
            format_value(entry.value)
        );
    }
    out.trim_end().to_string()
}

pub fn render_players(view: &View<'_, PlayerRecord>) -> String {
    if view.is_empty() {
        return "No players match the given filters.".to_string();
    }

    let mut out = format!(
        "{:<24} {:<3} {:<4} {:>7} {:>6} {:>7} {:>7} {:>4} {:>5} {:>3}\n",
        "Name", "Pos", "Team", "PassYds", "PassTD", "RushYds", "RecYds", "Rec", "Sacks", "Int"
    );
    for p in view.iter() {
        let _ = writeln!(
            out,
            "{:<24} {:<3} {:<4} {:>7} {:>6} {:>7} {:>7} {:>4} {:>5} {:>3}",
            p.name,
            p.position.to_string(),
            p.team.as_str(),
            p.passing_yards,
            p.passing_touchdowns,
            p.rushing_yards,
            p.receiving_yards,
            p.receptions,
            format_value(p.sacks),
            p.interceptions
        );
    }
    out.trim_end().to_string()
}

pub fn render_standings(groups: &[DivisionStandings<'_>]) -> String {
    if groups.is_empty() {
        return "No teams match the given filters.".to_string();
    }

    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}:", group.division);
        for team in group.teams.iter() {
            let _ = writeln!(
                out,
                "  {:<4} {:<24} {:>7}  {}  PF {:>3}  PA {:>3}  {:>+4}",
                team.abbreviation.as_str(),
                team.name,
                team.record_summary(),
                format_percent(team.win_percent()),
                team.points_for,
                team.points_against,
                team.point_differential()
            );
        }
    }
    out.trim_end().to_string()
}

fn detail_line(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = writeln!(out, "{:<12} {}", format!("{}:", label), value);
    }
}

pub fn render_player_detail(player: &PlayerRecord, team: Option<&TeamRecord>) -> String {
    let mut out = String::new();
    let team_name = team.map_or(player.team.name(), |t| t.name.as_str());
    let debut = player.debut_year.map(|y| y.to_string());

    let _ = writeln!(out, "{} (#{})", player.name, player.id);
    detail_line(&mut out, "Position", Some(player.position.to_string().as_str()));
    detail_line(
        &mut out,
        "Team",
        Some(format!("{} ({})", team_name, player.team).as_str()),
    );
    detail_line(&mut out, "Jersey", player.jersey.as_deref());
    detail_line(&mut out, "Born", player.date_of_birth.as_deref());
    detail_line(&mut out, "Debut Year", debut.as_deref());
    detail_line(&mut out, "Draft", player.draft.as_deref());
    detail_line(&mut out, "Headshot", player.headshot.as_deref());

    let stats: Vec<String> = crate::StatCategory::ALL
        .into_iter()
        .filter(|c| player.stat(*c) != 0.0)
        .map(|c| format!("  {:<16} {}", c.label(), format_value(player.stat(c))))
        .collect();
    if !stats.is_empty() {
        out.push_str("Season stats:\n");
        out.push_str(&stats.join("\n"));
    }
    out.trim_end().to_string()
}

pub fn render_team_detail(team: &TeamRecord, roster: &[&PlayerRecord]) -> String {
    let mut out = String::new();
    let location = match (&team.city, &team.state) {
        (Some(city), Some(state)) => Some(format!("{}, {}", city, state)),
        (Some(city), None) => Some(city.clone()),
        _ => None,
    };

    let _ = writeln!(out, "{} ({})", team.name, team.abbreviation);
    detail_line(&mut out, "Division", Some(team.division.as_str()));
    detail_line(
        &mut out,
        "Record",
        Some(
            format!(
                "{} ({})",
                team.record_summary(),
                format_percent(team.win_percent())
            )
            .as_str(),
        ),
    );
    detail_line(&mut out, "Home", team.home_record.as_deref());
    detail_line(&mut out, "Away", team.away_record.as_deref());
    detail_line(
        &mut out,
        "Points",
        Some(
            format!(
                "{} for, {} against ({:+})",
                team.points_for,
                team.points_against,
                team.point_differential()
            )
            .as_str(),
        ),
    );
    detail_line(&mut out, "Venue", team.venue.as_deref());
    detail_line(&mut out, "Location", location.as_deref());
    detail_line(&mut out, "Logo", team.logo.as_deref());

    if !roster.is_empty() {
        out.push_str("Players:\n");
        for player in roster {
            let _ = writeln!(out, "  {:<3} {}", player.position.to_string(), player.name);
        }
    }
    out.trim_end().to_string()
}

/// Export the view if `--export` was given, print it as JSON if `--json`,
/// otherwise print the text rendering.
pub fn deliver<R: Record>(
    view: &View<'_, R>,
    output: &OutputArgs,
    render: impl FnOnce() -> String,
) -> Result<()> {
    if let Some(path) = &output.export {
        let format = ExportFormat::resolve(output.format.as_deref(), path)?;
        export(view, format, path)?;
        println!(
            "✓ Exported {} rows to {} ({})",
            view.len(),
            path.display(),
            format
        );
        return Ok(());
    }

    if output.json {
        let bytes = encode(view, ExportFormat::Json)?;
        println!("{}", String::from_utf8_lossy(&bytes));
    } else {
        println!("{}", render());
    }
    Ok(())
}
