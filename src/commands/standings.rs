//! Standings command implementation

use crate::{
    cli::{
        types::{Conference, Division},
        OutputArgs,
    },
    dataset::DatasetStore,
    view::{filter, flatten_standings, standings, Criterion, DivisionStandings},
    Result,
};

use super::{build_criteria, output};

/// Parameters for the standings command
#[derive(Debug, Clone, Default)]
pub struct StandingsParams {
    pub filters: Vec<String>,
    pub division: Option<Division>,
    pub conference: Option<Conference>,
    pub min_wins: Option<u32>,
    pub output: OutputArgs,
}

pub fn standings_groups<'a>(
    store: &'a DatasetStore,
    params: &StandingsParams,
) -> Result<Vec<DivisionStandings<'a>>> {
    let criteria = build_criteria(
        &params.filters,
        [
            params.division.map(Criterion::Division),
            params.conference.map(Criterion::Conference),
            params.min_wins.map(Criterion::MinWins),
        ],
    )?;

    Ok(standings(filter(store.teams(), &criteria)?))
}

/// Handle the standings command
///
/// Exports hold the teams in standings order, one row per team.
pub fn handle_standings(store: &DatasetStore, params: StandingsParams) -> Result<()> {
    let groups = standings_groups(store, &params)?;
    output::deliver(&flatten_standings(&groups), &params.output, || {
        output::render_standings(&groups)
    })
}
