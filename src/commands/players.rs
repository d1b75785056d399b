//! Players command implementation

use crate::{
    cli::{
        types::{Position, TeamAbbr},
        OutputArgs,
    },
    dataset::{DatasetStore, PlayerRecord},
    view::{filter, sort, Criterion, SortDirection, View},
    Result,
};

use super::{build_criteria, output};

/// Parameters for the players command
#[derive(Debug, Clone, Default)]
pub struct PlayersParams {
    pub filters: Vec<String>,
    pub team: Option<TeamAbbr>,
    pub position: Option<Position>,
    /// Dataset order when `None`.
    pub sort: Option<String>,
    pub ascending: bool,
    pub top: Option<usize>,
    pub output: OutputArgs,
}

/// Filter, then sort, then truncate.
pub fn players_view<'a>(
    store: &'a DatasetStore,
    params: &PlayersParams,
) -> Result<View<'a, PlayerRecord>> {
    let criteria = build_criteria(
        &params.filters,
        [
            params.team.map(Criterion::Team),
            params.position.map(Criterion::Position),
        ],
    )?;

    let mut view = filter(store.players(), &criteria)?;
    if let Some(field) = &params.sort {
        view = sort(view, field, SortDirection::from_ascending(params.ascending))?;
    }
    if let Some(top) = params.top {
        view = view.top(top);
    }
    Ok(view)
}

/// Handle the players command
pub fn handle_players(store: &DatasetStore, params: PlayersParams) -> Result<()> {
    let view = players_view(store, &params)?;
    output::deliver(&view, &params.output, || output::render_players(&view))
}
