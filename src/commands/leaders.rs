//! Leaders command implementation

use crate::{
    cli::{
        types::{Position, StatCategory, TeamAbbr},
        OutputArgs,
    },
    dataset::{DatasetStore, LeaderEntry},
    view::{leaders, Criterion, View},
    Result,
};

use super::{build_criteria, output};

/// Parameters for the leaders command
#[derive(Debug, Clone, Default)]
pub struct LeadersParams {
    /// `None` lists every category.
    pub category: Option<StatCategory>,
    pub top: usize,
    pub team: Option<TeamAbbr>,
    pub position: Option<Position>,
    pub filters: Vec<String>,
    pub output: OutputArgs,
}

/// Leaders for the requested categories, concatenated in category order.
pub fn collect_leaders(store: &DatasetStore, params: &LeadersParams) -> Result<Vec<LeaderEntry>> {
    let criteria = build_criteria(
        &params.filters,
        [
            params.team.map(Criterion::Team),
            params.position.map(Criterion::Position),
        ],
    )?;

    let categories = match params.category {
        Some(category) => vec![category],
        None => StatCategory::ALL.to_vec(),
    };

    let mut entries = Vec::new();
    for category in categories {
        entries.extend(leaders(store, category, &criteria, params.top)?);
    }
    Ok(entries)
}

/// Handle the leaders command
pub fn handle_leaders(store: &DatasetStore, params: LeadersParams) -> Result<()> {
    let entries = collect_leaders(store, &params)?;
    output::deliver(&View::from_slice(&entries), &params.output, || {
        output::render_leaders(&entries)
    })
}
