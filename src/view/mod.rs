//! Views over the dataset: filtering, sorting and ranking.
//!
//! A [`View`] is an ordered list of borrowed records. Views are produced on
//! demand from the dataset store and dropped after rendering or export.
//!
//! - `filters`: named filter criteria and the filter operation
//! - `ranking`: sorting, leaders lists and standings

pub mod filters;
pub mod ranking;

pub use filters::{filter, Criterion, FilterCriteria, FilterKey, Filterable};
pub use ranking::{
    flatten_standings, leaders, sort, standings, DivisionStandings, SortDirection, SortKey,
    Sortable,
};

/// An ordered sequence of records borrowed from their owner.
#[derive(Debug)]
pub struct View<'a, R> {
    rows: Vec<&'a R>,
}

impl<'a, R> Clone for View<'a, R> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }
}

impl<'a, R> View<'a, R> {
    pub fn new(rows: Vec<&'a R>) -> Self {
        Self { rows }
    }

    /// A view over every record of a slice, in slice order.
    pub fn from_slice(records: &'a [R]) -> Self {
        Self {
            rows: records.iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.rows.iter().copied()
    }

    pub fn rows(&self) -> &[&'a R] {
        &self.rows
    }

    /// Keep at most the first `n` rows.
    pub fn top(mut self, n: usize) -> Self {
        self.rows.truncate(n);
        self
    }

    pub fn reversed(mut self) -> Self {
        self.rows.reverse();
        self
    }
}

impl<'a, R> IntoIterator for View<'a, R> {
    type Item = &'a R;
    type IntoIter = std::vec::IntoIter<&'a R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
