//! The one interactive suspension point in the system.
//!
//! Search hands its numbered results to a [`Selector`] and blocks until it
//! answers. The binary installs a prompt that reads stdin; everything else
//! (tests, non-interactive embedding) uses a deterministic implementation.

use crate::model::SearchHit;

pub trait Selector {
    /// Present the numbered search results for `query` and yield the number
    /// the user entered, or `None` when input is absent or not an integer.
    /// Range checking is the search engine's job, not the selector's.
    fn choose(&mut self, query: &str, hits: &[SearchHit]) -> Option<i64>;
}

/// Never selects anything. For non-interactive use of the API.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSelection;

impl Selector for NoSelection {
    fn choose(&mut self, _query: &str, _hits: &[SearchHit]) -> Option<i64> {
        None
    }
}

/// Always answers with the given value. For deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelection(pub Option<i64>);

impl Selector for FixedSelection {
    fn choose(&mut self, _query: &str, _hits: &[SearchHit]) -> Option<i64> {
        self.0
    }
}
