use crate::store::TodoStore;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub completed: usize,
    pub total: usize,
}

impl Counts {
    /// The header line, or `None` for an empty list.
    pub fn summary(&self) -> Option<String> {
        (self.total > 0).then(|| self.to_string())
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} completed", self.completed, self.total)
    }
}

pub fn run(store: &TodoStore) -> Counts {
    Counts {
        completed: store.completed_count(),
        total: store.total_count(),
    }
}
