use serde::{Deserialize, Serialize};

use super::user::AccountProfile;

/// Whether every fetch feeding a metric succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Completeness {
    #[default]
    Complete,
    Partial,
}

impl Completeness {
    pub fn is_partial(self) -> bool {
        self == Completeness::Partial
    }

    pub fn mark_partial(&mut self) {
        *self = Completeness::Partial;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_commits: u64,
    pub total_stars: u64,
    /// Sum of language byte counts, not source lines.
    pub total_lines_of_code: u64,
    pub repositories: Completeness,
    pub commits: Completeness,
    pub lines_of_code: Completeness,
}

impl AggregateStats {
    pub fn is_complete(&self) -> bool {
        !(self.repositories.is_partial()
            || self.commits.is_partial()
            || self.lines_of_code.is_partial())
    }

    /// Totals that depend on the repository listing inherit its truncation.
    pub fn stars_completeness(&self) -> Completeness {
        self.repositories
    }

    pub fn commits_completeness(&self) -> Completeness {
        if self.repositories.is_partial() {
            Completeness::Partial
        } else {
            self.commits
        }
    }

    pub fn lines_completeness(&self) -> Completeness {
        if self.repositories.is_partial() {
            Completeness::Partial
        } else {
            self.lines_of_code
        }
    }
}

/// Everything collected during one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    pub username: String,
    pub profile: AccountProfile,
    pub stats: AggregateStats,
    pub repositories_scanned: usize,
}

/// Renders a value with a `(partial)` marker when it is known to be short.
pub fn with_marker(value: u64, completeness: Completeness) -> String {
    match completeness {
        Completeness::Complete => value.to_string(),
        Completeness::Partial => format!("{} (partial)", value),
    }
}
