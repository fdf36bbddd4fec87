use std::time::{Duration, Instant};

use crate::utils::signal_handling;

/// Limits imposed on a search from the outside. Once a limit is hit, the search stops
/// descending, restores the graph and the working path, and keeps the best tour found so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchBudget {
    pub timeout: Option<Duration>,
    pub max_expansions: Option<u64>,
    pub honor_ctrl_c: bool,
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            timeout: None,
            max_expansions: None,
            honor_ctrl_c: true,
        }
    }
}

impl SearchBudget {
    /// No limits; the search always runs to completion
    pub fn unlimited() -> Self {
        Self {
            honor_ctrl_c: false,
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub(super) fn start(&self) -> BudgetTracker {
        BudgetTracker {
            deadline: self.timeout.map(|t| Instant::now() + t),
            max_expansions: self.max_expansions,
            honor_ctrl_c: self.honor_ctrl_c,
        }
    }
}

pub(super) struct BudgetTracker {
    deadline: Option<Instant>,
    max_expansions: Option<u64>,
    honor_ctrl_c: bool,
}

impl BudgetTracker {
    /// Clock and signal are only polled every `POLL_INTERVAL` expansions
    const POLL_INTERVAL: u64 = 1 << 10;

    pub(super) fn is_exhausted(&self, expansions: u64) -> bool {
        if self.max_expansions.is_some_and(|max| expansions > max) {
            return true;
        }

        if expansions % Self::POLL_INTERVAL != 0 {
            return false;
        }

        (self.honor_ctrl_c && signal_handling::received_ctrl_c())
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
