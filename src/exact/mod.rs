pub mod budget;
pub mod dfs;

use crate::graph::Node;

pub use budget::SearchBudget;
pub use dfs::*;

/// Every tour starts and ends here
pub const START_VERTEX: Node = 0;
