use std::error::Error;

use thiserror::Error;

use crate::graph::{Node, PathWeight};

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> Result<(), E>;
}

/// Violations detected by [`InvariantCheck`] on a [`crate::utils::Path`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("running weight is {stored} but the edges on the path sum up to {recomputed}")]
    WeightMismatch {
        stored: PathWeight,
        recomputed: PathWeight,
    },

    #[error("vertex {0} is not a node of the graph")]
    UnknownVertex(Node),
}
