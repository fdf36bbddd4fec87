use std::{fmt, io::Write};

use itertools::Itertools;

use super::BoundedStack;
use crate::{errors::*, graph::*};

/// Sequence of vertices in traversal order together with the sum of the weights of the edges
/// between consecutive vertices. The sum is maintained incrementally by [`Path::add`] and
/// [`Path::remove`] and never recomputed from scratch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    vertices: BoundedStack<Node>,
    total_weight: PathWeight,
}

impl Path {
    pub fn new(capacity: NumNodes) -> Self {
        Self {
            vertices: BoundedStack::new(capacity as usize),
            total_weight: 0,
        }
    }

    /// Appends `vertex` and accounts for the edge from the previous last vertex to it.
    /// If the path is full, nothing happens.
    ///
    /// # Example
    /// ```
    /// use tsp::prelude::*;
    /// let graph = AdjMatrix::test_only_from(3, false, [(0, 1, 4), (1, 2, 5)]);
    /// let mut path = Path::new(4);
    /// path.add(0, &graph);
    /// path.add(1, &graph);
    /// path.add(2, &graph);
    /// assert_eq!(path.total_weight(), 9);
    /// ```
    pub fn add<G: AdjacencyTest>(&mut self, vertex: Node, graph: &G) {
        let delta = self
            .vertices
            .peek()
            .map_or(0, |last| graph.get_weight(last, vertex));

        if self.vertices.push(vertex) {
            self.total_weight += delta as PathWeight;
        }
    }

    /// Removes the last vertex and withdraws the weight of the edge leading to it.
    /// Returns `None` if the path is empty.
    pub fn remove<G: AdjacencyTest>(&mut self, graph: &G) -> Option<Node> {
        let removed = self.vertices.pop()?;

        match self.vertices.peek() {
            Some(last) => self.total_weight -= graph.get_weight(last, removed) as PathWeight,
            None => self.total_weight = 0,
        }

        Some(removed)
    }

    /// Number of vertices on the path
    pub fn len(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn capacity(&self) -> NumNodes {
        self.vertices.capacity() as NumNodes
    }

    pub fn total_weight(&self) -> PathWeight {
        self.total_weight
    }

    /// Iterates over the vertices in the order in which they were added
    pub fn vertices(&self) -> impl DoubleEndedIterator<Item = Node> + ExactSizeIterator + '_ {
        self.vertices.iter()
    }

    /// Overwrites this path with a deep copy of `other`.
    /// ** Panics if `other` is longer than the capacity of this path **
    pub fn copy_from(&mut self, other: &Self) {
        self.vertices.copy_from(&other.vertices);
        self.total_weight = other.total_weight;
    }

    /// Binds the path to the graph it was built on; e.g. for printing its names or
    /// checking its invariant.
    pub fn on<'a, G>(&'a self, graph: &'a G) -> PathOnGraph<'a, G> {
        PathOnGraph { path: self, graph }
    }

    /// Writes the names of the vertices in traversal order, one per line.
    /// Vertices without a name are written as their index.
    pub fn write_names<W: Write, G: VertexNames>(
        &self,
        mut writer: W,
        graph: &G,
    ) -> std::io::Result<()> {
        for u in self.vertices() {
            writeln!(writer, "{}", graph.display_name(u))?;
        }
        Ok(())
    }
}

pub struct PathOnGraph<'a, G> {
    path: &'a Path,
    graph: &'a G,
}

impl<G: AdjacencyTest> PathOnGraph<'_, G> {
    /// Sum of the weights of consecutive vertices computed without the running total
    pub fn recompute_weight(&self) -> PathWeight {
        self.path
            .vertices()
            .tuple_windows()
            .map(|(u, v)| self.graph.get_weight(u, v) as PathWeight)
            .sum()
    }
}

impl<G: AdjacencyTest + GraphNodeOrder> InvariantCheck<PathError> for PathOnGraph<'_, G> {
    fn is_correct(&self) -> Result<(), PathError> {
        if let Some(u) = self
            .path
            .vertices()
            .find(|&u| u >= self.graph.number_of_nodes())
        {
            return Err(PathError::UnknownVertex(u));
        }

        let recomputed = self.recompute_weight();
        if recomputed != self.path.total_weight() {
            return Err(PathError::WeightMismatch {
                stored: self.path.total_weight(),
                recomputed,
            });
        }

        Ok(())
    }
}

impl<G: VertexNames> fmt::Display for PathOnGraph<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.path.vertices().map(|u| self.graph.display_name(u));
        write!(f, "{}", names.format(" -> "))
    }
}
