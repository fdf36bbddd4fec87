pub mod adj_matrix;
pub mod edge;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;
pub type Weight = u32;
/// Sum of edge weights along a path; wider than [`Weight`] to absorb long paths of heavy edges
pub type PathWeight = u64;

use std::ops::Range;

pub use adj_matrix::*;
pub use edge::*;

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over V. The range does not borrow self and hence may be used where
    /// additional mutable references of self are needed (e.g., to mark nodes as visited
    /// while iterating).
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of stored edges. An undirected edge counts once.
    fn number_of_edges(&self) -> NumEdges;
}

/// Provides efficient tests whether an edge exists and what it weighs
pub trait AdjacencyTest {
    /// Returns the weight of the directed edge (u, v) or `None` if there is no such edge.
    /// ** Panics if u, v >= n **
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns *true* exactly if the graph contains the directed edge (u, v)
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge_weight(u, v).is_some()
    }

    /// Returns the weight of the directed edge (u, v) and 0 if it does not exist.
    fn get_weight(&self, u: Node, v: Node) -> Weight {
        self.edge_weight(u, v).unwrap_or(0)
    }
}

pub trait GraphNew {
    /// Creates a graph with n singleton nodes, no names and nothing visited
    fn new(n: NumNodes, directed: bool) -> Self;
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew {
    /// Returns *true* if [`GraphEdgeEditing::add_edge`] also inserts the reverse edge
    fn is_directed(&self) -> bool;

    /// Sets the weight of the edge *(u,v)*. For undirected graphs, the edge *(v,u)* receives
    /// the same weight. An existing weight is overwritten.
    /// ** Panics if u, v >= n **
    fn add_edge(&mut self, u: Node, v: Node, weight: Weight);

    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w);
        }
    }
}

/// Human readable labels of nodes
pub trait VertexNames {
    /// Stores the label of `u`, replacing a previous one
    fn set_vertex_name(&mut self, u: Node, name: impl Into<String>);

    /// Returns the label of `u` if it was ever assigned
    fn vertex_name(&self, u: Node) -> Option<&str>;

    /// Returns the label of `u` or its index if no label was assigned
    fn display_name(&self, u: Node) -> String {
        self.vertex_name(u)
            .map_or_else(|| u.to_string(), |name| name.to_string())
    }
}

/// Per-node scratch flags toggled by searches
pub trait VisitState {
    fn visit(&mut self, u: Node);
    fn unvisit(&mut self, u: Node);
    fn is_visited(&self, u: Node) -> bool;

    /// Number of nodes currently marked as visited
    fn number_of_visited(&self) -> NumNodes;
}
