use super::*;

/// Dense weighted graph on nodes `0..n`. All storage (the `n * n` weight matrix, the visited
/// flags and the name table) is allocated once in [`GraphNew::new`] and never grows.
#[derive(Clone)]
pub struct AdjMatrix {
    number_of_nodes: NumNodes,
    directed: bool,
    number_of_edges: NumEdges,
    weights: Vec<Option<Weight>>,
    visited: Vec<bool>,
    number_of_visited: NumNodes,
    names: Vec<Option<String>>,
}

impl AdjMatrix {
    #[inline(always)]
    fn slot(&self, u: Node, v: Node) -> usize {
        assert!(u < self.number_of_nodes && v < self.number_of_nodes);
        u as usize * self.number_of_nodes as usize + v as usize
    }

    /// Returns all edges with their weights ordered lexicographically by (source, target).
    /// Undirected edges are reported once with source <= target.
    pub fn ordered_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| {
            let first = if self.directed { 0 } else { u };
            (first..self.number_of_nodes)
                .filter_map(move |v| self.edge_weight(u, v).map(|w| WeightedEdge(u, v, w)))
        })
    }

    pub fn test_only_from(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self {
        let mut graph = Self::new(n, directed);
        graph.add_edges(edges);
        graph
    }
}

impl GraphNodeOrder for AdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }
}

impl GraphEdgeOrder for AdjMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }
}

impl AdjacencyTest for AdjMatrix {
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight> {
        self.weights[self.slot(u, v)]
    }
}

impl GraphNew for AdjMatrix {
    fn new(number_of_nodes: NumNodes, directed: bool) -> Self {
        let n = number_of_nodes as usize;
        Self {
            number_of_nodes,
            directed,
            number_of_edges: 0,
            weights: vec![None; n * n],
            visited: vec![false; n],
            number_of_visited: 0,
            names: vec![None; n],
        }
    }
}

impl GraphEdgeEditing for AdjMatrix {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) {
        let slot = self.slot(u, v);
        if self.weights[slot].replace(weight).is_none() {
            self.number_of_edges += 1;
        }

        if !self.directed {
            let slot = self.slot(v, u);
            self.weights[slot] = Some(weight);
        }
    }
}

impl VertexNames for AdjMatrix {
    fn set_vertex_name(&mut self, u: Node, name: impl Into<String>) {
        self.names[u as usize] = Some(name.into());
    }

    fn vertex_name(&self, u: Node) -> Option<&str> {
        self.names[u as usize].as_deref()
    }
}

impl VisitState for AdjMatrix {
    fn visit(&mut self, u: Node) {
        let flag = &mut self.visited[u as usize];
        self.number_of_visited += !*flag as NumNodes;
        *flag = true;
    }

    fn unvisit(&mut self, u: Node) {
        let flag = &mut self.visited[u as usize];
        self.number_of_visited -= *flag as NumNodes;
        *flag = false;
    }

    fn is_visited(&self, u: Node) -> bool {
        self.visited[u as usize]
    }

    fn number_of_visited(&self) -> NumNodes {
        self.number_of_visited
    }
}

impl std::fmt::Debug for AdjMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use super::super::io::MatrixWriter;
        use std::str;

        let mut buf = Vec::new();
        if self.try_write_matrix(&mut buf).is_ok() {
            f.write_str(str::from_utf8(&buf).unwrap_or_default().trim_end())?;
        }

        Ok(())
    }
}
