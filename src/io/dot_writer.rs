use std::{
    fs::File,
    io::{BufWriter, Write},
};

use fxhash::FxHashSet;

use super::super::{graph::*, utils::Path};

/// produces a minimalistic DOT representation of the graph with weights as edge labels;
/// edges on the tour (if given) are highlighted
pub trait DotWriter {
    fn try_write_dot<W: Write>(&self, writer: W, tour: Option<&Path>) -> Result<(), std::io::Error>;

    fn try_write_dot_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
        tour: Option<&Path>,
    ) -> Result<(), std::io::Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(&mut writer, tour)?;
        writer.flush()
    }
}

impl DotWriter for AdjMatrix {
    fn try_write_dot<W: Write>(
        &self,
        mut writer: W,
        tour: Option<&Path>,
    ) -> Result<(), std::io::Error> {
        let (keyword, connector) = if self.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        // undirected edges are stored normalized, matching the order of `ordered_edges`
        let key = |u, v| {
            let edge = Edge(u, v);
            if self.is_directed() { edge } else { edge.normalized() }
        };

        let on_tour: FxHashSet<Edge> = tour
            .into_iter()
            .flat_map(|tour| tour.vertices().zip(tour.vertices().skip(1)))
            .map(|(u, v)| key(u, v))
            .collect();

        writeln!(writer, "{keyword} G {{")?;
        for u in self.vertices() {
            writeln!(writer, "  v{u} [label={:?}];", self.display_name(u))?;
        }
        for WeightedEdge(u, v, w) in self.ordered_edges() {
            if on_tour.contains(&key(u, v)) {
                writeln!(writer, "  v{u} {connector} v{v} [label={w}, color=red, penwidth=2];")?;
            } else {
                writeln!(writer, "  v{u} {connector} v{v} [label={w}];")?;
            }
        }
        writeln!(writer, "}}")
    }
}
