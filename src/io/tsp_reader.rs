use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use log::{trace, warn};

use crate::graph::{
    GraphEdgeEditing, GraphNew, Node, NumEdges, NumNodes, VertexNames, WeightedEdge,
};

pub type Result<T> = std::io::Result<T>;

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

macro_rules! parse_next_value {
    ($next : expr, $name : expr) => {{
        let next = $next;
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of file when parsing {}.", $name)
        );

        let token = next.unwrap_or_default();
        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(std::io::Error::new(
                    ErrorKind::InvalidData,
                    format!("Invalid value {:?} found. Cannot parse {}.", token, $name),
                ));
            }
        }
    }};
}

pub trait GraphTspReader: Sized {
    fn try_read_tsp<R: BufRead>(reader: R, directed: bool) -> Result<Self>;
    fn try_read_tsp_file<P: AsRef<Path>>(path: P, directed: bool) -> Result<Self>;
}

impl<G> GraphTspReader for G
where
    G: GraphNew + GraphEdgeEditing + VertexNames,
{
    fn try_read_tsp<R: BufRead>(reader: R, directed: bool) -> Result<Self> {
        let mut tsp_reader = TspReader::try_new(reader)?;
        let mut graph = Self::new(tsp_reader.number_of_nodes(), directed);

        for (u, name) in tsp_reader.take_names().into_iter().enumerate() {
            graph.set_vertex_name(u as Node, name);
        }

        for edge in tsp_reader.by_ref() {
            let WeightedEdge(u, v, weight) = edge?;
            graph.add_edge(u, v, weight);
        }

        if tsp_reader.has_trailing_data()? {
            warn!("Ignoring data after the last edge");
        }

        Ok(graph)
    }

    fn try_read_tsp_file<P: AsRef<Path>>(path: P, directed: bool) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_tsp(buf_reader, directed)
    }
}

/// Parser for the instance format
///
/// ```text
/// <number of nodes n>
/// <name of node 0>
/// ...
/// <name of node n-1>
/// <number of edges m>
/// <source> <target> <weight>   (m times)
/// ```
///
/// Names are taken verbatim from their lines. All numbers are non-negative integers; the
/// edge records are separated by arbitrary whitespace. The header (node count and names) is
/// parsed on construction, afterwards the reader yields the edges.
pub struct TspReader<R> {
    lines: Lines<R>,
    tokens: VecDeque<String>,
    number_of_nodes: NumNodes,
    number_of_edges: NumEdges,
    edges_read: NumEdges,
    names: Vec<String>,
}

impl<R: BufRead> TspReader<R> {
    pub fn try_new(reader: R) -> Result<Self> {
        let mut tsp_reader = Self {
            lines: reader.lines(),
            tokens: VecDeque::new(),
            number_of_nodes: 0,
            number_of_edges: 0,
            edges_read: 0,
            names: Vec::new(),
        };

        tsp_reader.number_of_nodes = tsp_reader.parse_number_of_nodes()?;
        tsp_reader.names = tsp_reader.parse_names()?;
        tsp_reader.number_of_edges =
            parse_next_value!(tsp_reader.next_token()?, "Number of edges");

        trace!(
            "Header: n={} m={}",
            tsp_reader.number_of_nodes,
            tsp_reader.number_of_edges
        );

        Ok(tsp_reader)
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn take_names(&mut self) -> Vec<String> {
        std::mem::take(&mut self.names)
    }
}

impl<R: BufRead> Iterator for TspReader<R> {
    type Item = Result<WeightedEdge>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.edges_read == self.number_of_edges {
            return None;
        }

        let edge = self.parse_edge();
        self.edges_read += 1;
        if edge.is_err() {
            // do not report the same truncated input over and over
            self.edges_read = self.number_of_edges;
        }
        Some(edge)
    }
}

impl<R: BufRead> TspReader<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            None => Ok(None),
            Some(Err(x)) => Err(x),
            Some(Ok(mut line)) => {
                if line.ends_with('\r') {
                    line.pop();
                }
                Ok(Some(line))
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.tokens.is_empty() {
            match self.next_line()? {
                None => return Ok(None),
                Some(line) => self
                    .tokens
                    .extend(line.split_whitespace().map(|t| t.to_string())),
            }
        }
        Ok(self.tokens.pop_front())
    }

    fn parse_number_of_nodes(&mut self) -> Result<NumNodes> {
        let line = loop {
            match self.next_line()? {
                None => break None,
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break Some(line),
            }
        };

        raise_error_unless!(
            line.is_some(),
            ErrorKind::InvalidData,
            "No header found"
        );

        let line = line.unwrap_or_default();
        let mut parts = line.split_whitespace().map(|t| t.to_string());
        let number_of_nodes = parse_next_value!(parts.next(), "Number of nodes");

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Invalid header found; expected end of line after number of nodes"
        );

        let n = number_of_nodes as usize;
        raise_error_unless!(
            n.checked_mul(n).is_some(),
            ErrorKind::InvalidData,
            format!("Number of nodes {number_of_nodes} is too large")
        );

        Ok(number_of_nodes)
    }

    fn parse_names(&mut self) -> Result<Vec<String>> {
        // grows with the lines actually present, never with the declared node count
        let mut names = Vec::new();
        for u in 0..self.number_of_nodes {
            let line = self.next_line()?;
            raise_error_unless!(
                line.is_some(),
                ErrorKind::InvalidData,
                format!("Premature end of file when parsing name of node {u}.")
            );
            names.push(line.unwrap_or_default());
        }
        Ok(names)
    }

    fn parse_edge(&mut self) -> Result<WeightedEdge> {
        let from: Node = parse_next_value!(self.next_token()?, "Source node");
        let dest: Node = parse_next_value!(self.next_token()?, "Target node");
        let weight = parse_next_value!(self.next_token()?, "Edge weight");

        raise_error_unless!(
            from < self.number_of_nodes && dest < self.number_of_nodes,
            ErrorKind::InvalidData,
            format!(
                "Edge ({from}, {dest}) references a node outside of 0..{}",
                self.number_of_nodes
            )
        );

        Ok(WeightedEdge(from, dest, weight))
    }

    /// Returns *true* if there are non-whitespace characters after the last edge
    fn has_trailing_data(&mut self) -> Result<bool> {
        Ok(self.next_token()?.is_some())
    }
}
