use std::io::Write;

use super::super::graph::*;

/// Renders the weight matrix as a table; rows are sources, columns are targets.
/// Missing edges are shown as `-`.
pub trait MatrixWriter {
    fn try_write_matrix<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
}

impl<T> MatrixWriter for T
where
    T: GraphNodeOrder + AdjacencyTest,
{
    fn try_write_matrix<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        const LABEL_WIDTH: usize = 19;

        write!(writer, "{:<LABEL_WIDTH$}", "going to city #")?;
        for v in self.vertices() {
            write!(writer, "{v:>5}")?;
        }
        writeln!(writer)?;
        writeln!(writer)?;

        for u in self.vertices() {
            write!(writer, "{:<LABEL_WIDTH$}", format!("starting at city #{u}"))?;
            for v in self.vertices() {
                match self.edge_weight(u, v) {
                    Some(w) => write!(writer, "{w:>5}")?,
                    None => write!(writer, "{:>5}", "-")?,
                }
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hard_coded() {
        let graph = AdjMatrix::test_only_from(2, true, [(0, 1, 7), (1, 1, 0)]);

        let mut buffer: Vec<u8> = Vec::new();
        graph.try_write_matrix(&mut buffer).expect("Failed to write");
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(
            output,
            concat!(
                "going to city #        0    1\n",
                "\n",
                "starting at city #0    -    7\n",
                "starting at city #1    -    0\n",
            )
        );
        assert_eq!(format!("{graph:?}"), output.trim_end());
    }
}
