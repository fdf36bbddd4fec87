pub mod tsp_reader;
pub use tsp_reader::{GraphTspReader, TspReader};
pub mod tour_writer;
pub use tour_writer::*;

pub mod dot_writer;
pub use dot_writer::DotWriter;
pub mod matrix_writer;
pub use matrix_writer::MatrixWriter;
