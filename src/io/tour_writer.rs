use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path as FsPath,
};

use crate::{graph::VertexNames, utils::Path};

pub const TOUR_HEADER: &str = "Alissa starts at:";
pub const NO_TOUR_MESSAGE: &str = "No path found! Alissa is lost!";

/// Writes the solution of a tour search: a header, the names along the tour (start vertex
/// first and last) and the total distance. If there is no tour, only a diagnostic message
/// is written.
pub trait TourWriter {
    fn try_write_tour<W: Write>(&self, writer: W, tour: Option<&Path>) -> std::io::Result<()>;

    fn try_write_tour_file<P: AsRef<FsPath>>(
        &self,
        path: P,
        tour: Option<&Path>,
    ) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_tour(&mut writer, tour)?;
        writer.flush()
    }
}

impl<G: VertexNames> TourWriter for G {
    fn try_write_tour<W: Write>(&self, mut writer: W, tour: Option<&Path>) -> std::io::Result<()> {
        let Some(tour) = tour else {
            return writeln!(writer, "{NO_TOUR_MESSAGE}");
        };

        writeln!(writer, "{TOUR_HEADER}")?;
        tour.write_names(&mut writer, self)?;
        writeln!(writer, "Total Distance: {}", tour.total_weight())
    }
}
