use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::data::grid::TimeGrid;
use crate::error::PkError;

/// Column headers used for tabular export
pub const CSV_HEADERS: [&str; 2] = ["Time (hr)", "Concentration (mg/L)"];

/// Row stride used for table previews
pub const DEFAULT_ROW_STRIDE: usize = 50;

/// Simulated concentrations (mg/L) paired with the grid they were evaluated on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationSeries {
    times: Vec<f64>,
    concentrations: Vec<f64>,
}

impl ConcentrationSeries {
    /// Pair `concentrations` with the points of `grid`
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn new(grid: &TimeGrid, concentrations: Vec<f64>) -> Self {
        assert_eq!(
            grid.len(),
            concentrations.len(),
            "times and concentrations must have the same length"
        );
        ConcentrationSeries {
            times: grid.times().to_vec(),
            concentrations,
        }
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn concentrations(&self) -> &[f64] {
        &self.concentrations
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterate over `(time, concentration)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.concentrations.iter().copied())
    }

    /// Every `stride`-th point, starting with the first one
    pub fn every_nth(&self, stride: usize) -> Vec<(f64, f64)> {
        self.iter().step_by(stride.max(1)).collect()
    }

    /// Write the full series as CSV with a header row
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), PkError> {
        let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);
        writer.write_record(CSV_HEADERS)?;
        for (time, conc) in self.iter() {
            writer.write_record([time.to_string(), conc.to_string()])?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Render the series as a CSV string
    pub fn to_csv(&self) -> Result<String, PkError> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
