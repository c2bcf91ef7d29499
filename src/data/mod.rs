pub mod grid;
pub mod regimen;
pub mod series;

pub use grid::TimeGrid;
pub use regimen::{DosingRegimen, RegimenBuilder, Route};
pub use series::ConcentrationSeries;
