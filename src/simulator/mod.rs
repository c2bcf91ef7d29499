//! Concentration-time simulation of a dosing regimen
//!
//! [`simulate`] is the single entry point of the model: it lays out the
//! [`TimeGrid`], superposes every administration on it and reduces the
//! resulting series to an [`ExposureSummary`].
//!
//! ```rust
//! use pkexposure::prelude::*;
//!
//! let regimen = DosingRegimen::builder(Route::IVBolus, 500.0, 50.0, 0.2)
//!     .build()
//!     .unwrap();
//! let simulation = simulate(&regimen, &SimulationOptions::default());
//!
//! assert_eq!(simulation.summary.c0, Some(10.0));
//! assert!((simulation.summary.auc - 49.59).abs() < 0.01);
//! ```

pub mod analytical;
pub mod options;
pub mod superposition;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::grid::{horizon, TimeGrid};
use crate::data::regimen::DosingRegimen;
use crate::data::series::ConcentrationSeries;
use crate::error::PkError;
use crate::nca::ExposureSummary;

pub use options::{DoseOnset, SimulationOptions};

/// Output of one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub regimen: DosingRegimen,
    pub series: ConcentrationSeries,
    pub summary: ExposureSummary,
}

/// Simulate `regimen` on the grid described by `options`.
///
/// Both arguments are assumed valid; [`try_simulate`] checks them first.
pub fn simulate(regimen: &DosingRegimen, options: &SimulationOptions) -> Simulation {
    let span = horizon(regimen, options.tail_hours);
    tracing::debug!(
        route = %regimen.route(),
        dose = regimen.dose(),
        vd = regimen.vd(),
        k = regimen.k(),
        tau = regimen.tau(),
        doses = regimen.doses(),
        horizon = span,
        samples = options.samples,
        "simulating regimen"
    );

    let grid = TimeGrid::linspace(span, options.samples);
    let concentrations = superposition::superpose(regimen, &grid, options.onset);
    let series = ConcentrationSeries::new(&grid, concentrations);
    let summary = ExposureSummary::from_series(regimen, &series, options.auc_method);

    tracing::debug!(auc = summary.auc, cmax = ?summary.cmax, tmax = ?summary.tmax, "simulation done");

    Simulation {
        regimen: *regimen,
        series,
        summary,
    }
}

/// Validate `regimen` and `options`, then [`simulate`]
pub fn try_simulate(
    regimen: &DosingRegimen,
    options: &SimulationOptions,
) -> Result<Simulation, PkError> {
    regimen.validate()?;
    options.validate()?;
    Ok(simulate(regimen, options))
}

/// Simulate independent regimens in parallel; results keep the input order
pub fn simulate_many(regimens: &[DosingRegimen], options: &SimulationOptions) -> Vec<Simulation> {
    regimens
        .par_iter()
        .map(|regimen| simulate(regimen, options))
        .collect()
}

impl DosingRegimen {
    /// Simulate with [`SimulationOptions::default`]
    pub fn simulate(&self) -> Simulation {
        simulate(self, &SimulationOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::regimen::Route;

    #[test]
    fn series_matches_grid() {
        let regimen = DosingRegimen::builder(Route::IVBolus, 500.0, 50.0, 0.2)
            .multiple(8.0, 3)
            .build()
            .unwrap();
        let simulation = regimen.simulate();
        assert_eq!(simulation.series.len(), 1000);
        assert_eq!(simulation.summary.horizon, simulation.series.times()[999]);
        assert!(simulation.series.concentrations().iter().all(|&c| c >= 0.0));
    }

    #[test]
    fn try_simulate_rejects_bad_options() {
        let regimen = DosingRegimen::builder(Route::IVBolus, 500.0, 50.0, 0.2)
            .build()
            .unwrap();
        let options = SimulationOptions::default().with_samples(0);
        assert!(matches!(
            try_simulate(&regimen, &options),
            Err(PkError::InvalidGrid { .. })
        ));
    }
}
