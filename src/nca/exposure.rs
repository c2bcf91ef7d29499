//! Summary exposure metrics derived from a simulated series

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data::regimen::{DosingRegimen, Route};
use crate::data::series::ConcentrationSeries;
use crate::nca::auc::{auc, AUCMethod};

/// Exposure metrics for one simulated regimen
///
/// Route-specific metrics are `None` for the other route: `c0` is reported
/// for IV bolus only, `cmax`/`tmax` for oral dosing only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureSummary {
    /// Initial concentration `dose / Vd` (mg/L)
    pub c0: Option<f64>,
    /// Highest simulated concentration (mg/L)
    pub cmax: Option<f64>,
    /// Grid time of `cmax` (hr)
    pub tmax: Option<f64>,
    /// Area under the curve over the whole grid (mg·hr/L)
    pub auc: f64,
    /// Last grid time (hr)
    pub horizon: f64,
}

impl ExposureSummary {
    /// Derive the summary of `series`, which must have been simulated from `regimen`.
    ///
    /// Cmax/Tmax come from a search over the grid points, so Tmax is limited
    /// to the grid resolution.
    pub fn from_series(
        regimen: &DosingRegimen,
        series: &ConcentrationSeries,
        method: AUCMethod,
    ) -> Self {
        let auc = auc(series.times(), series.concentrations(), method);
        let horizon = series.times().last().copied().unwrap_or(0.0);

        match regimen.route() {
            Route::IVBolus => ExposureSummary {
                c0: Some(regimen.c0()),
                cmax: None,
                tmax: None,
                auc,
                horizon,
            },
            Route::Oral { .. } => {
                let peak = peak(series);
                ExposureSummary {
                    c0: None,
                    cmax: peak.map(|(_, c)| c),
                    tmax: peak.map(|(t, _)| t),
                    auc,
                    horizon,
                }
            }
        }
    }
}

/// First `(time, concentration)` point holding the maximum concentration
fn peak(series: &ConcentrationSeries) -> Option<(f64, f64)> {
    series.iter().fold(None, |best, (t, c)| match best {
        Some((_, cbest)) if c <= cbest => best,
        _ => Some((t, c)),
    })
}

impl fmt::Display for ExposureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(c0) = self.c0 {
            writeln!(f, "Initial Concentration (C₀): {:.2} mg/L", c0)?;
        }
        if let (Some(cmax), Some(tmax)) = (self.cmax, self.tmax) {
            writeln!(
                f,
                "Peak Concentration (Cmax): {:.2} mg/L at {:.1} hours",
                cmax, tmax
            )?;
        }
        write!(
            f,
            "Area Under Curve (AUC₀–{}): {:.2} mg·hr/L",
            self.horizon, self.auc
        )
    }
}
