//! Dosing regimens and the validation boundary in front of the model.
//!
//! A [`DosingRegimen`] is the only input the simulator consumes. It is built
//! through [`DosingRegimen::builder`], which rejects every parameter the
//! closed-form equations cannot handle, so the numerical core can stay total.
//!
//! ```rust
//! use pkexposure::prelude::*;
//!
//! let regimen = DosingRegimen::builder(Route::Oral { ka: 1.0 }, 500.0, 50.0, 0.2)
//!     .multiple(8.0, 3)
//!     .build()
//!     .unwrap();
//! assert_eq!(regimen.doses(), 3);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PkError;

/// Dosing interval used when a regimen is single-dose
pub const DEFAULT_TAU: f64 = 8.0;

/// Route of administration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Route {
    /// Instantaneous intravenous injection
    #[serde(rename = "iv_bolus")]
    IVBolus,
    /// Extravascular dose with first-order absorption rate `ka` (1/hr)
    #[serde(rename = "oral")]
    Oral { ka: f64 },
}

impl Route {
    /// Absorption rate constant, if the route has one
    pub fn ka(&self) -> Option<f64> {
        match self {
            Route::IVBolus => None,
            Route::Oral { ka } => Some(*ka),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::IVBolus => write!(f, "IV Bolus"),
            Route::Oral { .. } => write!(f, "Oral Dosing"),
        }
    }
}

/// One-compartment dosing regimen
///
/// Units are fixed: mg for the dose, L for the volume of distribution,
/// hours for time and 1/hr for rate constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DosingRegimen {
    route: Route,
    dose: f64,
    vd: f64,
    k: f64,
    #[serde(default = "default_tau")]
    tau: f64,
    #[serde(default = "default_doses")]
    doses: usize,
}

fn default_tau() -> f64 {
    DEFAULT_TAU
}

fn default_doses() -> usize {
    1
}

impl DosingRegimen {
    /// Start a single-dose regimen; see [`RegimenBuilder::multiple`] for repeated dosing
    pub fn builder(route: Route, dose: f64, vd: f64, k: f64) -> RegimenBuilder {
        RegimenBuilder {
            route,
            dose,
            vd,
            k,
            tau: DEFAULT_TAU,
            doses: 1,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn dose(&self) -> f64 {
        self.dose
    }

    pub fn vd(&self) -> f64 {
        self.vd
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn tau(&self) -> f64 {
        self.tau
    }

    pub fn doses(&self) -> usize {
        self.doses
    }

    /// `true` when more than one administration is simulated
    pub fn is_multiple(&self) -> bool {
        self.doses > 1
    }

    /// Initial concentration of a single IV bolus, `dose / Vd`
    pub fn c0(&self) -> f64 {
        self.dose / self.vd
    }

    /// Check every parameter against its admissible range.
    ///
    /// Regimens obtained from the builder are already valid; this exists for
    /// regimens that arrive through deserialization.
    pub fn validate(&self) -> Result<(), PkError> {
        positive("dose", self.dose)?;
        positive("vd", self.vd)?;
        positive("k", self.k)?;
        if let Route::Oral { ka } = self.route {
            positive("ka", ka)?;
        }
        if self.doses == 0 {
            return Err(PkError::NoDoses);
        }
        if self.is_multiple() && !(self.tau.is_finite() && self.tau >= 1.0) {
            return Err(PkError::invalid("tau", self.tau));
        }
        Ok(())
    }
}

fn positive(param: &str, value: f64) -> Result<(), PkError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PkError::invalid(param, value))
    }
}

/// Builder for [`DosingRegimen`]
#[derive(Debug, Clone)]
pub struct RegimenBuilder {
    route: Route,
    dose: f64,
    vd: f64,
    k: f64,
    tau: f64,
    doses: usize,
}

impl RegimenBuilder {
    /// Repeat the dose `doses` times, every `tau` hours
    pub fn multiple(mut self, tau: f64, doses: usize) -> Self {
        self.tau = tau;
        self.doses = doses;
        self
    }

    pub fn build(self) -> Result<DosingRegimen, PkError> {
        let regimen = DosingRegimen {
            route: self.route,
            dose: self.dose,
            vd: self.vd,
            k: self.k,
            tau: self.tau,
            doses: self.doses,
        };
        regimen.validate()?;
        Ok(regimen)
    }
}
