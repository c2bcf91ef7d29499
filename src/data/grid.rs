use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::data::regimen::DosingRegimen;
use crate::error::PkError;

/// Evenly spaced sampling times over `[0, horizon]`, both ends included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    times: Vec<f64>,
}

impl TimeGrid {
    /// Build a grid of `samples` points from 0 to `horizon`
    pub fn new(horizon: f64, samples: usize) -> Result<Self, PkError> {
        if samples < 2 {
            return Err(PkError::InvalidGrid {
                reason: format!("at least 2 samples are required, got {}", samples),
            });
        }
        if !(horizon.is_finite() && horizon > 0.0) {
            return Err(PkError::InvalidGrid {
                reason: format!("horizon must be positive, got {}", horizon),
            });
        }
        Ok(Self::linspace(horizon, samples))
    }

    pub(crate) fn linspace(horizon: f64, samples: usize) -> Self {
        TimeGrid {
            times: Array1::linspace(0.0, horizon, samples).to_vec(),
        }
    }

    /// Grid covering every administration of `regimen` plus `tail_hours` of washout
    pub fn for_regimen(
        regimen: &DosingRegimen,
        tail_hours: f64,
        samples: usize,
    ) -> Result<Self, PkError> {
        TimeGrid::new(horizon(regimen, tail_hours), samples)
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Last sampling time
    pub fn horizon(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }
}

/// Simulated span: the washout tail alone for a single dose, otherwise `n·τ + tail`
pub fn horizon(regimen: &DosingRegimen, tail_hours: f64) -> f64 {
    if regimen.is_multiple() {
        regimen.doses() as f64 * regimen.tau() + tail_hours
    } else {
        tail_hours
    }
}
