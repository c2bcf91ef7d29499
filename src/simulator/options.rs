use serde::{Deserialize, Serialize};

use crate::error::PkError;
use crate::nca::AUCMethod;

/// Number of grid points used when none is configured
pub const DEFAULT_SAMPLES: usize = 1000;

/// Hours simulated past the last administration
pub const DEFAULT_TAIL_HOURS: f64 = 24.0;

/// How a dose contributes to grid points that precede its administration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoseOnset {
    /// No contribution until the dose is given
    #[default]
    Mask,
    /// Shifted time is clamped to zero, so the dose contributes its `t = 0`
    /// value (C0 for an IV bolus, zero for oral) before it is given
    Clamp,
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationOptions {
    /// Number of grid points over the simulated span (default: 1000)
    pub samples: usize,

    /// Washout simulated after the last administration, in hours (default: 24)
    pub tail_hours: f64,

    /// Pre-administration handling of later doses (default: Mask)
    pub onset: DoseOnset,

    /// AUC calculation method (default: Linear)
    pub auc_method: AUCMethod,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            tail_hours: DEFAULT_TAIL_HOURS,
            onset: DoseOnset::Mask,
            auc_method: AUCMethod::Linear,
        }
    }
}

impl SimulationOptions {
    /// Settings that reproduce the clamped dose onset of the reference tool
    pub fn reference() -> Self {
        Self {
            onset: DoseOnset::Clamp,
            ..Default::default()
        }
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_tail_hours(mut self, tail_hours: f64) -> Self {
        self.tail_hours = tail_hours;
        self
    }

    pub fn with_onset(mut self, onset: DoseOnset) -> Self {
        self.onset = onset;
        self
    }

    pub fn with_auc_method(mut self, method: AUCMethod) -> Self {
        self.auc_method = method;
        self
    }

    pub fn validate(&self) -> Result<(), PkError> {
        if self.samples < 2 {
            return Err(PkError::InvalidGrid {
                reason: format!("at least 2 samples are required, got {}", self.samples),
            });
        }
        if !(self.tail_hours.is_finite() && self.tail_hours > 0.0) {
            return Err(PkError::InvalidGrid {
                reason: format!("tail must be positive, got {}", self.tail_hours),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = SimulationOptions::default();
        assert_eq!(options.samples, 1000);
        assert_eq!(options.tail_hours, 24.0);
        assert_eq!(options.onset, DoseOnset::Mask);
        assert_eq!(options.auc_method, AUCMethod::Linear);
        assert!(options.validate().is_ok());
        assert_eq!(SimulationOptions::reference().onset, DoseOnset::Clamp);
    }

    #[test]
    fn builders_chain() {
        let options = SimulationOptions::default()
            .with_samples(10_000)
            .with_tail_hours(48.0)
            .with_onset(DoseOnset::Clamp)
            .with_auc_method(AUCMethod::LinUpLogDown);
        assert_eq!(options.samples, 10_000);
        assert_eq!(options.tail_hours, 48.0);
        assert_eq!(options.onset, DoseOnset::Clamp);
        assert_eq!(options.auc_method, AUCMethod::LinUpLogDown);
    }

    #[test]
    fn rejects_bad_grid_settings() {
        assert!(SimulationOptions::default().with_samples(1).validate().is_err());
        assert!(SimulationOptions::default()
            .with_tail_hours(0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let options: SimulationOptions = serde_json::from_str(r#"{"onset":"clamp"}"#).unwrap();
        assert_eq!(options.onset, DoseOnset::Clamp);
        assert_eq!(options.samples, DEFAULT_SAMPLES);
    }
}
