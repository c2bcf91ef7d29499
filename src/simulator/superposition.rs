//! Multiple-dose concentration series by linear superposition
//!
//! The one-compartment model is linear and time-invariant, so the profile of
//! `n` administrations spaced `τ` apart is the sum of `n` copies of the
//! single-dose curve, the `i`-th one shifted right by `i·τ`.
//!
//! Grid points that precede an administration are handled according to
//! [`DoseOnset`]: masked out, or evaluated at a shifted time clamped to zero.

use ndarray::{Array1, ArrayView1};

use crate::data::grid::TimeGrid;
use crate::data::regimen::DosingRegimen;
use crate::simulator::analytical::single_dose_concentration;
use crate::simulator::options::DoseOnset;

/// Total concentration of every administration in `regimen` at each point of `grid`.
///
/// The regimen is assumed valid; see [`DosingRegimen::validate`].
pub fn superpose(regimen: &DosingRegimen, grid: &TimeGrid, onset: DoseOnset) -> Vec<f64> {
    let times = ArrayView1::from(grid.times());
    let mut total = Array1::<f64>::zeros(times.len());

    for dose in 0..regimen.doses() {
        let offset = dose as f64 * regimen.tau();
        tracing::trace!(dose, offset, "superposing administration");
        total.zip_mut_with(&times, |conc, &t| {
            *conc += dose_contribution(regimen, t - offset, onset);
        });
    }

    total.to_vec()
}

/// Contribution of one administration at `shifted` hours relative to it
#[inline]
pub fn dose_contribution(regimen: &DosingRegimen, shifted: f64, onset: DoseOnset) -> f64 {
    if shifted >= 0.0 {
        return single_dose_concentration(regimen, shifted);
    }
    match onset {
        DoseOnset::Mask => 0.0,
        DoseOnset::Clamp => single_dose_concentration(regimen, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::regimen::Route;
    use crate::simulator::analytical::iv_concentration;
    use approx::assert_relative_eq;

    fn iv(doses: usize) -> DosingRegimen {
        DosingRegimen::builder(Route::IVBolus, 500.0, 50.0, 0.2)
            .multiple(8.0, doses)
            .build()
            .unwrap()
    }

    #[test]
    fn single_dose_equals_closed_form() {
        let regimen = iv(1);
        let grid = TimeGrid::new(24.0, 241).unwrap();
        let concs = superpose(&regimen, &grid, DoseOnset::Mask);
        for (&t, &c) in grid.times().iter().zip(concs.iter()) {
            assert_relative_eq!(c, iv_concentration(10.0, 0.2, t), epsilon = 1e-12);
        }
    }

    #[test]
    fn mask_starts_at_one_c0() {
        let grid = TimeGrid::new(48.0, 1000).unwrap();
        let concs = superpose(&iv(3), &grid, DoseOnset::Mask);
        assert_relative_eq!(concs[0], 10.0, epsilon = 1e-12);
    }

    #[test]
    fn clamp_injects_every_later_dose_at_time_zero() {
        let grid = TimeGrid::new(48.0, 1000).unwrap();
        let concs = superpose(&iv(3), &grid, DoseOnset::Clamp);
        assert_relative_eq!(concs[0], 30.0, epsilon = 1e-12);
    }

    #[test]
    fn onset_policy_does_not_affect_oral() {
        let regimen = DosingRegimen::builder(Route::Oral { ka: 1.0 }, 500.0, 50.0, 0.2)
            .multiple(8.0, 3)
            .build()
            .unwrap();
        let grid = TimeGrid::new(48.0, 1000).unwrap();
        assert_eq!(
            superpose(&regimen, &grid, DoseOnset::Mask),
            superpose(&regimen, &grid, DoseOnset::Clamp)
        );
    }

    #[test]
    fn contribution_before_administration() {
        let regimen = iv(2);
        assert_eq!(dose_contribution(&regimen, -1.0, DoseOnset::Mask), 0.0);
        assert_eq!(dose_contribution(&regimen, -1.0, DoseOnset::Clamp), 10.0);
        assert_eq!(dose_contribution(&regimen, 0.0, DoseOnset::Mask), 10.0);
    }
}
