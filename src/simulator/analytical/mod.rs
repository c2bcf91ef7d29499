//! Closed-form single-dose concentration curves.
//!
//! Each function returns the plasma concentration contributed by one
//! administration at a given time after that administration. Multiple
//! doses are combined in [`crate::simulator::superposition`].

pub mod one_compartment_models;

pub use one_compartment_models::*;

use crate::data::regimen::{DosingRegimen, Route};

/// Concentration contributed by a single administration of `regimen`'s dose,
/// `t` hours after it was given
#[inline]
pub fn single_dose_concentration(regimen: &DosingRegimen, t: f64) -> f64 {
    match regimen.route() {
        Route::IVBolus => iv_concentration(regimen.c0(), regimen.k(), t),
        Route::Oral { ka } => oral_concentration(regimen.dose(), regimen.vd(), ka, regimen.k(), t),
    }
}
