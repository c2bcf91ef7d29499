//! Exposure metrics of a simulated concentration series
//!
//! | Metric | Route | Description |
//! |--------|-------|-------------|
//! | C0 | IV bolus | `dose / Vd`, computed from the regimen |
//! | Cmax | Oral | Highest concentration on the grid |
//! | Tmax | Oral | Grid time of Cmax |
//! | AUC | Both | Area under the curve from 0 to the horizon |

pub mod auc;
mod exposure;

pub use auc::{auc, auc_segment, AUCMethod};
pub use exposure::ExposureSummary;
