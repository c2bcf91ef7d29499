pub mod data;
pub mod error;
pub mod logging;
pub mod nca;
pub mod plot;
pub mod simulator;

pub use crate::data::*;
pub use crate::nca::{AUCMethod, ExposureSummary};
pub use crate::simulator::{
    simulate, simulate_many, try_simulate, DoseOnset, Simulation, SimulationOptions,
};
pub use error::PkError;

pub mod prelude {
    pub mod data {
        pub use crate::data::{
            ConcentrationSeries, DosingRegimen, RegimenBuilder, Route, TimeGrid,
        };
    }
    pub mod simulator {
        pub use crate::simulator::{
            simulate, simulate_many, superposition::superpose, try_simulate, DoseOnset,
            Simulation, SimulationOptions,
        };
    }
    pub mod models {
        pub use crate::simulator::analytical::iv_concentration;
        pub use crate::simulator::analytical::oral_concentration;
    }

    pub use crate::data::*;
    pub use crate::nca::{AUCMethod, ExposureSummary};
    pub use crate::simulator::{simulate, DoseOnset, Simulation, SimulationOptions};
    pub use crate::PkError;
}
