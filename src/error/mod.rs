use thiserror::Error;

/// Errors raised at the validation boundary and by the export helpers.
///
/// The numerical core never fails: every variant here is produced either
/// while building a [`crate::DosingRegimen`] / [`crate::SimulationOptions`]
/// or while serializing results.
#[derive(Error, Debug)]
pub enum PkError {
    /// A regimen parameter is out of its admissible range
    #[error("Invalid parameter: {param} = {value}")]
    InvalidParameter { param: String, value: String },

    /// The regimen has no administrations
    #[error("Number of doses must be at least 1")]
    NoDoses,

    /// The time grid cannot be built from the given options
    #[error("Invalid time grid: {reason}")]
    InvalidGrid { reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Plot error: {0}")]
    Plot(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PkError {
    pub(crate) fn invalid(param: &str, value: impl ToString) -> Self {
        PkError::InvalidParameter {
            param: param.to_string(),
            value: value.to_string(),
        }
    }
}
