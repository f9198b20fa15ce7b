use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("Unknown planet: {0}")]
    UnknownPlanet(String),

    #[error("Invalid date string: {0} (expected MM/DD/YYYY)")]
    InvalidDateFormat(String),

    #[error("Epoch construction error: {0}")]
    EpochError(#[from] hifitime::HifitimeError),
}
