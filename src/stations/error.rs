use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StationError {
    #[error("Invalid station ID '{0}'.")]
    InvalidStation(String),

    #[error("No valid stations provided.")]
    NoValidStations,
}
