//! Turns user-supplied station arguments into request-ready identifiers.

use crate::stations::error::StationError;
use crate::types::station::{StationId, STATION_ID_LEN};
use log::warn;

/// At most this many stations are requested, which keeps the comma-joined station
/// list under 256 characters.
pub const MAX_STATIONS: usize = 51;

/// Human-readable form of the station identifier rule.
pub const STATION_RULES: &str =
    "Must consist of 4 characters, A..Z, a..z, 0..9, and start with a letter.";

/// Prepares station arguments for a request.
///
/// Only the first [`MAX_STATIONS`] inputs are used. Each one is cut to 4 characters and
/// uppercased before validation, so `"kjfk"` and `"KJFKX"` both become `KJFK`.
///
/// # Errors
///
/// Returns [`StationError::InvalidStation`] for the first invalid input unless
/// `ignore_malformed` is set, in which case invalid inputs are skipped. Returns
/// [`StationError::NoValidStations`] if nothing valid remains.
///
/// # Examples
///
/// ```
/// use tafs::prepare_stations;
///
/// let stations = prepare_stations(&["kjfk", "9ZZZ", "egllx"], true).unwrap();
/// let codes: Vec<&str> = stations.iter().map(|s| s.as_str()).collect();
/// assert_eq!(codes, ["KJFK", "EGLL"]);
///
/// assert!(prepare_stations(&["kjfk", "9ZZZ"], false).is_err());
/// ```
pub fn prepare_stations<S: AsRef<str>>(
    inputs: &[S],
    ignore_malformed: bool,
) -> Result<Vec<StationId>, StationError> {
    let mut stations = Vec::new();
    for input in inputs.iter().take(MAX_STATIONS) {
        let candidate: String = input.as_ref().chars().take(STATION_ID_LEN).collect();
        match StationId::parse(&candidate) {
            Some(station) => stations.push(station),
            None if ignore_malformed => warn!("Ignoring malformed station ID '{}'", candidate),
            None => return Err(StationError::InvalidStation(candidate)),
        }
    }

    if stations.is_empty() {
        return Err(StationError::NoValidStations);
    }
    Ok(stations)
}

/// Joins stations into the provider's comma-separated station list.
pub fn station_string(stations: &[StationId]) -> String {
    stations
        .iter()
        .map(StationId::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
