//! Defines the station identifier type used to group bulletins, together with the
//! validity rule shared by request preparation and record classification.

use std::fmt;

/// Number of characters in an ICAO-style station identifier.
pub const STATION_ID_LEN: usize = 4;

/// Checks whether `candidate` is shaped like a station identifier.
///
/// Rules: exactly 4 characters, ASCII letters and digits only, and the first character
/// must be a letter. Case is not checked here; [`StationId`] stores the uppercase form.
/// This does not check that the identifier belongs to a real station.
///
/// # Examples
///
/// ```
/// use tafs::is_valid_station;
///
/// assert!(is_valid_station("KJFK"));
/// assert!(is_valid_station("k1a2"));
/// assert!(!is_valid_station("1ABC"));
/// assert!(!is_valid_station("KJF"));
/// ```
pub fn is_valid_station(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    candidate.chars().count() == STATION_ID_LEN
        && first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// A validated, uppercase 4-character station identifier (e.g. "KJFK").
///
/// Ordering is plain lexicographic ordering of the code, which is the order stations
/// appear in a report.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parses `candidate` into a `StationId`, uppercasing it.
    ///
    /// Returns `None` if [`is_valid_station`] rejects the candidate.
    pub fn parse(candidate: &str) -> Option<Self> {
        if is_valid_station(candidate) {
            Some(Self(candidate.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The result of deriving a station from a bulletin record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The record's leading text named a valid station.
    Station(StationId),
    /// The record's leading text did not name a valid station. Such records are
    /// left out of every station grouping.
    Unclassifiable,
}

impl Classification {
    pub fn station(&self) -> Option<&StationId> {
        match self {
            Classification::Station(id) => Some(id),
            Classification::Unclassifiable => None,
        }
    }

    pub fn is_station(&self, station: &StationId) -> bool {
        self.station() == Some(station)
    }
}
