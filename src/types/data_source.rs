//! Defines the two kinds of bulletin the provider serves.

use std::fmt;

/// The bulletin type requested from the data provider.
///
/// Used to build the request (the `dataSource` query parameter) and to label log
/// messages and degraded results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSource {
    /// Terminal Aerodrome Forecasts.
    Tafs,
    /// Routine weather observations.
    Metars,
}

impl DataSource {
    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            DataSource::Tafs => "tafs",
            DataSource::Metars => "metars",
        }
    }
}

/// Formats a `DataSource` using its provider name.
///
/// # Examples
///
/// ```
/// use tafs::DataSource;
///
/// assert_eq!(DataSource::Tafs.to_string(), "tafs");
/// assert_eq!(format!("{}", DataSource::Metars), "metars");
/// ```
impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}
