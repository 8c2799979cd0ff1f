use crate::stations::error::StationError;
use thiserror::Error;

/// Errors that fail a whole report.
///
/// Fetch and extraction failures do not appear here: they only drop the affected data
/// source, which is then listed in [`Report::degraded`](crate::Report::degraded).
#[derive(Debug, Error)]
pub enum TafsError {
    #[error(transparent)]
    Station(#[from] StationError),
}
