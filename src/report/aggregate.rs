//! Per-station lookups over a built [`StationIndex`].

use crate::report::index::StationIndex;
use crate::types::bulletin::ReportLine;
use crate::types::station::StationId;
use log::warn;

/// Collects up to `max` METARs for `station`, followed by a blank separator line.
///
/// Records are taken in the index's sorted order. Returns an empty block if the station
/// has no METARs or `max` is 0.
pub fn collect_metars(
    metars: &StationIndex<'_>,
    station: &StationId,
    max: usize,
) -> Vec<ReportLine> {
    let mut lines: Vec<ReportLine> = metars
        .records(station)
        .iter()
        .take(max)
        .map(|metar| ReportLine::from(*metar))
        .collect();
    if !lines.is_empty() {
        lines.push(ReportLine::blank());
    }
    lines
}

/// Finds the first TAF for `station` in the index.
///
/// A leading `TAF` label in front of the station code is allowed, and kept in the
/// returned text. If no TAF matches, a `"<STATION> TAF not found"` placeholder is returned
/// instead; that only happens when the station list and the records disagree.
pub fn locate_taf(tafs: &StationIndex<'_>, station: &StationId) -> ReportLine {
    match tafs.records(station).first() {
        Some(taf) => ReportLine::from(*taf),
        None => {
            warn!("Station {} was listed with a TAF but none matched", station);
            ReportLine::from(format!("{station} TAF not found"))
        }
    }
}
