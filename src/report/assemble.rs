use crate::report::aggregate::{collect_metars, locate_taf};
use crate::report::index::StationIndex;
use crate::report::partition::partition;
use crate::types::bulletin::ReportLine;
use crate::types::station::StationId;
use std::collections::BTreeSet;

/// Builds the ordered report lines from both indexed record sets.
///
/// Solo METAR stations come first, one block each. Then every TAF station gets its
/// METAR block, its TAF and a blank line. Both groups are in ascending station order,
/// whatever order the stations were requested or returned in. At most `max_metars`
/// METARs are printed per station.
pub fn assemble(
    tafs: &StationIndex<'_>,
    metars: &StationIndex<'_>,
    taf_stations: &[StationId],
    metar_stations: &[StationId],
    max_metars: usize,
) -> Vec<ReportLine> {
    let taf_stations: BTreeSet<&StationId> = taf_stations.iter().collect();
    let split = partition(metar_stations, taf_stations.iter().copied());

    let mut lines = Vec::new();
    for station in &split.solo {
        lines.extend(collect_metars(metars, station, max_metars));
    }
    for station in taf_stations {
        lines.extend(collect_metars(metars, station, max_metars));
        lines.push(locate_taf(tafs, station));
        lines.push(ReportLine::blank());
    }
    lines
}
