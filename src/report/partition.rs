use crate::types::station::StationId;
use std::collections::BTreeSet;

/// METAR stations split by whether a TAF was also returned for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Stations with METARs but no TAF; printed as standalone METAR blocks.
    pub solo: BTreeSet<StationId>,
    /// Stations with both. Their METARs are printed above the TAF.
    pub affiliated: BTreeSet<StationId>,
}

/// Splits `metar_stations` into solo and affiliated stations.
///
/// Input order and duplicates do not matter.
pub fn partition<'a, M, T>(metar_stations: M, taf_stations: T) -> Partition
where
    M: IntoIterator<Item = &'a StationId>,
    T: IntoIterator<Item = &'a StationId>,
{
    let taf_stations: BTreeSet<&StationId> = taf_stations.into_iter().collect();
    let mut result = Partition::default();
    for station in metar_stations {
        if taf_stations.contains(station) {
            result.affiliated.insert(station.clone());
        } else {
            result.solo.insert(station.clone());
        }
    }
    result
}
