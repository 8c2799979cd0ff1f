//! Groups bulletin records by the station they belong to.

use crate::extraction::classifier::classify;
use crate::types::bulletin::BulletinRecord;
use crate::types::station::{Classification, StationId};
use std::collections::BTreeMap;

/// Station → records index over one extracted record set.
///
/// Records are visited in sorted order, so each station's records keep the order they
/// are displayed in. Unclassifiable records are counted but not indexed; they stay in
/// the caller's raw collection.
#[derive(Debug, Clone, Default)]
pub struct StationIndex<'a> {
    by_station: BTreeMap<StationId, Vec<&'a BulletinRecord>>,
    unclassified: usize,
}

impl<'a> StationIndex<'a> {
    pub fn build(records: &'a [BulletinRecord]) -> Self {
        let mut sorted: Vec<&BulletinRecord> = records.iter().collect();
        sorted.sort();

        let mut index = Self::default();
        for record in sorted {
            match classify(record) {
                Classification::Station(station) => {
                    index.by_station.entry(station).or_default().push(record)
                }
                Classification::Unclassifiable => index.unclassified += 1,
            }
        }
        index
    }

    /// Distinct stations seen, in ascending order.
    pub fn stations(&self) -> impl Iterator<Item = &StationId> {
        self.by_station.keys()
    }

    pub fn records(&self, station: &StationId) -> &[&'a BulletinRecord] {
        self.by_station
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn unclassified(&self) -> usize {
        self.unclassified
    }

    pub fn len(&self) -> usize {
        self.by_station.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_station.is_empty()
    }
}
