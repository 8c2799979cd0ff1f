mod config;
mod error;
mod extraction;
mod fetching;
mod report;
mod stations;
mod tafs;
mod types;

#[cfg(test)]
mod test_support;

pub use config::{ReportOptions, ReportPlan};
pub use error::TafsError;
pub use tafs::*;

pub use extraction::classifier::classify;
pub use extraction::extractor::{extract_records, is_metar_payload, reflow_taf};
pub use fetching::loader::{BulletinLoader, DEFAULT_BASE_URL};
pub use report::aggregate::{collect_metars, locate_taf};
pub use report::assemble::assemble;
pub use report::index::StationIndex;
pub use report::partition::{partition, Partition};
pub use report::station_report::Report;
pub use stations::prepare::{prepare_stations, station_string, MAX_STATIONS, STATION_RULES};

pub use types::bulletin::{BulletinRecord, ReportLine, MAX_RECORD_CHARS};
pub use types::data_source::DataSource;
pub use types::station::{is_valid_station, Classification, StationId};

pub use extraction::error::ExtractError;
pub use fetching::error::FetchError;
pub use stations::error::StationError;
