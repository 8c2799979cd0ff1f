pub mod aggregate;
pub mod assemble;
pub mod index;
pub mod partition;
pub mod station_report;
