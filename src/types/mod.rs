pub mod bulletin;
pub mod data_source;
pub mod station;
