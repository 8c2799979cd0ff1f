pub mod classifier;
pub mod error;
pub mod extractor;
