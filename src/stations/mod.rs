pub mod error;
pub mod prepare;
