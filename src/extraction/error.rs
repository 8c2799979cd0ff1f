use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    // Only raised in strict mode; otherwise extraction stops and keeps what it has.
    #[error("Malformed <raw_text> element starting at byte {offset}")]
    MalformedRecord { offset: usize },
}
