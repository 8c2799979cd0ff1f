//! Pulls bulletin records out of the provider's XML-like payload.
//!
//! The payload is scanned for `<raw_text>` elements with a small state machine rather
//! than an XML parser: the records are plain text, the surrounding document is large
//! and untrusted, and only one element type matters.

use crate::extraction::error::ExtractError;
use crate::types::bulletin::BulletinRecord;
use log::{debug, trace};

const OPEN_MARKER: &str = "<raw_text>";
const CLOSE_MARKER: &str = "</raw_text>";
const METAR_MARKER: &str = "<METAR>";

/// Content shorter than this between the markers is treated as a malformed element.
const MIN_RECORD_CHARS: usize = 10;

/// TAF group markers that start a new line when reflowing, in replacement order.
const GROUP_MARKERS: [&str; 4] = ["BECMG", "FM", "PROB", "TEMPO"];

/// Inserted in place of the space before a group marker.
const GROUP_BREAK: &str = "\n  ";

enum ScanState {
    /// Looking for the next opening marker at or after `cursor`.
    Scanning { cursor: usize },
    /// Inside an element whose opening marker starts at `open_at`.
    InRecord { open_at: usize, content_start: usize },
    Done,
}

/// Returns `true` if the payload holds METAR data.
pub fn is_metar_payload(payload: &str) -> bool {
    payload.contains(METAR_MARKER)
}

/// Extracts every `<raw_text>` record from `payload`, in document order.
///
/// # Arguments
///
/// * `payload` - The raw response body. An empty payload yields no records.
/// * `reflow` - Break TAF bodies onto one line per forecast group. Ignored for METAR
///   payloads, which can contain `TEMPO`/`BECMG` trend groups that must stay inline.
/// * `strict` - Fail on a malformed element instead of stopping quietly.
///
/// Records longer than [`MAX_RECORD_CHARS`](crate::MAX_RECORD_CHARS) are cut to that
/// length before any reflow, so reflowing never moves the cut.
///
/// # Errors
///
/// In strict mode, returns [`ExtractError::MalformedRecord`] when an opening marker has no
/// closing marker, or the element holds fewer than 10 characters. Without `strict`, the
/// records found before the malformed element are returned.
///
/// # Examples
///
/// ```
/// use tafs::extract_records;
///
/// let payload = "<raw_text>KJFK 011200Z 0112/0212 01015KT P6SM TEMPO 0112/0116 BKN020</raw_text>";
/// let records = extract_records(payload, true, false).unwrap();
/// assert_eq!(
///     records[0].as_str(),
///     "KJFK 011200Z 0112/0212 01015KT P6SM\n  TEMPO 0112/0116 BKN020"
/// );
/// ```
pub fn extract_records(
    payload: &str,
    reflow: bool,
    strict: bool,
) -> Result<Vec<BulletinRecord>, ExtractError> {
    let reflow = reflow && !is_metar_payload(payload);
    let mut records = Vec::new();
    let mut state = ScanState::Scanning { cursor: 0 };

    loop {
        state = match state {
            ScanState::Scanning { cursor } => match payload[cursor..].find(OPEN_MARKER) {
                Some(found) => {
                    let open_at = cursor + found;
                    ScanState::InRecord {
                        open_at,
                        content_start: open_at + OPEN_MARKER.len(),
                    }
                }
                None => ScanState::Done,
            },
            ScanState::InRecord {
                open_at,
                content_start,
            } => {
                let content_end = payload[content_start..]
                    .find(CLOSE_MARKER)
                    .map(|found| content_start + found);

                match content_end {
                    Some(end)
                        if payload[content_start..end].chars().count() >= MIN_RECORD_CHARS =>
                    {
                        let record = BulletinRecord::new(&payload[content_start..end]);
                        let record = if reflow {
                            record.relayout(reflow_taf)
                        } else {
                            record
                        };
                        trace!("Extracted record at byte {}: {}", open_at, record);
                        records.push(record);
                        ScanState::Scanning {
                            cursor: end + CLOSE_MARKER.len(),
                        }
                    }
                    _ if strict => return Err(ExtractError::MalformedRecord { offset: open_at }),
                    _ => {
                        debug!(
                            "Malformed <raw_text> element at byte {}, keeping {} records",
                            open_at,
                            records.len()
                        );
                        ScanState::Done
                    }
                }
            }
            ScanState::Done => break,
        };
    }

    Ok(records)
}

/// Puts each TAF forecast group on its own line, indented by two spaces.
///
/// Only the single space in front of a group marker is replaced, so replacing every
/// `"\n  "` with `" "` gives back the input.
pub fn reflow_taf(text: &str) -> String {
    GROUP_MARKERS
        .iter()
        .fold(text.to_string(), |reflowed, marker| {
            reflowed.replace(&format!(" {marker}"), &format!("{GROUP_BREAK}{marker}"))
        })
}
