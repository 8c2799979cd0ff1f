//! Derives the owning station of a bulletin record from its leading text.

use crate::types::bulletin::BulletinRecord;
use crate::types::station::{Classification, StationId};

/// Leading label some producers put in front of the station code of a TAF.
pub const TAF_LABEL: &str = "TAF";

/// Classifies a TAF or METAR record by station.
///
/// The leading whitespace-separated fields are read in order: an optional `TAF` label
/// is skipped, and the next field must be a valid station identifier. The
/// record text, label included, is left untouched.
///
/// # Examples
///
/// ```
/// use tafs::{classify, BulletinRecord, Classification, StationId};
///
/// let record = BulletinRecord::new("TAF KDEN 011120Z 0112/0218 18010KT P6SM SKC");
/// assert_eq!(
///     classify(&record),
///     Classification::Station(StationId::parse("KDEN").unwrap())
/// );
/// assert_eq!(
///     classify(&BulletinRecord::new("NIL")),
///     Classification::Unclassifiable
/// );
/// ```
pub fn classify(record: &BulletinRecord) -> Classification {
    let mut fields = record.as_str().split_whitespace();
    let candidate = match fields.next() {
        Some(TAF_LABEL) => fields.next(),
        first => first,
    };

    candidate
        .and_then(StationId::parse)
        .map_or(Classification::Unclassifiable, Classification::Station)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(code: &str) -> Classification {
        Classification::Station(StationId::parse(code).unwrap())
    }

    #[test]
    fn test_plain_record() {
        let record = BulletinRecord::new("KJFK 011251Z 31012KT 10SM FEW250 M02/M17 A3021");
        assert_eq!(classify(&record), station("KJFK"));
    }

    #[test]
    fn test_taf_label_is_skipped() {
        let record = BulletinRecord::new("TAF EGLL 011058Z 0112/0218 24012KT 9999 SCT030");
        assert_eq!(classify(&record), station("EGLL"));
    }

    #[test]
    fn test_lowercase_station_is_uppercased() {
        let record = BulletinRecord::new("kbos 011254Z 27008KT");
        assert_eq!(classify(&record), station("KBOS"));
    }

    #[test]
    fn test_unclassifiable_records() {
        for text in [
            "",
            "TAF",
            "TAF 011058Z 0112/0218",
            "1ABC 011254Z 27008KT",
            "KB-S 011254Z 27008KT",
            "KBOSX 011254Z 27008KT",
            "TAF AMD KBOS 011254Z",
        ] {
            assert_eq!(
                classify(&BulletinRecord::new(text)),
                Classification::Unclassifiable,
                "expected '{}' to be unclassifiable",
                text
            );
        }
    }

    #[test]
    fn test_label_lookalike_station() {
        // "TAFX" is not the label, it is a well-formed station code.
        let record = BulletinRecord::new("TAFX 011254Z 27008KT");
        assert_eq!(classify(&record), station("TAFX"));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let record = BulletinRecord::new("TAF KDEN 011120Z 0112/0218 18010KT");
        let first = classify(&record);
        for _ in 0..10 {
            assert_eq!(classify(&record), first);
        }
    }
}
