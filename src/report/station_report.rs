//! The finished per-station report and the offline pipeline that produces it.

use crate::config::ReportPlan;
use crate::extraction::error::ExtractError;
use crate::extraction::extractor::extract_records;
use crate::report::assemble::assemble;
use crate::report::index::StationIndex;
use crate::report::partition::partition;
use crate::types::bulletin::{BulletinRecord, ReportLine};
use crate::types::data_source::DataSource;
use crate::types::station::StationId;
use log::{info, warn};
use std::fmt;

/// A pilot-format TAF/METAR report.
///
/// `lines` is the printable output. The remaining fields describe how it was put
/// together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<ReportLine>,
    /// Stations with METARs but no TAF, ascending.
    pub solo_stations: Vec<StationId>,
    /// Stations with METARs and a TAF, ascending. Not used for layout.
    pub affiliated_stations: Vec<StationId>,
    /// Records whose station could not be determined, across both payloads.
    pub unclassified: usize,
    /// Data sources whose contribution was dropped because the fetch or the
    /// extraction failed.
    pub degraded: Vec<DataSource>,
}

impl Report {
    /// Runs extraction and assembly on already-fetched payloads.
    ///
    /// TAF records are reflowed, METAR records are not. A payload that fails strict
    /// extraction contributes nothing and is listed in [`Report::degraded`]; the other
    /// payload is unaffected.
    ///
    /// # Examples
    ///
    /// ```
    /// use tafs::{Report, ReportOptions};
    ///
    /// let tafs = "<TAF><raw_text>KDEN 011120Z 0112/0218 18010KT P6SM SKC FM020000 20012KT</raw_text></TAF>";
    /// let metars = "<METAR><raw_text>KBOS 011254Z 27008KT 10SM CLR</raw_text></METAR>";
    /// let plan = ReportOptions::builder().metar_count(1).build().resolve();
    ///
    /// let report = Report::from_payloads(tafs, metars, &plan);
    /// assert_eq!(
    ///     report.to_string(),
    ///     "KBOS 011254Z 27008KT 10SM CLR\n\
    ///      \n\
    ///      KDEN 011120Z 0112/0218 18010KT P6SM SKC\n  FM020000 20012KT\n\
    ///      \n"
    /// );
    /// ```
    pub fn from_payloads(taf_payload: &str, metar_payload: &str, plan: &ReportPlan) -> Self {
        let mut degraded = Vec::new();
        let tafs = extract_or_degrade(DataSource::Tafs, taf_payload, plan.strict, &mut degraded);
        let metars =
            extract_or_degrade(DataSource::Metars, metar_payload, plan.strict, &mut degraded);

        let mut report = Self::from_records(&tafs, &metars, plan.metar_cap);
        report.degraded = degraded;
        report
    }

    /// Assembles a report from extracted records.
    pub fn from_records(
        tafs: &[BulletinRecord],
        metars: &[BulletinRecord],
        max_metars: usize,
    ) -> Self {
        let taf_index = StationIndex::build(tafs);
        let metar_index = StationIndex::build(metars);
        let taf_stations: Vec<StationId> = taf_index.stations().cloned().collect();
        let metar_stations: Vec<StationId> = metar_index.stations().cloned().collect();
        info!(
            "{} TAFs for {} stations, {} METARs for {} stations",
            tafs.len(),
            taf_stations.len(),
            metars.len(),
            metar_stations.len()
        );

        let split = partition(&metar_stations, &taf_stations);
        Self {
            lines: assemble(
                &taf_index,
                &metar_index,
                &taf_stations,
                &metar_stations,
                max_metars,
            ),
            solo_stations: split.solo.into_iter().collect(),
            affiliated_stations: split.affiliated.into_iter().collect(),
            unclassified: taf_index.unclassified() + metar_index.unclassified(),
            degraded: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn extract_or_degrade(
    source: DataSource,
    payload: &str,
    strict: bool,
    degraded: &mut Vec<DataSource>,
) -> Vec<BulletinRecord> {
    let reflow = source == DataSource::Tafs;
    match extract_records(payload, reflow, strict) {
        Ok(records) => records,
        Err(e @ ExtractError::MalformedRecord { .. }) => {
            warn!("Dropping {} payload: {}", source, e);
            degraded.push(source);
            Vec::new()
        }
    }
}

/// Writes every line followed by a newline.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportOptions;

    const TAF_PAYLOAD: &str = "<response><data num_results=\"2\">\
        <TAF><raw_text>TAF KDEN 011120Z 0112/0218 18010KT P6SM SKC TEMPO 0118/0122 BKN080</raw_text></TAF>\
        <TAF><raw_text>EGLL 011058Z 0112/0218 24012KT 9999 SCT030 PROB30 0112/0116 4000 SHRA</raw_text></TAF>\
        </data></response>";

    const METAR_PAYLOAD: &str = "<response><data num_results=\"3\">\
        <METAR><raw_text>KDEN 011253Z 18010KT 10SM SKC 08/M06 A3012 RMK AO2</raw_text></METAR>\
        <METAR><raw_text>KBOS 011254Z 27008KT 10SM CLR M02/M17 A3021 TEMPO RMK AO2</raw_text></METAR>\
        <METAR><raw_text>KDEN 011153Z 17008KT 10SM SKC 06/M07 A3014 RMK AO2</raw_text></METAR>\
        </data></response>";

    fn texts(report: &Report) -> Vec<&str> {
        report.lines.iter().map(ReportLine::as_str).collect()
    }

    fn codes(ids: &[StationId]) -> Vec<&str> {
        ids.iter().map(StationId::as_str).collect()
    }

    #[test]
    fn test_full_report() {
        let plan = ReportOptions::builder().metar_count(2).build().resolve();
        let report = Report::from_payloads(TAF_PAYLOAD, METAR_PAYLOAD, &plan);

        assert_eq!(
            texts(&report),
            [
                "KBOS 011254Z 27008KT 10SM CLR M02/M17 A3021 TEMPO RMK AO2",
                "",
                "EGLL 011058Z 0112/0218 24012KT 9999 SCT030\n  PROB30 0112/0116 4000 SHRA",
                "",
                "KDEN 011153Z 17008KT 10SM SKC 06/M07 A3014 RMK AO2",
                "KDEN 011253Z 18010KT 10SM SKC 08/M06 A3012 RMK AO2",
                "",
                "TAF KDEN 011120Z 0112/0218 18010KT P6SM SKC\n  TEMPO 0118/0122 BKN080",
                "",
            ]
        );
        assert_eq!(codes(&report.solo_stations), ["KBOS"]);
        assert_eq!(codes(&report.affiliated_stations), ["KDEN"]);
        assert_eq!(report.unclassified, 0);
        assert!(report.degraded.is_empty());
    }

    #[test]
    fn test_solo_blocks_precede_taf_blocks() {
        let plan = ReportOptions::builder().metar_count(1).build().resolve();
        let report = Report::from_payloads(TAF_PAYLOAD, METAR_PAYLOAD, &plan);
        let first_taf = report
            .lines
            .iter()
            .position(|l| l.as_str().starts_with("EGLL"))
            .unwrap();
        let solo = report
            .lines
            .iter()
            .position(|l| l.as_str().starts_with("KBOS"))
            .unwrap();
        assert!(solo < first_taf);
    }

    #[test]
    fn test_empty_payloads() {
        let plan = ReportOptions::builder().metar_count(3).build().resolve();
        let report = Report::from_payloads("", "", &plan);
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn test_strict_failure_keeps_other_payload() {
        let broken_tafs = "<raw_text>KDEN 011120Z 0112/0218 18010KT";
        let plan = ReportOptions::builder()
            .metar_count(1)
            .strict(true)
            .build()
            .resolve();
        let report = Report::from_payloads(broken_tafs, METAR_PAYLOAD, &plan);

        assert_eq!(report.degraded, [DataSource::Tafs]);
        assert_eq!(
            texts(&report),
            [
                "KBOS 011254Z 27008KT 10SM CLR M02/M17 A3021 TEMPO RMK AO2",
                "",
                "KDEN 011153Z 17008KT 10SM SKC 06/M07 A3014 RMK AO2",
                "",
            ]
        );
    }

    #[test]
    fn test_strict_metar_failure_keeps_tafs() {
        let broken_metars = "<METAR><raw_text>KDEN 011253Z 18010KT 10SM SKC</raw_text></METAR>\
            <METAR><raw_text>KBOS</raw_text></METAR>";
        let plan = ReportOptions::builder()
            .metar_count(2)
            .strict(true)
            .build()
            .resolve();
        let report = Report::from_payloads(TAF_PAYLOAD, broken_metars, &plan);

        assert_eq!(report.degraded, [DataSource::Metars]);
        assert_eq!(
            texts(&report),
            [
                "EGLL 011058Z 0112/0218 24012KT 9999 SCT030\n  PROB30 0112/0116 4000 SHRA",
                "",
                "TAF KDEN 011120Z 0112/0218 18010KT P6SM SKC\n  TEMPO 0118/0122 BKN080",
                "",
            ]
        );
        assert!(report.solo_stations.is_empty());
    }

    #[test]
    fn test_unclassifiable_records_are_counted() {
        let metars = "<METAR><raw_text>NIL 011254Z 27008KT 10SM</raw_text></METAR>\
            <METAR><raw_text>KBOS 011254Z 27008KT 10SM</raw_text></METAR>";
        let plan = ReportOptions::builder().metar_only(true).build().resolve();
        let report = Report::from_payloads("", metars, &plan);
        assert_eq!(report.unclassified, 1);
        assert_eq!(texts(&report), ["KBOS 011254Z 27008KT 10SM", ""]);
    }

    #[test]
    fn test_display_terminates_each_line() {
        let report = Report {
            lines: vec![ReportLine::from("KBOS 011254Z".to_string()), ReportLine::blank()],
            ..Report::default()
        };
        assert_eq!(report.to_string(), "KBOS 011254Z\n\n");
    }
}
