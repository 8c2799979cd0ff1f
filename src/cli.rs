//! Command-line argument definitions.

use clap::Parser;
use tafs::{ReportOptions, DEFAULT_BASE_URL, MAX_STATIONS};

/// Retrieve TAFs and/or METARs from aviationweather.gov and print them per station.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tafs",
    version,
    about = "Retrieve TAFs and/or METARs from aviationweather.gov",
    long_about = "Retrieves the latest TAFs, and optionally recent METARs, for up to 51 \
                  stations and prints them in a conventional pilot layout: stations with \
                  METARs only first, then each TAF preceded by its station's METARs."
)]
pub struct Args {
    /// 4-character station ICAO [A..Z,a..z,0..9] (wildcards not supported)
    #[arg(value_name = "XXXX", required = true, num_args = 1..)]
    pub stations: Vec<String>,

    /// Max number of hours prior to look for TAFs
    #[arg(
        short = 'T',
        long = "taf-hours",
        value_name = "1-24",
        default_value_t = 24,
        allow_negative_numbers = true
    )]
    pub taf_hours: i32,

    /// Max number of hours prior to look for METARs
    #[arg(
        short = 'M',
        long = "metar-hours",
        value_name = "1-24",
        default_value_t = 24,
        allow_negative_numbers = true
    )]
    pub metar_hours: i32,

    /// Max number of METARs printed per station (0 = no METARs fetched)
    #[arg(
        short = 'C',
        long = "metar-count",
        value_name = "0-24",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub metar_count: i32,

    /// Get METARs only (no TAFs); at least 1 METAR per station is requested
    #[arg(short = 'm', long = "metar-only")]
    pub metar_only: bool,

    /// Ignore malformed station IDs (default is abort)
    #[arg(short = 'i', long = "ignore")]
    pub ignore_malformed: bool,

    /// Drop a payload containing a malformed record instead of keeping the records before it
    #[arg(long)]
    pub strict: bool,

    /// Data server endpoint
    #[arg(long = "base-url", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl Args {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions::builder()
            .taf_hours(self.taf_hours)
            .metar_hours(self.metar_hours)
            .metar_count(self.metar_count)
            .metar_only(self.metar_only)
            .strict(self.strict)
            .build()
    }

    /// Station arguments past the request limit, which are dropped.
    pub fn excess_stations(&self) -> usize {
        self.stations.len().saturating_sub(MAX_STATIONS)
    }

    pub fn excess_warning(&self) -> Option<String> {
        match self.excess_stations() {
            0 => None,
            excess => Some(format!(
                "Only the first {} stations are requested; ignoring {} more",
                MAX_STATIONS, excess
            )),
        }
    }
}
