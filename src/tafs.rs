//! This module provides the main entry point: the [`Tafs`] client, which fetches TAFs
//! and METARs for a set of stations and turns them into a [`Report`].

use crate::config::{ReportOptions, ReportPlan};
use crate::error::TafsError;
use crate::fetching::error::FetchError;
use crate::fetching::loader::{BulletinLoader, DEFAULT_BASE_URL};
use crate::report::station_report::Report;
use crate::stations::error::StationError;
use crate::types::data_source::DataSource;
use crate::types::station::StationId;
use bon::bon;
use log::{debug, warn};

/// The client for retrieving and formatting TAFs and METARs.
///
/// TAFs and METARs are fetched with one request each (concurrently), for all requested
/// stations at once. Create an instance with [`Tafs::new()`] to use the default
/// provider, or [`Tafs::with_base_url()`] to point at another endpoint serving the same
/// format.
///
/// # Examples
///
/// ```no_run
/// # use tafs::{prepare_stations, ReportOptions, Tafs, TafsError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), TafsError> {
/// let client = Tafs::new();
/// let stations = prepare_stations(&["KJFK", "KBOS"], false)?;
///
/// let report = client
///     .report()
///     .stations(&stations)
///     .options(ReportOptions::builder().metar_count(3).build())
///     .call()
///     .await?;
///
/// print!("{}", report);
/// # Ok(())
/// # }
/// ```
pub struct Tafs {
    loader: BulletinLoader,
}

impl Default for Tafs {
    fn default() -> Self {
        Self::new()
    }
}

#[bon]
impl Tafs {
    /// Creates a client for the default aviationweather.gov data server.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client for a specific data server endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_loader(BulletinLoader::new(base_url))
    }

    pub fn with_loader(loader: BulletinLoader) -> Self {
        Self { loader }
    }

    /// Fetches and assembles the report for `stations`.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.stations(&[StationId])`: **Required.** The stations to report on, usually from
    ///   [`prepare_stations`](crate::prepare_stations).
    /// * `.options(ReportOptions)`: Optional. Lookback windows, METAR count and modes.
    ///   Defaults to TAFs only, 24 hours back.
    ///
    /// # Returns
    ///
    /// The [`Report`]. A request that fails, or a payload that fails strict extraction,
    /// does not fail the report: that data source contributes nothing, a warning is
    /// logged, and the source is listed in [`Report::degraded`].
    ///
    /// # Errors
    ///
    /// Returns [`TafsError::Station`] if `stations` is empty.
    #[builder]
    pub async fn report(
        &self,
        stations: &[StationId],
        options: Option<ReportOptions>,
    ) -> Result<Report, TafsError> {
        if stations.is_empty() {
            return Err(StationError::NoValidStations.into());
        }
        let plan = options.unwrap_or_default().resolve();
        debug!("Resolved request plan: {:?}", plan);

        let (taf_result, metar_result) = tokio::join!(
            self.fetch_if(
                plan.fetch_tafs,
                DataSource::Tafs,
                stations,
                plan.taf_hours,
                ReportPlan::TAF_MOST_RECENT,
            ),
            self.fetch_if(
                plan.fetch_metars,
                DataSource::Metars,
                stations,
                plan.metar_hours,
                plan.metar_most_recent,
            ),
        );

        let mut degraded = Vec::new();
        let taf_payload = payload_or_empty(DataSource::Tafs, taf_result, &mut degraded);
        let metar_payload = payload_or_empty(DataSource::Metars, metar_result, &mut degraded);

        let mut report = Report::from_payloads(&taf_payload, &metar_payload, &plan);
        degraded.append(&mut report.degraded);
        report.degraded = degraded;
        Ok(report)
    }
}

impl Tafs {
    async fn fetch_if(
        &self,
        wanted: bool,
        source: DataSource,
        stations: &[StationId],
        hours_before_now: u8,
        most_recent: bool,
    ) -> Result<String, FetchError> {
        if !wanted {
            debug!("Skipping {} request", source);
            return Ok(String::new());
        }
        self.loader
            .download(source, stations, hours_before_now, most_recent)
            .await
    }
}

// A failed fetch is reported as an empty payload so the other source still prints.
fn payload_or_empty(
    source: DataSource,
    result: Result<String, FetchError>,
    degraded: &mut Vec<DataSource>,
) -> String {
    result.unwrap_or_else(|e| {
        warn!("No {} data: {}", source, e);
        degraded.push(source);
        String::new()
    })
}
