use crate::fetching::error::FetchError;
use crate::stations::prepare::station_string;
use crate::types::data_source::DataSource;
use crate::types::station::StationId;
use log::{info, warn};
use reqwest::Client;

/// The aviationweather.gov ADDS text data server.
pub const DEFAULT_BASE_URL: &str =
    "https://www.aviationweather.gov/adds/dataserver_current/httpparam";

/// Downloads raw bulletin payloads from the data provider.
///
/// One request returns every matching bulletin for all requested stations, so a report
/// costs at most two requests.
pub struct BulletinLoader {
    base_url: String,
    download_client: Client,
}

impl BulletinLoader {
    pub fn new(base_url: impl Into<String>) -> BulletinLoader {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, download_client: Client) -> BulletinLoader {
        BulletinLoader {
            base_url: base_url.into(),
            download_client,
        }
    }

    /// Query parameters for one provider request.
    pub(crate) fn query_params(
        source: DataSource,
        stations: &[StationId],
        hours_before_now: u8,
        most_recent: bool,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("dataSource", source.path_segment().to_string()),
            ("requestType", "retrieve".to_string()),
            ("format", "xml".to_string()),
            ("hoursBeforeNow", hours_before_now.to_string()),
            ("mostRecentForEachStation", most_recent.to_string()),
            ("stationString", station_string(stations)),
        ]
    }

    /// Downloads the payload for `source` covering `stations`.
    ///
    /// `hours_before_now` is the lookback window; `most_recent` limits the result to the
    /// latest bulletin per station. The body is returned as text, unparsed.
    pub async fn download(
        &self,
        source: DataSource,
        stations: &[StationId],
        hours_before_now: u8,
        most_recent: bool,
    ) -> Result<String, FetchError> {
        let params = Self::query_params(source, stations, hours_before_now, most_recent);
        info!(
            "Requesting {} for {} stations ({}h, most recent only: {}) from {}",
            source,
            stations.len(),
            hours_before_now,
            most_recent,
            self.base_url
        );

        let response = self
            .download_client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(self.base_url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {} request: {:?}", source, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url: self.base_url.clone(),
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(self.base_url.clone(), e)
                });
            }
        };

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(self.base_url.clone(), e))?;
        info!("Received {} bytes of {} data", body.len(), source);
        Ok(body)
    }
}
