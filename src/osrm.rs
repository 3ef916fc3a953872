//! OSRM HTTP adapter for travel-time matrices.

use std::env;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;
use crate::route_config::TravelMode;
use crate::traits::DistanceMatrixProvider;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 10,
        }
    }
}

impl OsrmConfig {
    /// Defaults overridden by `OSRM_BASE_URL` and `OSRM_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("OSRM_BASE_URL").unwrap_or(defaults.base_url),
            timeout_secs: env::var("OSRM_TIMEOUT_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

/// OSRM routing profile for a travel mode.
///
/// OSRM has no public-transit profile, so transit is routed as driving.
pub fn profile_for(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Driving | TravelMode::Transit => "car",
        TravelMode::Walking => "foot",
        TravelMode::Bicycling => "bike",
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn table_url(&self, mode: TravelMode, locations: &[(f64, f64)]) -> String {
        let coords = locations
            .iter()
            .map(|(lat, lng)| format!("{:.6},{:.6}", lng, lat))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/table/v1/{}/{}?annotations=duration",
            self.config.base_url.trim_end_matches('/'),
            profile_for(mode),
            coords
        )
    }
}

impl DistanceMatrixProvider for OsrmClient {
    fn matrix_for(&self, mode: TravelMode, locations: &[(f64, f64)]) -> Result<DistanceMatrix> {
        if locations.is_empty() {
            return DistanceMatrix::new(Vec::new());
        }

        let url = self.table_url(mode, locations);
        debug!(%mode, locations = locations.len(), "requesting OSRM table");

        // Rejected queries come back as 4xx with a JSON `code`, so the body
        // is decoded regardless of status.
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.json::<OsrmTableResponse>())?;

        let matrix = body.into_matrix()?;
        matrix.ensure_len(locations.len())?;
        Ok(matrix)
    }
}

#[derive(Debug, Deserialize)]
struct OsrmTableResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    durations: Option<Vec<Vec<Option<f64>>>>,
}

impl OsrmTableResponse {
    /// Durations in whole seconds; unreachable pairs become `u32::MAX`.
    fn into_matrix(self) -> Result<DistanceMatrix> {
        if self.code != "Ok" {
            return Err(Error::Osrm {
                code: self.code,
                message: self.message.unwrap_or_default(),
            });
        }

        let rows = self
            .durations
            .unwrap_or_default()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|value| value.map_or(u32::MAX, |secs| secs.round() as u32))
                    .collect()
            })
            .collect();
        DistanceMatrix::new(rows)
    }
}
