//! HTTP snapshot source for the GotCourts public reservations endpoint.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use courts_engine::error::{CourtsError, Result};
use courts_engine::{Club, ClubSnapshot, SnapshotSource};

/// One shared HTTP session for all fetches of the process.
pub struct GotCourtsClient {
    http: reqwest::Client,
    base_url: String,
}

impl GotCourtsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn reservations_url(&self, club: Club, date: &str) -> String {
        format!(
            "{}/de/api/public/clubs/{}/reservations?date={}",
            self.base_url,
            club.api_id(),
            date
        )
    }
}

#[async_trait]
impl SnapshotSource for GotCourtsClient {
    async fn fetch(&self, club: Club, date: &str) -> Result<ClubSnapshot> {
        let url = self.reservations_url(club, date);
        let network = |e: reqwest::Error| CourtsError::Network(e.to_string());

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(network)?
            .error_for_status()
            .map_err(network)?;
        let body = response.text().await.map_err(network)?;

        tracing::debug!(%club, date, bytes = body.len(), "fetched reservations");
        ClubSnapshot::from_api_json(&body)
    }
}
