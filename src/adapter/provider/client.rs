//! HTTP client for the upstream fixtures API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::dto::{FixtureDto, FixturesResponse};
use super::selection::select_odds;
use crate::config::ProviderConfig;
use crate::domain::FixtureUpdate;
use crate::error::FetchError;
use crate::port::MatchDataSource;

/// Fetches fixture snapshots for one competition season.
pub struct HttpMatchSource {
    http: HttpClient,
    base_url: String,
    competition: String,
    season: String,
    api_key: Option<String>,
    bookmakers: Vec<String>,
    timeout_ms: u64,
}

impl HttpMatchSource {
    #[must_use]
    pub fn from_config(
        config: &ProviderConfig,
        timeout_ms: u64,
        competition: impl Into<String>,
        season: impl Into<String>,
    ) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .connect_timeout(Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            competition: competition.into(),
            season: season.into(),
            api_key: config.api_key.clone(),
            bookmakers: config.bookmakers.clone(),
            timeout_ms,
        }
    }

    fn fixtures_url(&self) -> String {
        format!(
            "{}/fixtures?competition={}&season={}",
            self.base_url, self.competition, self.season
        )
    }

    fn map_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                after_ms: self.timeout_ms,
            }
        } else {
            FetchError::from(err)
        }
    }

    /// Convert a payload into updates, choosing one odds triplet per fixture.
    #[must_use]
    pub fn to_updates(&self, response: FixturesResponse) -> Vec<FixtureUpdate> {
        response
            .fixtures
            .into_iter()
            .map(|dto| to_update(dto, &self.bookmakers))
            .collect()
    }
}

fn to_update(dto: FixtureDto, bookmakers: &[String]) -> FixtureUpdate {
    let odds = select_odds(&dto.odds, bookmakers);
    FixtureUpdate {
        external_id: dto.id,
        competition: dto.competition,
        season: dto.season,
        home_team: dto.home_team,
        away_team: dto.away_team,
        matchday: dto.matchday,
        kickoff: dto.kickoff,
        status: dto.status,
        scores: dto.scores,
        odds,
    }
}

#[async_trait]
impl MatchDataSource for HttpMatchSource {
    async fn fetch(&self) -> Result<Vec<FixtureUpdate>, FetchError> {
        let url = self.fixtures_url();
        debug!(url = %url, "Fetching fixtures");

        let mut request = self.http.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|err| self.map_error(err))?
            .error_for_status()
            .map_err(|err| self.map_error(err))?;

        let payload: FixturesResponse = response.json().await.map_err(|err| self.map_error(err))?;
        debug!(fixtures = payload.fixtures.len(), "Fetched fixtures");

        Ok(self.to_updates(payload))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
