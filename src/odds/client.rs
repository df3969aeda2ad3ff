use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{OUTRIGHT_MARKET_KEY, OddsEvent, OddsSource};
use crate::error::PoolError;

pub const DEFAULT_ODDS_BASE_URL: &str = "https://api.the-odds-api.com";
pub const DEFAULT_ODDS_SPORT: &str = "golf_masters_tournament_winner";
pub const DEFAULT_ODDS_REGIONS: &str = "uk";

/// Client for The Odds API v4.
pub struct OddsApiClient {
    client: Client,
    base_url: String,
    sport: String,
    regions: String,
    api_key: Option<String>,
}

impl OddsApiClient {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn new(
        base_url: impl Into<String>,
        sport: impl Into<String>,
        regions: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, PoolError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            sport: sport.into(),
            regions: regions.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    fn odds_url(&self) -> String {
        format!(
            "{}/v4/sports/{}/odds",
            self.base_url.trim_end_matches('/'),
            self.sport
        )
    }
}

#[async_trait]
impl OddsSource for OddsApiClient {
    async fn fetch_events(&self) -> Result<Vec<OddsEvent>, PoolError> {
        let Some(api_key) = &self.api_key else {
            return Err(PoolError::Config("no odds api key configured".into()));
        };

        let resp = self
            .client
            .get(self.odds_url())
            .query(&[
                ("apiKey", api_key.as_str()),
                ("regions", self.regions.as_str()),
                ("markets", OUTRIGHT_MARKET_KEY),
                ("oddsFormat", "decimal"),
            ])
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(PoolError::Network(format!(
                "odds feed for {} returned {status}",
                self.sport
            )));
        }
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_is_a_config_error() {
        let client = OddsApiClient::new(
            DEFAULT_ODDS_BASE_URL,
            DEFAULT_ODDS_SPORT,
            DEFAULT_ODDS_REGIONS,
            Some("  ".to_string()),
            Duration::from_secs(1),
        )
        .unwrap();
        assert!(matches!(
            client.fetch_events().await,
            Err(PoolError::Config(_))
        ));
    }

    #[test]
    fn url_joins_base_and_sport() {
        let client = OddsApiClient::new(
            "http://localhost:9/",
            "golf_pga_championship_winner",
            "us",
            None,
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            client.odds_url(),
            "http://localhost:9/v4/sports/golf_pga_championship_winner/odds"
        );
    }
}
