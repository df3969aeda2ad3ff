use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{LeaderboardColumns, LeaderboardSource, columns_from_html};
use crate::error::PoolError;

pub const DEFAULT_LEADERBOARD_URL: &str = "https://www.pgatour.com/leaderboard";

/// Scrapes the PGA Tour leaderboard page.
pub struct PgaTourClient {
    client: Client,
    url: String,
}

impl PgaTourClient {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, PoolError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl LeaderboardSource for PgaTourClient {
    async fn fetch_columns(&self) -> Result<LeaderboardColumns, PoolError> {
        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(PoolError::Network(format!(
                "leaderboard fetch from {} returned {status}",
                self.url
            )));
        }
        let body = resp.text().await?;
        columns_from_html(&body)
    }
}
