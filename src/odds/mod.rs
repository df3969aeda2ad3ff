pub mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PoolError;
use crate::score::{OddsMap, normalized_surname};

pub use client::OddsApiClient;

/// Market key the odds feed uses for "who wins the tournament".
pub const OUTRIGHT_MARKET_KEY: &str = "outrights";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OddsEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub sport_title: String,
    #[serde(default)]
    pub bookmakers: Vec<OddsBookmaker>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OddsBookmaker {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub markets: Vec<OddsMarket>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OddsMarket {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<OddsOutcome>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OddsOutcome {
    pub name: String,
    pub price: f64,
}

#[async_trait]
pub trait OddsSource: Send + Sync {
    async fn fetch_events(&self) -> Result<Vec<OddsEvent>, PoolError>;
}

/// Surname → decimal price across every bookmaker's outright market.
/// A surname seen more than once keeps the last price scanned.
#[must_use]
pub fn map_outright_odds(events: &[OddsEvent]) -> OddsMap {
    let mut odds = OddsMap::default();
    let outcomes = events
        .iter()
        .flat_map(|e| &e.bookmakers)
        .flat_map(|b| &b.markets)
        .filter(|m| m.key == OUTRIGHT_MARKET_KEY)
        .flat_map(|m| &m.outcomes);
    for outcome in outcomes {
        odds.insert(normalized_surname(&outcome.name), outcome.price);
    }
    odds
}

/// Fetch and map outright odds; any failure leaves the board without odds.
pub async fn fetch_outright_odds(source: &dyn OddsSource) -> OddsMap {
    match source.fetch_events().await {
        Ok(events) => {
            let odds = map_outright_odds(&events);
            tracing::debug!(events = events.len(), golfers = odds.len(), "mapped outright odds");
            odds
        }
        Err(PoolError::Config(reason)) => {
            tracing::debug!(%reason, "odds disabled");
            OddsMap::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "odds unavailable, showing board without prices");
            OddsMap::default()
        }
    }
}
