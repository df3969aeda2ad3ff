#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use fantasy_golf::PoolError;
use fantasy_golf::controller::cache::BoardCache;
use fantasy_golf::controller::http_handlers::AppState;
use fantasy_golf::leaderboard::{LeaderboardColumns, LeaderboardSource, columns_from_html};
use fantasy_golf::model::ParticipantAssignment;
use fantasy_golf::odds::{OddsEvent, OddsSource};

pub const LEADERBOARD_PAGE: &str = include_str!("../fixtures/leaderboard_page.html");
pub const ODDS_FEED: &str = include_str!("../fixtures/odds_outrights.json");

/// Serves the fixture page; can be flipped to failing mid-test.
#[derive(Default)]
pub struct FixtureLeaderboard {
    pub calls: AtomicUsize,
    pub failing: AtomicBool,
}

#[async_trait]
impl LeaderboardSource for FixtureLeaderboard {
    async fn fetch_columns(&self) -> Result<LeaderboardColumns, PoolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(PoolError::Network("leaderboard returned 503".into()));
        }
        columns_from_html(LEADERBOARD_PAGE)
    }
}

/// Page that no longer carries the embedded table.
pub struct BrokenLeaderboard;

#[async_trait]
impl LeaderboardSource for BrokenLeaderboard {
    async fn fetch_columns(&self) -> Result<LeaderboardColumns, PoolError> {
        columns_from_html("<html><body>We'll be right back</body></html>")
    }
}

pub struct FixtureOdds;

#[async_trait]
impl OddsSource for FixtureOdds {
    async fn fetch_events(&self) -> Result<Vec<OddsEvent>, PoolError> {
        Ok(serde_json::from_str(ODDS_FEED)?)
    }
}

pub struct DownOdds;

#[async_trait]
impl OddsSource for DownOdds {
    async fn fetch_events(&self) -> Result<Vec<OddsEvent>, PoolError> {
        Err(PoolError::Network("odds feed returned 401 Unauthorized".into()))
    }
}

fn assignment(person: &str, golfers: [&str; 4]) -> ParticipantAssignment {
    ParticipantAssignment {
        person: person.to_string(),
        golfers: golfers.map(str::to_string),
    }
}

/// Four entrants drawn from the bundled pool.
pub fn test_pool() -> Vec<ParticipantAssignment> {
    vec![
        assignment("Mikey", ["V. Hovland", "J. Rose", "M. Greyserman", "D. Riley"]),
        assignment("Macca", ["B. Koepka", "T. Finau", "N. Højgaard", "N. Taylor"]),
        assignment("Alex", ["S. Scheffler", "W. Clark", "T. Detry", "K. Yu"]),
        assignment("Henry", ["R. McIlroy", "Ca. Smith", "J.T. Poston", "D. Willett"]),
    ]
}

pub fn app_state(
    leaderboard: Arc<dyn LeaderboardSource>,
    odds: Arc<dyn OddsSource>,
    cache_ttl: Duration,
) -> AppState {
    AppState {
        leaderboard,
        odds,
        participants: test_pool().into(),
        cache: BoardCache::new(),
        cache_ttl,
        title: "Masters 2025 - Friends Leaderboard".to_string(),
    }
}
