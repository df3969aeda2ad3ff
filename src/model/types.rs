use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One golfer's row on the tournament leaderboard.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GolferStanding {
    pub name: String,
    pub position: String,
    pub current_score_raw: String,
    pub hole: String,
    pub round1: String,
    pub round2: String,
    pub round3: String,
    pub round4: String,
    pub current_score: f64,
}

/// A pool entrant and the four golfers they drafted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ParticipantAssignment {
    pub person: String,
    pub golfers: [String; 4],
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Pick {
    pub golfer_name: String,
    pub score: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ParticipantResult {
    pub person: String,
    pub avg_score_of_top_two: f64,
    /// Sorted best (lowest) first.
    pub picks: Vec<Pick>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OutrightRow {
    pub person: String,
    pub golfer_name: String,
    pub score: f64,
    pub decimal_odds: Option<f64>,
    pub fractional_odds: Option<String>,
}

/// Everything one refresh produces, handed as-is to the display layer.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BoardData {
    pub participants: Vec<ParticipantResult>,
    pub outrights: Vec<OutrightRow>,
    pub standings_count: usize,
    pub odds_available: bool,
    pub refreshed_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Refreshed,
    Stale,
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CacheStatus::Hit => "cache",
            CacheStatus::Refreshed => "live",
            CacheStatus::Stale => "stale cache",
        };
        write!(f, "{s}")
    }
}
