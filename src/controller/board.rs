use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::error::PoolError;
use crate::leaderboard::{LeaderboardSource, parse_standings};
use crate::model::{BoardData, GolferStanding, ParticipantAssignment};
use crate::odds::{OddsSource, fetch_outright_odds};
use crate::score::{outright_rows, rank_participants};

#[must_use]
pub fn build_board<S: BuildHasher>(
    participants: &[ParticipantAssignment],
    standings: &[GolferStanding],
    odds: &HashMap<String, f64, S>,
    refreshed_at: DateTime<Utc>,
) -> BoardData {
    BoardData {
        participants: rank_participants(participants, standings),
        outrights: outright_rows(participants, standings, odds),
        standings_count: standings.len(),
        odds_available: !odds.is_empty(),
        refreshed_at,
    }
}

/// One refresh: fetch leaderboard and odds side by side, then rank.
///
/// # Errors
/// Fails when the leaderboard cannot be fetched or parsed. Odds problems
/// only leave the odds columns empty.
pub async fn load_board(
    leaderboard: &dyn LeaderboardSource,
    odds: &dyn OddsSource,
    participants: &[ParticipantAssignment],
) -> Result<BoardData, PoolError> {
    let (columns, odds) = tokio::join!(leaderboard.fetch_columns(), fetch_outright_odds(odds));
    let standings = parse_standings(&columns?)?;
    tracing::info!(
        golfers = standings.len(),
        priced = odds.len(),
        participants = participants.len(),
        "board refreshed"
    );
    Ok(build_board(participants, &standings, &odds, Utc::now()))
}
