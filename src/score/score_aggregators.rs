use ahash::RandomState;
use std::collections::HashMap;

use super::normalize::normalized_surname;
use super::odds::decimal_to_fractional;
use crate::model::{GolferStanding, OutrightRow, ParticipantAssignment, ParticipantResult, Pick};

/// Score given to withdrawn/disqualified golfers and to picks missing from the leaderboard.
pub const PENALTY_SCORE: f64 = 100.0;

pub type OddsMap = HashMap<String, f64, RandomState>;

/// Numeric value of a leaderboard score cell.
///
/// `"E"` is even par, `"WD"`/`"DQ"` take the penalty, anything unparsable
/// counts as even.
#[must_use]
pub fn parse_score_token(token: &str) -> f64 {
    match token.trim() {
        "E" => 0.0,
        "WD" | "DQ" => PENALTY_SCORE,
        other => other
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
    }
}

fn index_standings(standings: &[GolferStanding]) -> HashMap<&str, f64, RandomState> {
    let mut by_name: HashMap<&str, f64, RandomState> = HashMap::default();
    for standing in standings {
        by_name
            .entry(standing.name.as_str())
            .or_insert(standing.current_score);
    }
    by_name
}

fn lookup_score(by_name: &HashMap<&str, f64, RandomState>, golfer: &str) -> f64 {
    by_name.get(golfer).copied().unwrap_or(PENALTY_SCORE)
}

/// Ranks every participant by the mean of their two best picks, lowest first.
///
/// Equal means keep the order of `assignments`.
#[must_use]
pub fn rank_participants(
    assignments: &[ParticipantAssignment],
    standings: &[GolferStanding],
) -> Vec<ParticipantResult> {
    let by_name = index_standings(standings);

    let mut results: Vec<ParticipantResult> = assignments
        .iter()
        .map(|assignment| {
            let mut picks: Vec<Pick> = assignment
                .golfers
                .iter()
                .map(|golfer| Pick {
                    golfer_name: golfer.clone(),
                    score: lookup_score(&by_name, golfer),
                })
                .collect();
            picks.sort_by(|a, b| a.score.total_cmp(&b.score));

            ParticipantResult {
                person: assignment.person.clone(),
                avg_score_of_top_two: (picks[0].score + picks[1].score) / 2.0,
                picks,
            }
        })
        .collect();

    results.sort_by(|a, b| a.avg_score_of_top_two.total_cmp(&b.avg_score_of_top_two));
    results
}

/// One row per drafted golfer with their price, lowest score first.
#[must_use]
pub fn outright_rows<S: std::hash::BuildHasher>(
    assignments: &[ParticipantAssignment],
    standings: &[GolferStanding],
    odds: &HashMap<String, f64, S>,
) -> Vec<OutrightRow> {
    let by_name = index_standings(standings);

    let mut rows: Vec<OutrightRow> = assignments
        .iter()
        .flat_map(|assignment| {
            assignment.golfers.iter().map(|golfer| {
                let decimal_odds = odds.get(&normalized_surname(golfer)).copied();
                OutrightRow {
                    person: assignment.person.clone(),
                    golfer_name: golfer.clone(),
                    score: lookup_score(&by_name, golfer),
                    decimal_odds,
                    fractional_odds: decimal_to_fractional(decimal_odds),
                }
            })
        })
        .collect();

    rows.sort_by(|a, b| a.score.total_cmp(&b.score));
    rows
}
