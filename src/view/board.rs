use chrono::Utc;
use maud::{Markup, html};

use crate::model::{BoardData, CacheStatus, format_golf_score, format_time_ago};

/// Leaderboard places with ties shared: `[-1, 1.5, 1.5, 4]` → `1, T2, T2, 4`.
#[must_use]
pub fn placings(scores: &[f64]) -> Vec<String> {
    let mut places = Vec::with_capacity(scores.len());
    let mut start = 0;
    while start < scores.len() {
        let mut end = start + 1;
        while end < scores.len() && scores[end] == scores[start] {
            end += 1;
        }
        let place = if end - start > 1 {
            format!("T{}", start + 1)
        } else {
            (start + 1).to_string()
        };
        places.extend(std::iter::repeat_n(place, end - start));
        start = end;
    }
    places
}

fn odds_text(fractional: Option<&str>) -> &str {
    fractional.unwrap_or("-")
}

#[must_use]
pub fn render_refresh_notice(data: &BoardData, status: CacheStatus) -> Markup {
    let ago = format_time_ago(Utc::now() - data.refreshed_at);
    html! {
        @if status == CacheStatus::Stale {
            p class="refresh stale" {
                "Leaderboard unavailable; showing data from " (ago) " ago."
            }
        } @else {
            p class="refresh" {
                "Last refreshed " (ago) " ago (" (status.to_string()) ")."
            }
        }
    }
}

#[must_use]
pub fn render_scoreboard(data: &BoardData, status: CacheStatus) -> Markup {
    let averages: Vec<f64> = data
        .participants
        .iter()
        .map(|p| p.avg_score_of_top_two)
        .collect();
    let places = placings(&averages);

    html! {
        (render_refresh_notice(data, status))
        h3 { "Scoreboard" }
        @if data.participants.is_empty() {
            p { "No participants configured." }
        } @else {
            table class="styled-table" id="scoreboard" {
                thead {
                    tr {
                        th { "PLACE" }
                        th { "PLAYER" }
                        th { "AVG (BEST 2)" }
                        @for i in 1..=4 {
                            th { "PICK " (i) }
                            th { "SCORE" }
                        }
                    }
                }
                tbody {
                    @for (participant, place) in data.participants.iter().zip(&places) {
                        tr {
                            td { (place) }
                            td { (participant.person) }
                            td class="num" { (format_golf_score(participant.avg_score_of_top_two)) }
                            @for pick in &participant.picks {
                                td { (pick.golfer_name) }
                                td class="num" { (format_golf_score(pick.score)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_outright(data: &BoardData, status: CacheStatus) -> Markup {
    html! {
        h3 { "Golfers & Outright Odds" }
        @if !data.odds_available {
            p class="refresh" { "Odds unavailable right now." }
        }
        @if status == CacheStatus::Stale {
            p class="refresh stale" { "Showing the last good leaderboard." }
        }
        table class="styled-table" id="outright" {
            thead {
                tr {
                    th { "GOLFER" }
                    th { "PICKED BY" }
                    th { "SCORE" }
                    th { "ODDS" }
                }
            }
            tbody {
                @for row in &data.outrights {
                    tr {
                        td { (row.golfer_name) }
                        td { (row.person) }
                        td class="num" { (format_golf_score(row.score)) }
                        td class="num" { (odds_text(row.fractional_odds.as_deref())) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OutrightRow, ParticipantResult, Pick};

    #[test]
    fn tied_places() {
        assert_eq!(placings(&[-1.0, 1.5, 1.5, 4.0]), vec!["1", "T2", "T2", "4"]);
        assert_eq!(placings(&[0.0, 0.0, 0.0]), vec!["T1", "T1", "T1"]);
        assert!(placings(&[]).is_empty());
    }

    fn sample() -> BoardData {
        BoardData {
            participants: vec![ParticipantResult {
                person: "Alex".to_string(),
                avg_score_of_top_two: -1.0,
                picks: vec![
                    Pick { golfer_name: "T. Detry".to_string(), score: -3.0 },
                    Pick { golfer_name: "K. Yu".to_string(), score: 1.0 },
                    Pick { golfer_name: "S. Scheffler".to_string(), score: 2.0 },
                    Pick { golfer_name: "W. Clark".to_string(), score: 100.0 },
                ],
            }],
            outrights: vec![OutrightRow {
                person: "Alex".to_string(),
                golfer_name: "T. Detry".to_string(),
                score: -3.0,
                decimal_odds: None,
                fractional_odds: None,
            }],
            standings_count: 4,
            odds_available: false,
            refreshed_at: Utc::now(),
        }
    }

    #[test]
    fn scoreboard_lists_sorted_picks() {
        let html = render_scoreboard(&sample(), CacheStatus::Refreshed).into_string();
        assert!(html.contains("<td>Alex</td>"));
        let detry = html.find("T. Detry").unwrap();
        let clark = html.find("W. Clark").unwrap();
        assert!(detry < clark);
        assert!(html.contains("(live)"));
    }

    #[test]
    fn outright_marks_missing_odds() {
        let html = render_outright(&sample(), CacheStatus::Stale).into_string();
        assert!(html.contains("Odds unavailable"));
        assert!(html.contains("last good leaderboard"));
        assert!(html.contains(r#"<td class="num">-</td>"#));
    }
}
