pub mod client;

use async_trait::async_trait;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;

use crate::error::PoolError;
use crate::model::GolferStanding;
use crate::score::parse_score_token;

pub use client::PgaTourClient;

pub const LEADERBOARD_COLUMN_COUNT: usize = 8;
pub const LEADERBOARD_SCRIPT_SELECTOR: &str = "script#leaderboard-seo-data";

/// Column-major leaderboard table: position, name, current score, hole,
/// round 1..4. Every column holds one cell per golfer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaderboardColumns {
    pub columns: Vec<Vec<String>>,
}

#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    async fn fetch_columns(&self) -> Result<LeaderboardColumns, PoolError>;
}

#[derive(Debug, Deserialize)]
struct SeoPayload {
    #[serde(rename = "mainEntity")]
    main_entity: MainEntity,
}

#[derive(Debug, Deserialize)]
struct MainEntity {
    #[serde(rename = "csvw:tableSchema")]
    table_schema: TableSchema,
}

#[derive(Debug, Deserialize)]
struct TableSchema {
    #[serde(rename = "csvw:columns")]
    columns: Vec<CsvwColumn>,
}

#[derive(Debug, Deserialize)]
struct CsvwColumn {
    #[serde(rename = "csvw:cells", default)]
    cells: Vec<CsvwCell>,
}

#[derive(Debug, Deserialize)]
struct CsvwCell {
    #[serde(rename = "csvw:value", default)]
    value: Value,
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Decode the embedded leaderboard JSON (the body of the SEO script tag).
///
/// # Errors
/// Returns `PoolError::Parse` when the JSON does not have the
/// `mainEntity → csvw:tableSchema → csvw:columns → csvw:cells` shape.
pub fn columns_from_json(json: &str) -> Result<LeaderboardColumns, PoolError> {
    let payload: SeoPayload = serde_json::from_str(json)?;
    let columns = payload
        .main_entity
        .table_schema
        .columns
        .iter()
        .map(|col| col.cells.iter().map(|c| cell_text(&c.value)).collect())
        .collect();
    Ok(LeaderboardColumns { columns })
}

/// Pull the leaderboard table out of the leaderboard page.
///
/// # Errors
/// Returns `PoolError::Parse` if the script tag is missing or its JSON is malformed.
pub fn columns_from_html(html: &str) -> Result<LeaderboardColumns, PoolError> {
    let selector = Selector::parse(LEADERBOARD_SCRIPT_SELECTOR)
        .map_err(|e| PoolError::Parse(e.to_string()))?;
    let document = Html::parse_document(html);
    let script = document.select(&selector).next().ok_or_else(|| {
        PoolError::Parse(format!("no {LEADERBOARD_SCRIPT_SELECTOR} element in page"))
    })?;
    let json: String = script.text().collect();
    columns_from_json(&json)
}

/// Transpose the eight leaderboard columns into one standing per golfer.
///
/// Columns past the eighth are ignored.
///
/// # Errors
/// Returns `PoolError::Parse` when fewer than eight columns are present or
/// the first eight differ in length.
pub fn parse_standings(table: &LeaderboardColumns) -> Result<Vec<GolferStanding>, PoolError> {
    if table.columns.len() < LEADERBOARD_COLUMN_COUNT {
        return Err(PoolError::Parse(format!(
            "leaderboard has {} columns, expected {LEADERBOARD_COLUMN_COUNT}",
            table.columns.len()
        )));
    }
    let cols = &table.columns[..LEADERBOARD_COLUMN_COUNT];
    let rows = cols[0].len();
    if let Some((idx, col)) = cols.iter().enumerate().find(|(_, c)| c.len() != rows) {
        return Err(PoolError::Parse(format!(
            "leaderboard column {idx} has {} cells, expected {rows}",
            col.len()
        )));
    }

    let standings = (0..rows)
        .map(|i| {
            let cell = |c: usize| cols[c][i].clone();
            GolferStanding {
                position: cell(0),
                name: cell(1),
                current_score: parse_score_token(&cols[2][i]),
                current_score_raw: cell(2),
                hole: cell(3),
                round1: cell(4),
                round2: cell(5),
                round3: cell(6),
                round4: cell(7),
            }
        })
        .collect();
    Ok(standings)
}
