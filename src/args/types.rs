use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

use crate::leaderboard::client::DEFAULT_LEADERBOARD_URL;
use crate::model::ParticipantAssignment;
use crate::odds::client::{DEFAULT_ODDS_BASE_URL, DEFAULT_ODDS_REGIONS, DEFAULT_ODDS_SPORT};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, env = "POOL_BIND", value_name = "ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, env = "POOL_PORT", value_name = "PORT", default_value = "8081")]
    pub port: u16,
    /// JSON array of {"person": .., "golfers": [4 names]}. The bundled pool is used if omitted.
    #[arg(
        long,
        env = "POOL_PICKS",
        value_name = "PICKS_JSON",
        value_parser = crate::args::validation::check_readable_picks_file
    )]
    pub picks: Option<PicksFile>,
    #[arg(long, env = "POOL_TITLE", value_name = "TITLE", default_value = "Masters 2025 - Friends Leaderboard")]
    pub title: String,
    #[arg(long, env = "LEADERBOARD_URL", value_name = "URL", default_value = DEFAULT_LEADERBOARD_URL)]
    pub leaderboard_url: String,
    #[arg(long, env = "ODDS_BASE_URL", value_name = "URL", default_value = DEFAULT_ODDS_BASE_URL)]
    pub odds_base_url: String,
    /// Odds are skipped when no key is given.
    #[arg(long, env = "ODDS_API_KEY", value_name = "KEY", hide_env_values = true)]
    pub odds_api_key: Option<String>,
    #[arg(long, env = "ODDS_SPORT", value_name = "SPORT_KEY", default_value = DEFAULT_ODDS_SPORT)]
    pub odds_sport: String,
    #[arg(long, env = "ODDS_REGIONS", value_name = "REGIONS", default_value = DEFAULT_ODDS_REGIONS)]
    pub odds_regions: String,
    /// Seconds a fetched board is reused before hitting the sources again.
    #[arg(long, env = "POOL_CACHE_TTL", value_name = "SECONDS", default_value = "20")]
    pub cache_ttl_secs: u64,
    #[arg(long, env = "POOL_HTTP_TIMEOUT", value_name = "SECONDS", default_value = "15")]
    pub http_timeout_secs: u64,
}

/// Contents of a validated picks file.
#[derive(Debug, Clone)]
pub struct PicksFile(pub Vec<ParticipantAssignment>);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub port: u16,
    pub participants: Arc<[ParticipantAssignment]>,
    pub title: String,
    pub leaderboard_url: String,
    pub odds_base_url: String,
    pub odds_api_key: Option<String>,
    pub odds_sport: String,
    pub odds_regions: String,
    pub cache_ttl: Duration,
    pub http_timeout: Duration,
}
