use actix_web::web::Data;
use actix_web::{App, HttpServer};
use std::sync::Arc;

use fantasy_golf::args;
use fantasy_golf::controller::cache::BoardCache;
use fantasy_golf::controller::http_handlers::{AppState, configure};
use fantasy_golf::leaderboard::PgaTourClient;
use fantasy_golf::logging::init_logging;
use fantasy_golf::odds::OddsApiClient;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = args::args_checks().into_config()?;

    let leaderboard = PgaTourClient::new(config.leaderboard_url.clone(), config.http_timeout)?;
    let odds = OddsApiClient::new(
        config.odds_base_url.clone(),
        config.odds_sport.clone(),
        config.odds_regions.clone(),
        config.odds_api_key.clone(),
        config.http_timeout,
    )?;
    if config.odds_api_key.is_none() {
        tracing::info!("no odds api key, outright odds will be blank");
    }

    let state = Data::new(AppState {
        leaderboard: Arc::new(leaderboard),
        odds: Arc::new(odds),
        participants: config.participants.clone(),
        cache: BoardCache::new(),
        cache_ttl: config.cache_ttl,
        title: config.title.clone(),
    });

    tracing::info!(
        bind = %config.bind,
        port = config.port,
        participants = config.participants.len(),
        "starting leaderboard server"
    );

    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind((config.bind.as_str(), config.port))?
        .run()
        .await?;
    Ok(())
}
