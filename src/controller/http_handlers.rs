use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use super::board::load_board;
use super::cache::BoardCache;
use super::request::parse_board_request;
use crate::error::PoolError;
use crate::leaderboard::LeaderboardSource;
use crate::model::{BoardData, CacheStatus, ParticipantAssignment};
use crate::odds::OddsSource;
use crate::view::board::{render_outright, render_scoreboard};
use crate::view::index::render_index_template;

/// Shared by every worker: the sources, the pool and the refresh cache.
pub struct AppState {
    pub leaderboard: Arc<dyn LeaderboardSource>,
    pub odds: Arc<dyn OddsSource>,
    pub participants: Arc<[ParticipantAssignment]>,
    pub cache: BoardCache,
    pub cache_ttl: Duration,
    pub title: String,
}

impl AppState {
    /// # Errors
    ///
    /// Will return `Err` if the leaderboard cannot be fetched and nothing is cached
    pub async fn board(&self, use_cache: bool) -> Result<(BoardData, CacheStatus), PoolError> {
        self.cache
            .get_or_refresh(self.cache_ttl, use_cache, || {
                load_board(
                    self.leaderboard.as_ref(),
                    self.odds.as_ref(),
                    &self.participants,
                )
            })
            .await
    }
}

fn error_response(err: &PoolError) -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({"error": err.to_string()}))
}

pub async fn index(state: Data<AppState>) -> impl Responder {
    let markup = render_index_template(&state.title, state.cache_ttl.as_secs());
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn scores(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let request = parse_board_request(&query.0);
    match state.board(request.use_cache).await {
        Ok((board, _)) if request.want_json => HttpResponse::Ok().json(board),
        Ok((board, status)) => HttpResponse::Ok()
            .content_type("text/html")
            .body(render_scoreboard(&board, status).into_string()),
        Err(e) => error_response(&e),
    }
}

pub async fn outright(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let request = parse_board_request(&query.0);
    match state.board(request.use_cache).await {
        Ok((board, _)) if request.want_json => HttpResponse::Ok().json(board.outrights),
        Ok((board, status)) => HttpResponse::Ok()
            .content_type("text/html")
            .body(render_outright(&board, status).into_string()),
        Err(e) => error_response(&e),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/scores", web::get().to(scores))
        .route("/outright", web::get().to(outright))
        .route("/health", web::get().to(HttpResponse::Ok));
}
